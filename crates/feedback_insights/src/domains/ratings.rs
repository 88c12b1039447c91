//! Per-category average scores.

use crate::record::{Category, CategoryAverages, FeedbackRecord};

/// Average score per category over `records`, rounded to 2 decimals.
///
/// Every record counts in the denominator of every category; a missing or
/// unrecognized symbol just contributes 0 to the numerator. An empty input
/// yields 0.0 everywhere rather than dividing by zero. Callers compute
/// this twice per view (once over the windowed subset, once over the full
/// snapshot) and the results must be kept apart.
pub fn category_averages(records: &[FeedbackRecord]) -> CategoryAverages {
    if records.is_empty() {
        return CategoryAverages::default();
    }
    let count = records.len() as f64;
    let mut averages = CategoryAverages::default();
    for category in Category::ALL {
        let sum: u32 = records.iter().map(|r| r.score(category)).sum();
        averages.set(category, round2(sum as f64 / count));
    }
    averages
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
