//! Textual improvement recommendation.

use crate::record::{Category, CategoryAverages};

/// Emitted when no category average falls below the threshold.
pub const ALL_GOOD: &str = "Overall feedback is good.";

const IMPROVEMENT_THRESHOLD: f64 = 3.0;

/// Single recommendation derived from the OVERALL (unfiltered) averages.
///
/// Scans categories in declaration order and names the first one holding
/// the minimum average, provided that minimum is strictly below 3.0.
pub fn suggest(overall: &CategoryAverages) -> String {
    let mut lowest = (Category::Food, overall.get(Category::Food));
    for (category, average) in overall.iter().skip(1) {
        if average < lowest.1 {
            lowest = (category, average);
        }
    }
    if lowest.1 < IMPROVEMENT_THRESHOLD {
        format!("{} should be improved.", lowest.0.label())
    } else {
        ALL_GOOD.to_string()
    }
}
