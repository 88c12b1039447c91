//! Time-window classification of feedback records.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::record::FeedbackRecord;

/// Which time-filtered subset of the snapshot feeds the windowed views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    All,
    Day,
    Week,
    Month,
}

/// Filter a snapshot against a window anchored at `now`, preserving order.
///
/// `Day` keeps records on the same UTC calendar date as `now`; `Week` and
/// `Month` roll back from `now` itself (7 days, 1 calendar month). The
/// asymmetry is deliberate and part of the contract. Records without a
/// normalized timestamp appear only under `All`.
pub fn filter_records(
    records: &[FeedbackRecord],
    mode: WindowMode,
    now: DateTime<Utc>,
) -> Vec<FeedbackRecord> {
    if mode == WindowMode::All {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| in_window(record.submitted_at, mode, now))
        .cloned()
        .collect()
}

fn in_window(submitted_at: Option<DateTime<Utc>>, mode: WindowMode, now: DateTime<Utc>) -> bool {
    let Some(ts) = submitted_at else {
        return mode == WindowMode::All;
    };
    match mode {
        WindowMode::All => true,
        WindowMode::Day => ts.date_naive() == now.date_naive(),
        WindowMode::Week => ts >= now - Duration::days(7),
        WindowMode::Month => now
            .checked_sub_months(Months::new(1))
            .map(|cutoff| ts >= cutoff)
            .unwrap_or(false),
    }
}
