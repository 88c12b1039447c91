//! Derived-view types handed to presentation collaborators as plain data.

use serde::Serialize;

use crate::domains::engagement::DailyCount;
use crate::domains::windows::WindowMode;
use crate::record::{CategoryAverages, FeedbackRecord};

/// Everything one render of the dashboard needs, recomputed on demand
/// from the current snapshot.
///
/// `windowed_averages` covers the records selected by `window`;
/// `overall_averages` always covers the full snapshot and is the only
/// input to the suggestion. The engagement histogram and top submitter
/// are likewise computed over the full snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardView {
    pub window: WindowMode,
    pub windowed_averages: CategoryAverages,
    pub overall_averages: CategoryAverages,
    pub engagement: Vec<DailyCount>,
    pub top_submitter: String,
    pub suggestion: String,
}

/// Today's records split from the older ones, both in snapshot order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TodayPartition {
    pub today: Vec<FeedbackRecord>,
    pub older: Vec<FeedbackRecord>,
}
