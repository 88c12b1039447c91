//! Snapshot-holding dashboard service over the external feedback store.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domains::windows::WindowMode;
use crate::domains::{engagement, export, ratings, submitters, suggestion, windows};
use crate::error::InsightsResult;
use crate::ingest;
use crate::record::FeedbackRecord;
use crate::types::{DashboardView, TodayPartition};
use feedback_store_client::FeedbackStore;

/// Admin dashboard over an immutable snapshot of the feedback store.
///
/// The snapshot is only ever replaced wholesale: `refresh` swaps in a
/// fresh bulk read, and a failed fetch leaves the previous snapshot in
/// place. Deletion goes through the store and is always followed by a
/// full refetch: snapshot version N becomes N+1, nothing is patched in
/// place. Every view is recomputed from the snapshot on demand.
pub struct FeedbackDashboard {
    store: Arc<dyn FeedbackStore>,
    records: Vec<FeedbackRecord>,
}

impl FeedbackDashboard {
    /// Start with an empty snapshot; call [`refresh`](Self::refresh) to
    /// populate it.
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self {
            store,
            records: Vec::new(),
        }
    }

    /// Current snapshot, in store order.
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    /// Replace the snapshot with a fresh bulk read.
    pub async fn refresh(&mut self) -> InsightsResult<()> {
        let stored = self.store.list_feedback().await?;
        tracing::debug!(count = stored.len(), "refreshed feedback snapshot");
        self.records = ingest::ingest_all(stored);
        Ok(())
    }

    /// Delete one record in the store, then refetch everything. The store
    /// decides whether the identifier exists.
    pub async fn delete(&mut self, feedback_id: &str) -> InsightsResult<()> {
        self.store.delete_feedback(feedback_id).await?;
        self.refresh().await
    }

    /// Recompute every derived view for `window`, anchored at `now`.
    pub fn view(&self, window: WindowMode, now: DateTime<Utc>) -> DashboardView {
        let windowed = windows::filter_records(&self.records, window, now);
        let windowed_averages = ratings::category_averages(&windowed);
        let overall_averages = ratings::category_averages(&self.records);
        let suggestion = suggestion::suggest(&overall_averages);
        DashboardView {
            window,
            windowed_averages,
            overall_averages,
            engagement: engagement::daily_counts(&self.records),
            top_submitter: submitters::most_frequent(&self.records),
            suggestion,
        }
    }

    /// Today's submissions versus everything older, in snapshot order.
    /// Undated records land on the "older" side.
    pub fn today_partition(&self, now: DateTime<Utc>) -> TodayPartition {
        let today_date = now.date_naive();
        let (today, older) = self.records.iter().cloned().partition(|record| {
            record
                .submitted_at
                .map(|ts| ts.date_naive() == today_date)
                .unwrap_or(false)
        });
        TodayPartition { today, older }
    }

    /// Flatten the snapshot for the file-download collaborator.
    pub fn export_csv(&self) -> String {
        export::to_csv(&self.records)
    }
}
