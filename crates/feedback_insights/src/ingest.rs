//! Ingestion boundary: wire records from the store become typed
//! [`FeedbackRecord`]s with one canonical instant type.

use crate::record::{ANONYMOUS, FeedbackRecord};
use feedback_store_client::StoredFeedback;

/// Convert one wire record. The two timestamp representations collapse to
/// `DateTime<Utc>` here; an unparsable value degrades to `None` so the
/// record still participates in unfiltered views.
pub fn ingest(stored: StoredFeedback) -> FeedbackRecord {
    let submitter = match stored.name {
        Some(name) if !name.is_empty() => name,
        _ => ANONYMOUS.to_string(),
    };
    let submitted_at = stored.timestamp.as_ref().and_then(|t| t.to_utc());
    FeedbackRecord {
        id: stored.id,
        submitter,
        submitted_at,
        food: stored.food,
        cleanliness: stored.cleanliness,
        music: stored.music,
        service: stored.service,
        comment: stored.feedback,
    }
}

/// Convert a bulk read, preserving store order.
pub fn ingest_all(stored: Vec<StoredFeedback>) -> Vec<FeedbackRecord> {
    stored.into_iter().map(ingest).collect()
}
