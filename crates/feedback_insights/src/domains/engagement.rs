//! Submissions-per-day histogram.

use serde::Serialize;

use crate::record::FeedbackRecord;

const BUCKET_FORMAT: &str = "%Y-%m-%d";

/// One calendar day of submissions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u32,
}

/// Submission counts per UTC calendar day over the full snapshot, keyed by
/// `YYYY-MM-DD` in first-encounter order. Always computed over the whole
/// set, never a windowed subset. Records without a normalized timestamp
/// are left out of the histogram.
pub fn daily_counts(records: &[FeedbackRecord]) -> Vec<DailyCount> {
    let mut buckets: Vec<DailyCount> = Vec::new();
    for record in records {
        let Some(ts) = record.submitted_at else {
            continue;
        };
        let date = ts.date_naive().format(BUCKET_FORMAT).to_string();
        match buckets.iter_mut().find(|bucket| bucket.date == date) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(DailyCount { date, count: 1 }),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn record_at(submitted_at: Option<DateTime<Utc>>) -> FeedbackRecord {
        FeedbackRecord {
            id: "f".to_string(),
            submitter: "Ann".to_string(),
            submitted_at,
            food: None,
            cleanliness: None,
            music: None,
            service: None,
            comment: None,
        }
    }

    fn at(d: u32, h: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2026, 6, d, h, 0, 0).unwrap())
    }

    #[test]
    fn empty_snapshot_gives_empty_histogram() {
        assert!(daily_counts(&[]).is_empty());
    }

    #[test]
    fn buckets_keep_first_encounter_order() {
        let records = vec![
            record_at(at(14, 9)),
            record_at(at(12, 10)),
            record_at(at(14, 22)),
            record_at(at(13, 7)),
        ];
        let counts = daily_counts(&records);
        assert_eq!(
            counts,
            vec![
                DailyCount { date: "2026-06-14".into(), count: 2 },
                DailyCount { date: "2026-06-12".into(), count: 1 },
                DailyCount { date: "2026-06-13".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn undated_records_are_omitted() {
        let records = vec![record_at(None), record_at(at(14, 9))];
        let counts = daily_counts(&records);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].count, 1);
    }
}
