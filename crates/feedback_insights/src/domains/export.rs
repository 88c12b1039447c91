//! Flat CSV rendering of the snapshot.

use crate::record::FeedbackRecord;

/// Suggested file name for the file-saving collaborator (UTF-8, comma
/// delimited).
pub const EXPORT_FILE_NAME: &str = "feedback_export.csv";

const HEADER: &str = "Name,Timestamp,Food,Cleanliness,Music,Service,Feedback";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialize the snapshot as comma-delimited text: a header plus one row
/// per record, in input order.
///
/// Only the free-text comment is quoted (embedded quotes doubled); the
/// identity, timestamp and raw symbol columns are written as-is and are
/// NOT delimiter-safe. A record whose timestamp never normalized gets an
/// empty timestamp column.
pub fn to_csv(records: &[FeedbackRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.to_string());
    for record in records {
        let timestamp = record
            .submitted_at
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default();
        let comment = record
            .comment
            .as_deref()
            .unwrap_or_default()
            .replace('"', "\"\"");
        lines.push(format!(
            "{},{},{},{},{},{},\"{}\"",
            record.submitter,
            timestamp,
            record.food.as_deref().unwrap_or_default(),
            record.cleanliness.as_deref().unwrap_or_default(),
            record.music.as_deref().unwrap_or_default(),
            record.service.as_deref().unwrap_or_default(),
            comment,
        ));
    }
    lines.join("\n")
}
