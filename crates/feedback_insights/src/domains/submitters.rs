//! Most frequent submitter ranking.

use crate::record::FeedbackRecord;

/// Returned when the snapshot is empty.
pub const NO_SUBMITTER: &str = "N/A";

/// Identity with the most submissions. Ties go to the identity that was
/// encountered first in input order, which makes the result deterministic
/// for a fixed snapshot regardless of any map iteration order.
pub fn most_frequent(records: &[FeedbackRecord]) -> String {
    let mut tallies: Vec<(&str, u32)> = Vec::new();
    for record in records {
        match tallies.iter_mut().find(|(name, _)| *name == record.submitter) {
            Some((_, count)) => *count += 1,
            None => tallies.push((record.submitter.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, u32)> = None;
    for (name, count) in tallies {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((name, count)),
        }
    }
    best.map(|(name, _)| name.to_string())
        .unwrap_or_else(|| NO_SUBMITTER.to_string())
}
