//! `FeedbackStore` trait, wire-level record types and a reqwest-based client
//! for the hosted feedback store.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod retry;
pub mod utils;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

impl StoreError {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            404 => StoreError::NotFound(body),
            401 | 403 => StoreError::Auth(body),
            422 => StoreError::InvalidInput(body),
            _ => StoreError::Status { status, body },
        }
    }

    /// Whether a retry could plausibly succeed: transport failures and
    /// server-side errors are transient, everything else is final.
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Http(_) => true,
            StoreError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Timestamp as the store delivers it. Newer records carry the native
/// temporal object; older ones a raw epoch-millisecond or text value.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum TimestampRepr {
    Native {
        seconds: i64,
        #[serde(default)]
        nanos: u32,
    },
    Millis(i64),
    Text(String),
}

impl TimestampRepr {
    /// Collapse any wire representation to a single UTC instant.
    /// `None` when the value cannot name a point in time.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            TimestampRepr::Native { seconds, nanos } => {
                Utc.timestamp_opt(*seconds, *nanos).single()
            }
            TimestampRepr::Millis(millis) => Utc.timestamp_millis_opt(*millis).single(),
            TimestampRepr::Text(text) => utils::parse_timestamp_text(text),
        }
    }
}

/// A feedback record exactly as the store returns it. Rating symbols are
/// kept verbatim; scoring and normalization happen downstream.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct StoredFeedback {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub timestamp: Option<TimestampRepr>,
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    pub cleanliness: Option<String>,
    #[serde(default)]
    pub music: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[async_trait]
pub trait FeedbackStore: Send + Sync + 'static {
    /// Bulk read of every feedback record, in store order.
    async fn list_feedback(&self) -> Result<Vec<StoredFeedback>, StoreError>;

    /// Delete a record by identifier. Whether the identifier exists is the
    /// store's business; callers get whatever the store decides.
    async fn delete_feedback(&self, feedback_id: &str) -> Result<(), StoreError>;
}
