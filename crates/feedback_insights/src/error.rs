//! Error types for the insights crate.

use thiserror::Error;

/// Errors surfaced by the dashboard service. The pure aggregation
/// functions never fail; only the store boundary does.
#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("store error: {0}")]
    Store(#[from] feedback_store_client::StoreError),
}

/// Result type alias for dashboard operations.
pub type InsightsResult<T> = Result<T, InsightsError>;
