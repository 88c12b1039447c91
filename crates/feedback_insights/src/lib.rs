//! Analytics engine for the café feedback admin dashboard.
//!
//! Turns an unordered snapshot of user-submitted feedback records into
//! time-filtered views, per-category average ratings, a daily engagement
//! histogram, a most-frequent-submitter ranking, a textual improvement
//! suggestion and a flat CSV export. Every derived view is a pure
//! function of the snapshot plus, where time matters, a caller-supplied
//! reference instant; the only async boundaries are the bulk fetch from
//! the store and the per-record delete, both behind
//! [`feedback_store_client::FeedbackStore`].

pub mod domains;
pub mod error;
pub mod ingest;
pub mod record;
pub mod service;
pub mod types;

pub use domains::engagement::DailyCount;
pub use domains::export::EXPORT_FILE_NAME;
pub use domains::submitters::NO_SUBMITTER;
pub use domains::windows::WindowMode;
pub use error::{InsightsError, InsightsResult};
pub use record::{ANONYMOUS, Category, CategoryAverages, FeedbackRecord, Rating};
pub use service::FeedbackDashboard;
pub use types::{DashboardView, TodayPartition};
