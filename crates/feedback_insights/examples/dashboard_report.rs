//! Fetch the live feedback collection and print every derived view.
//!
//! Requires `FEEDBACK_STORE_API_KEY` and `FEEDBACK_STORE_PROJECT_ID`;
//! `FEEDBACK_STORE_BASE_URL` overrides the hosted endpoint and
//! `FEEDBACK_LOG_LEVEL` (or `RUST_LOG`) tunes logging.

use std::sync::Arc;

use chrono::Utc;
use feedback_insights::{FeedbackDashboard, WindowMode};
use feedback_store_client::config::Config;
use feedback_store_client::http_client::ReqwestFeedbackStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_env = std::env::var("FEEDBACK_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let config = Config::from_env()?;
    let store = ReqwestFeedbackStore::from_config(&config);
    let mut dashboard = FeedbackDashboard::new(Arc::new(store));
    dashboard.refresh().await?;

    let now = Utc::now();
    for window in [
        WindowMode::All,
        WindowMode::Day,
        WindowMode::Week,
        WindowMode::Month,
    ] {
        let view = dashboard.view(window, now);
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    println!("--- {} ---", feedback_insights::EXPORT_FILE_NAME);
    println!("{}", dashboard.export_csv());
    Ok(())
}
