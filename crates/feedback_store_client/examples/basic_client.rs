//! Fetch the feedback collection and print a one-line summary per record.
//!
//! Requires `FEEDBACK_STORE_API_KEY` and `FEEDBACK_STORE_PROJECT_ID` in the
//! environment; `FEEDBACK_STORE_BASE_URL` overrides the hosted endpoint.

use feedback_store_client::config::Config;
use feedback_store_client::http_client::ReqwestFeedbackStore;
use feedback_store_client::FeedbackStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let store = ReqwestFeedbackStore::from_config(&config);

    let records = store.list_feedback().await?;
    println!("{} feedback records", records.len());
    for record in records {
        println!(
            "  {} by {} at {:?}",
            record.id,
            record.name.as_deref().unwrap_or("Anonymous"),
            record.timestamp.as_ref().and_then(|t| t.to_utc()),
        );
    }
    Ok(())
}
