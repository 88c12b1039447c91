//! End-to-end flow through the HTTP store client: fetch, view, delete,
//! refetch.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use feedback_insights::{FeedbackDashboard, WindowMode};
use feedback_store_client::http_client::ReqwestFeedbackStore;
use secrecy::SecretString;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dashboard_for(server: &MockServer) -> FeedbackDashboard {
    let store = ReqwestFeedbackStore::new(
        &server.uri(),
        "cafe-main",
        SecretString::new("key".into()),
    );
    FeedbackDashboard::new(Arc::new(store))
}

#[tokio::test]
async fn fetch_then_view_produces_the_derived_data() {
    let mock_server = MockServer::start().await;

    // 1_750_000_000 s = 2025-06-15T15:06:40Z
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/cafe-main/feedback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "f1",
                "name": "Ann",
                "timestamp": {"seconds": 1_750_000_000, "nanos": 0},
                "food": "😍",
                "cleanliness": "😡",
                "service": "🙂",
                "feedback": "lovely place"
            },
            {
                "id": "f2",
                "name": "Ann",
                "timestamp": 1_749_400_000_000_i64,
                "food": "🙂",
                "cleanliness": "🙂",
                "music": "😐",
                "service": "🙂"
            },
            {
                "id": "f3",
                "timestamp": "2025-06-01T08:00:00Z",
                "food": "😐"
            }
        ])))
        .mount(&mock_server)
        .await;

    let mut dashboard = dashboard_for(&mock_server);
    dashboard.refresh().await.expect("refresh");

    let now = Utc.with_ymd_and_hms(2025, 6, 15, 18, 0, 0).unwrap();
    let view = dashboard.view(WindowMode::Day, now);

    // Only f1 falls on 2025-06-15.
    assert_eq!(view.windowed_averages.food, 4.0);
    assert_eq!(view.windowed_averages.music, 0.0);

    // Overall averages span all three records.
    assert_eq!(view.overall_averages.food, 3.0); // (4 + 3 + 2) / 3
    assert_eq!(view.overall_averages.music, 0.67); // (0 + 2 + 0) / 3

    // Music holds the overall minimum, so the suggestion names it.
    assert_eq!(view.suggestion, "Music should be improved.");

    // Ann submitted twice, the anonymous visitor once.
    assert_eq!(view.top_submitter, "Ann");

    // Three distinct days, first-encounter order.
    let dates: Vec<&str> = view.engagement.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, ["2025-06-15", "2025-06-08", "2025-06-01"]);

    // Export: header plus one row per record, anonymous coerced.
    let csv = dashboard.export_csv();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.lines().nth(3).unwrap().starts_with("Anonymous,"));
}

#[tokio::test]
async fn delete_invalidates_and_refetches_the_snapshot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/cafe-main/feedback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "f1", "name": "Ann", "timestamp": {"seconds": 1_750_000_000, "nanos": 0}},
            {"id": "f2", "name": "Bob", "timestamp": {"seconds": 1_750_000_100, "nanos": 0}}
        ])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/projects/cafe-main/feedback/f1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/cafe-main/feedback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "f2", "name": "Bob", "timestamp": {"seconds": 1_750_000_100, "nanos": 0}}
        ])))
        .mount(&mock_server)
        .await;

    let mut dashboard = dashboard_for(&mock_server);
    dashboard.refresh().await.expect("refresh");
    assert_eq!(dashboard.records().len(), 2);

    dashboard.delete("f1").await.expect("delete");
    assert_eq!(dashboard.records().len(), 1);
    assert_eq!(dashboard.records()[0].submitter, "Bob");
}

#[tokio::test]
async fn failed_delete_leaves_the_snapshot_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/cafe-main/feedback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "f1", "name": "Ann", "timestamp": {"seconds": 1_750_000_000, "nanos": 0}}
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/projects/cafe-main/feedback/f1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone already"))
        .mount(&mock_server)
        .await;

    let mut dashboard = dashboard_for(&mock_server);
    dashboard.refresh().await.expect("refresh");
    assert!(dashboard.delete("f1").await.is_err());
    assert_eq!(dashboard.records().len(), 1);
}
