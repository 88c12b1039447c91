//! HTTP client implementation for the hosted feedback store.
//!
//! This module provides a reqwest-based implementation of the
//! [`FeedbackStore`](crate::FeedbackStore) trait.

use crate::config::Config;
use crate::retry::RetryPolicy;
use crate::{FeedbackStore, StoreError, StoredFeedback};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the feedback store REST API using reqwest.
///
/// The bulk read is retried per the configured [`RetryPolicy`] because
/// resilience lives on this side of the boundary; callers above it see a
/// single success or a final error.
#[derive(Clone, Debug)]
pub struct ReqwestFeedbackStore {
    base_url: String,
    project_id: String,
    api_key: SecretString,
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl ReqwestFeedbackStore {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the feedback store API
    /// * `project_id` - The project whose feedback collection is read
    /// * `api_key` - The API key for authentication
    pub fn new(base_url: &str, project_id: impl Into<String>, api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key,
            client,
            retry: RetryPolicy::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.base_url,
            config.project_id.clone(),
            config.api_key.clone(),
        )
    }

    /// Replace the default retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth("API_KEY", Some(self.api_key.expose_secret()))
    }

    /// Build an authenticated DELETE request.
    fn delete_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .delete(url)
            .basic_auth("API_KEY", Some(self.api_key.expose_secret()))
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, StoreError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Execute a request with no expected response body.
    async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), StoreError> {
        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }

    fn feedback_url(&self) -> String {
        format!(
            "{}/api/v1/projects/{}/feedback",
            self.base_url, self.project_id
        )
    }
}

/// Extract error information from a failed response.
async fn error_from_response(resp: reqwest::Response) -> StoreError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let body_snippet: String = body.chars().take(256).collect();
    StoreError::from_status(status, body_snippet)
}

#[async_trait]
impl FeedbackStore for ReqwestFeedbackStore {
    async fn list_feedback(&self) -> Result<Vec<StoredFeedback>, StoreError> {
        let url = self.feedback_url();
        let result = self
            .retry
            .retry_async(
                || self.execute_json::<Vec<StoredFeedback>>(self.get_request(&url)),
                StoreError::is_transient,
            )
            .await;
        match &result {
            Ok(records) => tracing::debug!(count = records.len(), "fetched feedback collection"),
            Err(e) => tracing::warn!(error = %e, "feedback fetch failed"),
        }
        result
    }

    async fn delete_feedback(&self, feedback_id: &str) -> Result<(), StoreError> {
        let url = format!("{}/{}", self.feedback_url(), feedback_id);
        self.execute_empty(self.delete_request(&url)).await?;
        tracing::info!(feedback_id, "deleted feedback record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn client_new_and_basic() {
        let store = ReqwestFeedbackStore::new(
            "http://localhost/",
            "cafe-main",
            SecretString::new("key".into()),
        );
        assert_eq!(
            store.feedback_url(),
            "http://localhost/api/v1/projects/cafe-main/feedback"
        );
    }
}
