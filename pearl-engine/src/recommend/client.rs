//! HTTP client for the text-generation collaborator

use super::{RecommendationClient, RecommendationRequest, RecommendationResponse};
use async_trait::async_trait;
use reqwest::Client;
use shared::{AppError, AppResult};
use std::time::Duration;

/// Talks to the collaborator over HTTP
pub struct HttpRecommendationClient {
    client: Client,
    base_url: String,
}

impl HttpRecommendationClient {
    /// `base_url` is the collaborator root, e.g. "http://localhost:3400"
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RecommendationClient for HttpRecommendationClient {
    async fn generate(&self, request: &RecommendationRequest) -> AppResult<RecommendationResponse> {
        let url = format!("{}/v1/recommendations", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Recommendation request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::internal(format!(
                "Recommendation request failed with status {status}: {body}"
            )));
        }

        let parsed: RecommendationResponse = response.json().await.map_err(|e| {
            AppError::internal(format!("Failed to parse recommendation response: {e}"))
        })?;
        Ok(parsed)
    }
}
