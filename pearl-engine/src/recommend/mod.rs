//! Recommendation collaborator boundary
//!
//! The text-generation collaborator is external: it receives a
//! structured request (preference text, profile text, optional date
//! range) and returns named freeform text fields whose items are
//! newline-delimited. This module formats the request, invokes the
//! collaborator, and parses the response into typed lists. Any
//! collaborator failure surfaces as one generic user-facing error; raw
//! detail is logged for operators only.

pub mod client;

pub use client::HttpRecommendationClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;

/// User-facing message for any collaborator failure
pub const GENERIC_RECOMMENDATION_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Structured request sent to the collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Freeform preference text entered by the user
    pub preferences: String,
    /// Freeform profile text (past stays, demographics)
    pub profile_data: String,
    /// Optional date range text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_dates: Option<String>,
}

/// Raw collaborator response: named freeform text fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub room_recommendations: String,
    pub service_recommendations: String,
    pub local_attraction_recommendations: String,
}

/// Parsed, typed recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub rooms: Vec<String>,
    pub services: Vec<String>,
    pub local_attractions: Vec<String>,
}

/// Seam to the text-generation collaborator
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    async fn generate(&self, request: &RecommendationRequest) -> AppResult<RecommendationResponse>;
}

/// Formats requests, invokes the collaborator, parses the response
#[derive(Clone)]
pub struct RecommendationService {
    client: Arc<dyn RecommendationClient>,
}

impl RecommendationService {
    pub fn new(client: Arc<dyn RecommendationClient>) -> Self {
        Self { client }
    }

    /// Fetch recommendations for the given preference/profile text
    pub async fn recommend(&self, request: RecommendationRequest) -> AppResult<Recommendations> {
        match self.client.generate(&request).await {
            Ok(response) => Ok(Recommendations {
                rooms: parse_list(&response.room_recommendations),
                services: parse_list(&response.service_recommendations),
                local_attractions: parse_list(&response.local_attraction_recommendations),
            }),
            Err(err) => {
                tracing::error!(error = %err, "recommendation collaborator failed");
                Err(AppError::with_message(
                    ErrorCode::RecommendationUnavailable,
                    GENERIC_RECOMMENDATION_ERROR,
                ))
            }
        }
    }
}

/// Split a newline-delimited text block into clean list items
///
/// Trims whitespace, strips leading bullet markers ("-", "*", "•") and
/// "1."-style numbering, and drops empty lines.
pub fn parse_list(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let line = line.trim_start_matches(['-', '*', '•']).trim_start();
            let line = match line.split_once('.') {
                Some((prefix, rest))
                    if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) =>
                {
                    rest.trim_start()
                }
                _ => line,
            };
            if line.is_empty() {
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClient {
        response: AppResult<RecommendationResponse>,
    }

    #[async_trait]
    impl RecommendationClient for FixedClient {
        async fn generate(
            &self,
            _request: &RecommendationRequest,
        ) -> AppResult<RecommendationResponse> {
            self.response.clone()
        }
    }

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            preferences: "quiet room, seafood".into(),
            profile_data: "returning guest, two past stays".into(),
            reservation_dates: Some("2026-09-01 to 2026-09-05".into()),
        }
    }

    #[test]
    fn parse_list_strips_markers_and_empties() {
        let block = "- Sea View Suite\n* Garden Room\n\n  1. Penthouse\n2.Loft\n";
        assert_eq!(
            parse_list(block),
            vec!["Sea View Suite", "Garden Room", "Penthouse", "Loft"]
        );
    }

    #[test]
    fn parse_list_keeps_plain_lines_with_dots() {
        let block = "Dinner at 8.30 pm\nSpa access";
        assert_eq!(parse_list(block), vec!["Dinner at 8.30 pm", "Spa access"]);
    }

    #[test]
    fn parse_list_of_empty_block_is_empty() {
        assert!(parse_list("").is_empty());
        assert!(parse_list("\n  \n-\n").is_empty());
    }

    #[tokio::test]
    async fn responses_are_parsed_into_typed_lists() {
        let service = RecommendationService::new(Arc::new(FixedClient {
            response: Ok(RecommendationResponse {
                room_recommendations: "- Sea View Suite\n- Garden Room".into(),
                service_recommendations: "1. Breakfast in bed".into(),
                local_attraction_recommendations: "Old town walk\nHarbor cruise".into(),
            }),
        }));

        let result = service.recommend(request()).await.unwrap();
        assert_eq!(result.rooms, vec!["Sea View Suite", "Garden Room"]);
        assert_eq!(result.services, vec!["Breakfast in bed"]);
        assert_eq!(
            result.local_attractions,
            vec!["Old town walk", "Harbor cruise"]
        );
    }

    #[tokio::test]
    async fn failures_surface_as_one_generic_error() {
        let service = RecommendationService::new(Arc::new(FixedClient {
            response: Err(AppError::internal("upstream timeout: 504 from model host")),
        }));

        let err = service.recommend(request()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RecommendationUnavailable);
        assert_eq!(err.message, GENERIC_RECOMMENDATION_ERROR);
        // no raw diagnostic detail leaks to the user
        assert!(!err.message.contains("504"));
    }
}
