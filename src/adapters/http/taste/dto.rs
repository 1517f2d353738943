//! HTTP DTOs for taste endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::taste::TasteProfileView;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One answered quiz item on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizAnswerDto {
    pub artwork_id: String,
    pub rating: i8,
}

/// Request to submit a taste quiz.
#[derive(Debug, Clone, Deserialize)]
pub struct TasteQuizRequest {
    pub user_external_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub answers: Vec<QuizAnswerDto>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Profile response shared by both taste endpoints. Vectors are `null` until
/// the first quiz is submitted.
#[derive(Debug, Clone, Serialize)]
pub struct TasteProfileResponse {
    pub user_external_id: String,
    pub baseline_vector: Option<Vec<f64>>,
    pub refined_vector: Option<Vec<f64>>,
    pub engagement_score: f64,
}

impl From<TasteProfileView> for TasteProfileResponse {
    fn from(view: TasteProfileView) -> Self {
        Self {
            user_external_id: view.user_external_id,
            baseline_vector: view.baseline_vector.map(|v| v.to_vec()),
            refined_vector: view.refined_vector.map(|v| v.to_vec()),
            engagement_score: view.engagement_score,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taste::TasteVector;

    #[test]
    fn taste_quiz_request_deserializes() {
        let json = r#"{
            "user_external_id": "clerk-1",
            "display_name": "Ada",
            "answers": [
                {"artwork_id": "A", "rating": 1},
                {"artwork_id": "B", "rating": -1}
            ]
        }"#;
        let req: TasteQuizRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_external_id, "clerk-1");
        assert_eq!(req.display_name.as_deref(), Some("Ada"));
        assert_eq!(req.answers.len(), 2);
        assert_eq!(req.answers[1].rating, -1);
    }

    #[test]
    fn taste_quiz_request_display_name_is_optional() {
        let json = r#"{"user_external_id": "clerk-1", "answers": []}"#;
        let req: TasteQuizRequest = serde_json::from_str(json).unwrap();
        assert!(req.display_name.is_none());
        assert!(req.answers.is_empty());
    }

    #[test]
    fn profile_response_serializes_absent_vectors_as_null() {
        let response = TasteProfileResponse {
            user_external_id: "clerk-1".to_string(),
            baseline_vector: None,
            refined_vector: None,
            engagement_score: 0.0,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["baseline_vector"].is_null());
        assert!(json["refined_vector"].is_null());
        assert_eq!(json["engagement_score"], 0.0);
    }

    #[test]
    fn profile_response_from_view_flattens_vectors() {
        let vector = TasteVector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let view = TasteProfileView {
            user_external_id: "clerk-1".to_string(),
            baseline_vector: Some(vector),
            refined_vector: Some(vector),
            engagement_score: 1.2,
        };

        let response: TasteProfileResponse = view.into();
        assert_eq!(response.baseline_vector.as_ref().unwrap().len(), 8);
        assert_eq!(response.baseline_vector.unwrap()[0], 1.0);
    }

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("No answers provided");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "No answers provided");
    }

    #[test]
    fn error_response_omits_absent_details() {
        let error = ErrorResponse::not_found("User not found: clerk-1");
        let json = serde_json::to_value(&error).unwrap();
        assert!(json.get("details").is_none());
    }
}
