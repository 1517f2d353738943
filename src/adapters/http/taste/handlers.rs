//! HTTP handlers for taste endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::taste::{
    GetProfileHandler, GetProfileQuery, SubmitQuizCommand, SubmitQuizHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::taste::{QuizAnswer, Rating};

use super::dto::{ErrorResponse, TasteProfileResponse, TasteQuizRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TasteHandlers {
    submit_quiz_handler: Arc<SubmitQuizHandler>,
    get_profile_handler: Arc<GetProfileHandler>,
}

impl TasteHandlers {
    pub fn new(
        submit_quiz_handler: Arc<SubmitQuizHandler>,
        get_profile_handler: Arc<GetProfileHandler>,
    ) -> Self {
        Self {
            submit_quiz_handler,
            get_profile_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /taste/quiz - Submit quiz answers and update the taste profile
pub async fn submit_quiz(
    State(handlers): State<TasteHandlers>,
    Json(req): Json<TasteQuizRequest>,
) -> Response {
    let mut answers = Vec::with_capacity(req.answers.len());
    for dto in req.answers {
        match Rating::try_from_i8(dto.rating) {
            Ok(rating) => answers.push(QuizAnswer::new(dto.artwork_id, rating)),
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(e.to_string())),
                )
                    .into_response()
            }
        }
    }

    let cmd = SubmitQuizCommand {
        user_external_id: req.user_external_id,
        display_name: req.display_name,
        answers,
    };

    match handlers.submit_quiz_handler.handle(cmd).await {
        Ok(view) => {
            let response: TasteProfileResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_taste_error(e),
    }
}

/// GET /taste/profile/:user_external_id - Fetch a taste profile
pub async fn get_profile(
    State(handlers): State<TasteHandlers>,
    Path(user_external_id): Path<String>,
) -> Response {
    let query = GetProfileQuery { user_external_id };

    match handlers.get_profile_handler.handle(query).await {
        Ok(view) => {
            let response: TasteProfileResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_taste_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_taste_error(error: DomainError) -> Response {
    match error.code {
        ErrorCode::ValidationFailed => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message)),
        )
            .into_response(),
        ErrorCode::UserNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.message)),
        )
            .into_response(),
        // The store resolves creation races internally; if a violation still
        // surfaces, report it as a retryable conflict.
        ErrorCode::ConstraintViolation => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(error.message)),
        )
            .into_response(),
        ErrorCode::DatabaseError | ErrorCode::InternalError => {
            tracing::error!(%error, "taste request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An unexpected error occurred")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_400() {
        let error = DomainError::validation("answers", "No answers provided");
        let response = handle_taste_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn user_not_found_maps_to_404() {
        let error = DomainError::new(ErrorCode::UserNotFound, "User not found: x");
        let response = handle_taste_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn constraint_violation_maps_to_409() {
        let error = DomainError::new(ErrorCode::ConstraintViolation, "Duplicate external id");
        let response = handle_taste_error(error);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_error_maps_to_500() {
        let error = DomainError::new(ErrorCode::DatabaseError, "Database error: locked");
        let response = handle_taste_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
