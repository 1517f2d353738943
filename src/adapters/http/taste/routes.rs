//! HTTP routes for taste endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_profile, submit_quiz, TasteHandlers};

/// Creates the taste router with all endpoints.
pub fn taste_routes(handlers: TasteHandlers) -> Router {
    Router::new()
        .route("/quiz", post(submit_quiz))
        .route("/profile/:user_external_id", get(get_profile))
        .with_state(handlers)
}
