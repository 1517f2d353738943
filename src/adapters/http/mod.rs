//! HTTP adapters - REST API implementations.

pub mod health;
pub mod taste;

// Re-export key types for convenience
pub use taste::taste_routes;
pub use taste::TasteHandlers;

use axum::{routing::get, Router};

/// Assembles the full API router: liveness plus the taste endpoints.
pub fn api_router(handlers: TasteHandlers) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/taste", taste_routes(handlers))
}
