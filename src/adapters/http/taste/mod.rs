//! HTTP adapter for the taste endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TasteHandlers;
pub use routes::taste_routes;
