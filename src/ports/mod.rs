//! Ports: trait boundaries between the application core and its adapters.

mod embedding_model;
mod taste_store;

pub use embedding_model::EmbeddingModel;
pub use taste_store::TasteStore;
