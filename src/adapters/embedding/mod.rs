//! Embedding model adapters.

mod stub;

pub use stub::StubEmbeddingModel;
