//! In-memory adapters.

mod taste_store;

pub use taste_store::InMemoryTasteStore;
