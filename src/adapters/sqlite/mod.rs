//! SQLite persistence adapters.

mod taste_store;

pub use taste_store::{bootstrap_schema, SqliteTasteStore};
