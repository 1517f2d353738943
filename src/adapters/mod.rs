//! Adapters: concrete implementations of the ports.

pub mod embedding;
pub mod http;
pub mod memory;
pub mod sqlite;
