//! Application layer: use-case handlers orchestrating domain logic and ports.

pub mod handlers;
