//! Application command and query handlers.

pub mod taste;
