//! EchoGallery Taste Backend
//!
//! This crate records user preferences toward artworks collected via a quiz
//! and derives a per-user taste profile: an 8-dimensional feature vector plus
//! an accumulating engagement score.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
