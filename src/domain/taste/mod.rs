//! Taste domain: ratings, quiz answers, interactions, vectors, profiles,
//! and the pure profile update engine.

mod answer;
pub mod engine;
mod interaction;
mod profile;
mod rating;
mod vector;

pub use answer::QuizAnswer;
pub use interaction::{Interaction, QUIZ_SOURCE};
pub use profile::TasteProfile;
pub use rating::Rating;
pub use vector::{TasteVector, TASTE_VECTOR_DIM};
