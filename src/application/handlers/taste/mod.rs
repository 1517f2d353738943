//! Taste command and query handlers.

mod get_profile;
mod submit_quiz;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use submit_quiz::{SubmitQuizCommand, SubmitQuizHandler};

use crate::domain::taste::TasteVector;

/// Read model returned by both taste operations: the external identity plus
/// the profile fields, with absent vectors for users who have not taken the
/// quiz yet.
#[derive(Debug, Clone, PartialEq)]
pub struct TasteProfileView {
    pub user_external_id: String,
    pub baseline_vector: Option<TasteVector>,
    pub refined_vector: Option<TasteVector>,
    pub engagement_score: f64,
}
