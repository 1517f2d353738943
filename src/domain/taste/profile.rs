//! Taste profile entity, one per user.

use crate::domain::foundation::Timestamp;

use super::TasteVector;

/// A user's taste profile. The baseline vector is captured on the first quiz
/// and never recomputed; the refined vector drifts toward new submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct TasteProfile {
    pub baseline_vector: Option<TasteVector>,
    pub refined_vector: Option<TasteVector>,
    pub engagement_score: f64,
    pub updated_at: Timestamp,
}

impl TasteProfile {
    /// An empty profile with no vectors and zero engagement.
    pub fn empty(now: Timestamp) -> Self {
        Self {
            baseline_vector: None,
            refined_vector: None,
            engagement_score: 0.0,
            updated_at: now,
        }
    }
}
