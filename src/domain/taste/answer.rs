//! A single quiz answer: one artwork, one rating.

use super::Rating;

/// One answered quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswer {
    pub artwork_id: String,
    pub rating: Rating,
}

impl QuizAnswer {
    pub fn new(artwork_id: impl Into<String>, rating: Rating) -> Self {
        Self {
            artwork_id: artwork_id.into(),
            rating,
        }
    }
}
