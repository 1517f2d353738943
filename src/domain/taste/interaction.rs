//! Append-only record of a user reacting to one artwork.

use crate::domain::foundation::{Timestamp, ValidationError};

use super::{QuizAnswer, Rating};

/// Source tag recorded for quiz submissions. Other flows (feed, museum mode)
/// use their own tags.
pub const QUIZ_SOURCE: &str = "quiz";

/// One artwork interaction. Immutable once written.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub artwork_id: String,
    pub rating: Rating,
    pub source: String,
    pub dwell_time: Option<f64>,
    pub viewed_at: Timestamp,
    pub metadata: Option<serde_json::Value>,
}

impl Interaction {
    /// Creates an interaction from a quiz answer, stamped with `now`.
    pub fn from_quiz_answer(answer: &QuizAnswer, now: Timestamp) -> Self {
        Self {
            artwork_id: answer.artwork_id.clone(),
            rating: answer.rating,
            source: QUIZ_SOURCE.to_string(),
            dwell_time: None,
            viewed_at: now,
            metadata: None,
        }
    }

    /// Attaches a dwell time in seconds. Must be non-negative.
    pub fn with_dwell_time(mut self, seconds: f64) -> Result<Self, ValidationError> {
        if seconds < 0.0 || !seconds.is_finite() {
            return Err(ValidationError::invalid_format(
                "dwell_time",
                "must be a non-negative number of seconds",
            ));
        }
        self.dwell_time = Some(seconds);
        Ok(self)
    }

    /// Attaches free-form metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_quiz_answer_defaults_to_quiz_source() {
        let answer = QuizAnswer::new("art-1", Rating::Like);
        let interaction = Interaction::from_quiz_answer(&answer, Timestamp::now());

        assert_eq!(interaction.artwork_id, "art-1");
        assert_eq!(interaction.rating, Rating::Like);
        assert_eq!(interaction.source, QUIZ_SOURCE);
        assert!(interaction.dwell_time.is_none());
        assert!(interaction.metadata.is_none());
    }

    #[test]
    fn with_dwell_time_accepts_non_negative_seconds() {
        let answer = QuizAnswer::new("art-1", Rating::Neutral);
        let interaction = Interaction::from_quiz_answer(&answer, Timestamp::now())
            .with_dwell_time(4.5)
            .unwrap();
        assert_eq!(interaction.dwell_time, Some(4.5));
    }

    #[test]
    fn with_dwell_time_rejects_negative_seconds() {
        let answer = QuizAnswer::new("art-1", Rating::Neutral);
        let result =
            Interaction::from_quiz_answer(&answer, Timestamp::now()).with_dwell_time(-1.0);
        assert!(result.is_err());
    }

    #[test]
    fn with_metadata_attaches_json() {
        let answer = QuizAnswer::new("art-1", Rating::Dislike);
        let interaction = Interaction::from_quiz_answer(&answer, Timestamp::now())
            .with_metadata(json!({"room": "impressionism"}));
        assert_eq!(
            interaction.metadata,
            Some(json!({"room": "impressionism"}))
        );
    }
}
