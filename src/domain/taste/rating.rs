//! Rating value object for quiz answers (-1 to +1 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Artwork rating: -1 (dislike), 0 (neutral), +1 (like).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Rating {
    Dislike = -1,
    #[default]
    Neutral = 0,
    Like = 1,
}

impl Rating {
    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_i8(value: i8) -> Result<Self, ValidationError> {
        match value {
            -1 => Ok(Rating::Dislike),
            0 => Ok(Rating::Neutral),
            1 => Ok(Rating::Like),
            _ => Err(ValidationError::out_of_range("rating", -1, 1, value as i32)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Returns true if this is a like.
    pub fn is_like(&self) -> bool {
        matches!(self, Rating::Like)
    }

    /// Returns true if this is a dislike.
    pub fn is_dislike(&self) -> bool {
        matches!(self, Rating::Dislike)
    }

    /// Returns true if this is neutral.
    pub fn is_neutral(&self) -> bool {
        matches!(self, Rating::Neutral)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value() > 0 { "+" } else { "" };
        write!(f, "{}{}", sign, self.value())
    }
}
