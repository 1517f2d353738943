//! EmbeddingModel port: turns quiz answers into a taste vector.

use crate::domain::taste::{QuizAnswer, TasteVector};

/// Capability interface for feature-vector computation, so the counting stub
/// can be swapped for a real embedding model without touching merge logic or
/// the request boundary.
pub trait EmbeddingModel: Send + Sync {
    /// Computes an L2-normalized feature vector from a batch of answers.
    /// Returns `None` for an empty batch.
    fn feature_vector(&self, answers: &[QuizAnswer]) -> Option<TasteVector>;
}
