//! Counting stub for the EmbeddingModel port.

use crate::domain::taste::{QuizAnswer, TasteVector, TASTE_VECTOR_DIM};
use crate::ports::EmbeddingModel;

/// Placeholder for a real CLIP/embedding-based model.
///
/// Builds a tiny fake vector where the first three components are the like
/// count, dislike count, and total answer count, padded with zeros to
/// [`TASTE_VECTOR_DIM`] and L2-normalized. A production model would return a
/// full per-item embedding instead.
#[derive(Debug, Default, Clone)]
pub struct StubEmbeddingModel;

impl StubEmbeddingModel {
    pub fn new() -> Self {
        Self
    }
}

impl EmbeddingModel for StubEmbeddingModel {
    fn feature_vector(&self, answers: &[QuizAnswer]) -> Option<TasteVector> {
        if answers.is_empty() {
            return None;
        }

        let likes = answers.iter().filter(|a| a.rating.is_like()).count() as f64;
        let dislikes = answers.iter().filter(|a| a.rating.is_dislike()).count() as f64;
        let total = answers.len() as f64;

        let mut components = [0.0; TASTE_VECTOR_DIM];
        components[0] = likes;
        components[1] = dislikes;
        components[2] = total;

        Some(TasteVector::new(components).normalized())
    }
}
