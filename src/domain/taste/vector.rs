//! Fixed-dimension taste vector with L2 normalization and EMA blending.

use serde::{Deserialize, Serialize};

/// Dimensionality of taste vectors. The stub model fills the first three
/// components; a real embedding model would use all of them (or more).
pub const TASTE_VECTOR_DIM: usize = 8;

/// An ordered sequence of `TASTE_VECTOR_DIM` reals, serialized as a plain
/// JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TasteVector([f64; TASTE_VECTOR_DIM]);

impl TasteVector {
    pub fn new(components: [f64; TASTE_VECTOR_DIM]) -> Self {
        Self(components)
    }

    /// Returns the components in order.
    pub fn components(&self) -> &[f64; TASTE_VECTOR_DIM] {
        &self.0
    }

    /// Returns the components as an owned Vec, for wire responses.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// L2-normalized copy. An all-zero vector is returned unchanged.
    pub fn normalized(&self) -> TasteVector {
        let norm = self.norm();
        if norm == 0.0 {
            return *self;
        }
        let mut out = self.0;
        for c in &mut out {
            *c /= norm;
        }
        TasteVector(out)
    }

    /// Per-component exponential moving average toward `other`:
    /// `(1 - alpha) * self + alpha * other`.
    pub fn blended(&self, other: &TasteVector, alpha: f64) -> TasteVector {
        let mut out = [0.0; TASTE_VECTOR_DIM];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = (1.0 - alpha) * self.0[i] + alpha * other.0[i];
        }
        TasteVector(out)
    }
}
