//! Profile update engine: pure merge logic for taste profiles.
//!
//! Operates on values and returns values; persistence is the caller's job.

use crate::domain::foundation::Timestamp;

use super::{QuizAnswer, TasteProfile, TasteVector};

/// EMA learning rate for refined-vector updates.
pub const LEARNING_RATE: f64 = 0.1;

const LIKE_ENGAGEMENT: f64 = 1.0;
// A dislike is still an expressed opinion, so it earns a small amount.
const DISLIKE_ENGAGEMENT: f64 = 0.2;

/// Engagement earned by one batch of answers. 0.0 for an empty batch.
pub fn engagement_delta(answers: &[QuizAnswer]) -> f64 {
    answers
        .iter()
        .map(|a| {
            if a.rating.is_like() {
                LIKE_ENGAGEMENT
            } else if a.rating.is_dislike() {
                DISLIKE_ENGAGEMENT
            } else {
                0.0
            }
        })
        .sum()
}

/// Merges a freshly computed vector and engagement delta into a profile.
///
/// - No existing profile: baseline = refined = `new_vector`.
/// - Existing profile without a refined vector: the new vector is assigned
///   directly (cold start, no blending).
/// - Existing refined vector: EMA blend at [`LEARNING_RATE`], then
///   L2-normalize. The baseline, once set, is never recomputed.
/// - No new vector (empty answers, rejected upstream but handled here too):
///   the refined vector is left unchanged.
///
/// The engagement score accumulates in every branch and never decreases.
pub fn merge_profile(
    existing: Option<TasteProfile>,
    new_vector: Option<TasteVector>,
    delta: f64,
    now: Timestamp,
) -> TasteProfile {
    match existing {
        None => TasteProfile {
            baseline_vector: new_vector,
            refined_vector: new_vector,
            engagement_score: delta,
            updated_at: now,
        },
        Some(profile) => {
            let refined = match (profile.refined_vector, new_vector) {
                (None, Some(new)) => Some(new),
                (Some(old), Some(new)) => Some(old.blended(&new, LEARNING_RATE).normalized()),
                (current, None) => current,
            };
            TasteProfile {
                baseline_vector: profile.baseline_vector,
                refined_vector: refined,
                engagement_score: profile.engagement_score + delta,
                updated_at: now,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taste::{Rating, TASTE_VECTOR_DIM};
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn answers(ratings: &[i8]) -> Vec<QuizAnswer> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, r)| QuizAnswer::new(format!("art-{}", i), Rating::try_from_i8(*r).unwrap()))
            .collect()
    }

    #[test]
    fn engagement_delta_of_empty_input_is_zero() {
        assert_eq!(engagement_delta(&[]), 0.0);
    }

    #[test]
    fn engagement_delta_matches_worked_example() {
        // like + dislike + neutral = 1.0 + 0.2 + 0.0
        let delta = engagement_delta(&answers(&[1, -1, 0]));
        assert!((delta - 1.2).abs() < TOLERANCE);
    }

    #[test]
    fn merge_without_existing_profile_sets_baseline_and_refined() {
        let vec = TasteVector::new([1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).normalized();
        let profile = merge_profile(None, Some(vec), 1.2, Timestamp::now());

        assert_eq!(profile.baseline_vector, Some(vec));
        assert_eq!(profile.refined_vector, Some(vec));
        assert!((profile.engagement_score - 1.2).abs() < TOLERANCE);
    }

    #[test]
    fn merge_cold_start_assigns_refined_without_blending() {
        let existing = TasteProfile {
            baseline_vector: None,
            refined_vector: None,
            engagement_score: 0.5,
            updated_at: Timestamp::now(),
        };
        let new = TasteVector::new([0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).normalized();
        let merged = merge_profile(Some(existing), Some(new), 0.2, Timestamp::now());

        assert_eq!(merged.refined_vector, Some(new));
        assert!(merged.baseline_vector.is_none());
        assert!((merged.engagement_score - 0.7).abs() < TOLERANCE);
    }

    #[test]
    fn merge_blends_refined_vector_with_fixed_learning_rate() {
        let old = TasteVector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let new = TasteVector::new([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let existing = TasteProfile {
            baseline_vector: Some(old),
            refined_vector: Some(old),
            engagement_score: 1.0,
            updated_at: Timestamp::now(),
        };

        let merged = merge_profile(Some(existing), Some(new), 1.0, Timestamp::now());
        let refined = merged.refined_vector.unwrap();

        // 0.9*old + 0.1*new, renormalized.
        let expected = old.blended(&new, LEARNING_RATE).normalized();
        for (got, want) in refined.components().iter().zip(expected.components()) {
            assert!((got - want).abs() < TOLERANCE);
        }
        assert!((refined.norm() - 1.0).abs() < TOLERANCE);

        // Baseline is never recomputed.
        assert_eq!(merged.baseline_vector, Some(old));
    }

    #[test]
    fn merge_without_new_vector_leaves_refined_unchanged() {
        let old = TasteVector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let existing = TasteProfile {
            baseline_vector: Some(old),
            refined_vector: Some(old),
            engagement_score: 2.0,
            updated_at: Timestamp::now(),
        };

        let merged = merge_profile(Some(existing), None, 0.0, Timestamp::now());
        assert_eq!(merged.refined_vector, Some(old));
        assert!((merged.engagement_score - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn merge_blend_of_zero_vectors_skips_normalization() {
        let zero = TasteVector::new([0.0; TASTE_VECTOR_DIM]);
        let existing = TasteProfile {
            baseline_vector: Some(zero),
            refined_vector: Some(zero),
            engagement_score: 0.0,
            updated_at: Timestamp::now(),
        };

        let merged = merge_profile(Some(existing), Some(zero), 0.0, Timestamp::now());
        assert_eq!(merged.refined_vector, Some(zero));
    }

    #[test]
    fn engagement_score_never_decreases() {
        let mut profile = merge_profile(None, None, 0.0, Timestamp::now());
        for ratings in [&[1, 1][..], &[-1][..], &[0, 0, 0][..], &[1, -1, 0][..]] {
            let before = profile.engagement_score;
            let delta = engagement_delta(&answers(ratings));
            profile = merge_profile(Some(profile), None, delta, Timestamp::now());
            assert!(profile.engagement_score >= before);
        }
    }

    proptest! {
        #[test]
        fn engagement_delta_is_order_independent(ratings in prop::collection::vec(-1i8..=1, 0..32)) {
            let forward = engagement_delta(&answers(&ratings));

            let mut reversed = ratings.clone();
            reversed.reverse();
            let backward = engagement_delta(&answers(&reversed));

            prop_assert!((forward - backward).abs() < TOLERANCE);
        }

        #[test]
        fn engagement_delta_is_additive(
            first in prop::collection::vec(-1i8..=1, 0..16),
            second in prop::collection::vec(-1i8..=1, 0..16),
        ) {
            let mut combined = first.clone();
            combined.extend_from_slice(&second);

            let split = engagement_delta(&answers(&first)) + engagement_delta(&answers(&second));
            let whole = engagement_delta(&answers(&combined));

            prop_assert!((split - whole).abs() < TOLERANCE);
        }
    }
}
