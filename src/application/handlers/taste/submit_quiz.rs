//! SubmitQuiz - Command handler for recording a quiz and updating the profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::taste::{engine, Interaction, QuizAnswer};
use crate::ports::{EmbeddingModel, TasteStore};

use super::TasteProfileView;

/// Command to submit a batch of quiz answers for a user.
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub user_external_id: String,
    pub display_name: Option<String>,
    pub answers: Vec<QuizAnswer>,
}

/// Handler for quiz submissions.
pub struct SubmitQuizHandler {
    store: Arc<dyn TasteStore>,
    model: Arc<dyn EmbeddingModel>,
}

impl SubmitQuizHandler {
    pub fn new(store: Arc<dyn TasteStore>, model: Arc<dyn EmbeddingModel>) -> Self {
        Self { store, model }
    }

    pub async fn handle(&self, cmd: SubmitQuizCommand) -> Result<TasteProfileView, DomainError> {
        // Validation happens before any store mutation.
        if cmd.user_external_id.trim().is_empty() {
            return Err(DomainError::validation(
                "user_external_id",
                "User external id must not be empty",
            ));
        }
        if cmd.answers.is_empty() {
            return Err(DomainError::validation("answers", "No answers provided"));
        }

        // 1. Resolve or create the user by external id.
        let user = self
            .store
            .find_or_create_user(&cmd.user_external_id, cmd.display_name.as_deref())
            .await?;

        // 2. Record the raw interactions.
        let now = Timestamp::now();
        let interactions: Vec<Interaction> = cmd
            .answers
            .iter()
            .map(|a| Interaction::from_quiz_answer(a, now))
            .collect();
        self.store.append_interactions(user.id, &interactions).await?;

        // 3. Merge the computed vector and engagement into the profile.
        let new_vector = self.model.feature_vector(&cmd.answers);
        let delta = engine::engagement_delta(&cmd.answers);
        let existing = self.store.get_profile(user.id).await?;
        let profile = engine::merge_profile(existing, new_vector, delta, Timestamp::now());

        self.store.upsert_profile(user.id, &profile).await?;

        tracing::debug!(
            user_external_id = %user.external_id,
            answers = cmd.answers.len(),
            engagement_score = profile.engagement_score,
            "quiz submission merged into taste profile"
        );

        Ok(TasteProfileView {
            user_external_id: user.external_id,
            baseline_vector: profile.baseline_vector,
            refined_vector: profile.refined_vector,
            engagement_score: profile.engagement_score,
        })
    }
}
