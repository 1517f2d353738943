//! GetProfile - Query handler for fetching a user's taste profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::TasteStore;

use super::TasteProfileView;

/// Query for a taste profile by external user id.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_external_id: String,
}

/// Handler for profile lookups.
pub struct GetProfileHandler {
    store: Arc<dyn TasteStore>,
}

impl GetProfileHandler {
    pub fn new(store: Arc<dyn TasteStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<TasteProfileView, DomainError> {
        let user = self
            .store
            .find_user_by_external_id(&query.user_external_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::UserNotFound,
                    format!("User not found: {}", query.user_external_id),
                )
            })?;

        // A user who exists but has not taken the quiz yet gets an empty
        // view, not an error.
        let view = match self.store.get_profile(user.id).await? {
            Some(profile) => TasteProfileView {
                user_external_id: user.external_id,
                baseline_vector: profile.baseline_vector,
                refined_vector: profile.refined_vector,
                engagement_score: profile.engagement_score,
            },
            None => TasteProfileView {
                user_external_id: user.external_id,
                baseline_vector: None,
                refined_vector: None,
                engagement_score: 0.0,
            },
        };

        Ok(view)
    }
}
