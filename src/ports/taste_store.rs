//! TasteStore port for user, profile, and interaction persistence.

use async_trait::async_trait;

use crate::domain::{
    foundation::DomainError,
    taste::{Interaction, TasteProfile},
    user::User,
};

/// Durable storage for the three taste entities. The store is the sole
/// source of truth; no state is cached across requests.
#[async_trait]
pub trait TasteStore: Send + Sync {
    /// Looks up a user by external id, creating one if absent.
    ///
    /// Idempotent per external id: a duplicate-insert race is resolved by
    /// re-reading the row that won the unique constraint.
    async fn find_or_create_user(
        &self,
        external_id: &str,
        display_name: Option<&str>,
    ) -> Result<User, DomainError>;

    /// Looks up a user by external id.
    async fn find_user_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Appends one immutable record per interaction, as a single atomic
    /// batch. On failure no partial rows are visible.
    async fn append_interactions(
        &self,
        user_id: i64,
        interactions: &[Interaction],
    ) -> Result<(), DomainError>;

    /// Fetches the profile owned by a user, if any.
    async fn get_profile(&self, user_id: i64) -> Result<Option<TasteProfile>, DomainError>;

    /// Creates the profile on first use, otherwise updates it in place.
    async fn upsert_profile(
        &self,
        user_id: i64,
        profile: &TasteProfile,
    ) -> Result<(), DomainError>;
}
