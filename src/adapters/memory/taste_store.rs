//! In-memory TasteStore for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{
    foundation::{DomainError, Timestamp},
    taste::{Interaction, TasteProfile},
    user::User,
};
use crate::ports::TasteStore;

#[derive(Default)]
struct Inner {
    next_user_id: i64,
    users: Vec<User>,
    profiles: HashMap<i64, TasteProfile>,
    interactions: HashMap<i64, Vec<Interaction>>,
}

/// Mutex-held maps standing in for the database. Same contract as the SQLite
/// adapter, minus durability.
#[derive(Default)]
pub struct InMemoryTasteStore {
    inner: Mutex<Inner>,
}

impl InMemoryTasteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users. Test helper.
    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    /// Number of interactions recorded for a user. Test helper.
    pub fn interaction_count(&self, user_id: i64) -> usize {
        self.inner
            .lock()
            .unwrap()
            .interactions
            .get(&user_id)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl TasteStore for InMemoryTasteStore {
    async fn find_or_create_user(
        &self,
        external_id: &str,
        display_name: Option<&str>,
    ) -> Result<User, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.users.iter().find(|u| u.external_id == external_id) {
            return Ok(user.clone());
        }

        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            external_id: external_id.to_string(),
            display_name: display_name.map(str::to_string),
            created_at: Timestamp::now(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<User>, DomainError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .users
            .iter()
            .find(|u| u.external_id == external_id)
            .cloned())
    }

    async fn append_interactions(
        &self,
        user_id: i64,
        interactions: &[Interaction],
    ) -> Result<(), DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .interactions
            .entry(user_id)
            .or_default()
            .extend_from_slice(interactions);
        Ok(())
    }

    async fn get_profile(&self, user_id: i64) -> Result<Option<TasteProfile>, DomainError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(
        &self,
        user_id: i64,
        profile: &TasteProfile,
    ) -> Result<(), DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner.profiles.insert(user_id, profile.clone());
        Ok(())
    }
}
