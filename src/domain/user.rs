//! User entity, the identity anchor for profiles and interactions.

use super::foundation::Timestamp;

/// A known user. The internal id is assigned by the store; the external id
/// comes from the auth provider on the frontend and is trusted as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub external_id: String,
    pub display_name: Option<String>,
    pub created_at: Timestamp,
}
