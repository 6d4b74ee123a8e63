//! User entity - an account that owns cards and places orders

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User account
///
/// The password hash is never part of the entity; repositories expose it
/// separately for authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new regular user
    pub fn new(id: Uuid, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Grant or withhold admin privileges
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Normalize an email address for storage and lookup
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
