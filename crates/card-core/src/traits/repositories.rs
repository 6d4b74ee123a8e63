//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Card, Order, User};
use crate::error::DomainError;
use crate::value_objects::OrderStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Offset pagination for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: i64,
    pub offset: i64,
}

impl ListQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Build a query, clamping the limit to `1..=MAX_LIMIT` and the offset to `>= 0`
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Permanently delete a user
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// List users, newest first
    async fn list(&self, query: ListQuery) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Card Repository
// ============================================================================

#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Find card by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Card>>;

    /// Find card by its public slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Card>>;

    /// List cards owned by a user, newest first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Card>>;

    /// Check if a slug is already taken
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool>;

    /// Create a new card
    ///
    /// Fails with `SlugAlreadyInUse` when another card already holds the slug.
    async fn create(&self, card: &Card) -> RepoResult<()>;

    /// Update an existing card's mutable fields
    async fn update(&self, card: &Card) -> RepoResult<()>;

    /// Delete a card
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Order Repository
// ============================================================================

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find order by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Order>>;

    /// List orders placed by a user, newest first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Order>>;

    /// List all orders, newest first
    async fn list(&self, query: ListQuery) -> RepoResult<Vec<Order>>;

    /// Create a new order
    async fn create(&self, order: &Order) -> RepoResult<()>;

    /// Set the order status
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> RepoResult<()>;

    /// Bind `card_id` and set `card_created`, only while the order is delivered
    ///
    /// Returns `false` when no delivered order with this ID exists.
    async fn mark_card_created(&self, id: Uuid, card_id: Uuid) -> RepoResult<bool>;

    /// Set uploaded-file flags (flags are OR-ed with the stored values)
    async fn set_uploaded_files(&self, id: Uuid, logo: bool, design: bool) -> RepoResult<()>;
}
