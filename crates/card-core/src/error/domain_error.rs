//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid custom URL: {0}")]
    InvalidSlug(String),

    #[error("Invalid order status: {0}")]
    InvalidOrderStatus(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin privileges required")]
    AdminRequired,

    #[error("Not card owner")]
    NotCardOwner,

    #[error("Not order owner")]
    NotOrderOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Custom URL already in use")]
    SlugAlreadyInUse,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot create a card for an order that is not delivered")]
    OrderNotDelivered,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CardNotFound(_) => "UNKNOWN_CARD",
            Self::OrderNotFound(_) => "UNKNOWN_ORDER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidSlug(_) => "INVALID_SLUG",
            Self::InvalidOrderStatus(_) => "INVALID_ORDER_STATUS",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::NotCardOwner => "NOT_CARD_OWNER",
            Self::NotOrderOwner => "NOT_ORDER_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::SlugAlreadyInUse => "SLUG_ALREADY_IN_USE",

            // Business Rules
            Self::OrderNotDelivered => "ORDER_NOT_DELIVERED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::CardNotFound(_) | Self::OrderNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidSlug(_) | Self::InvalidOrderStatus(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AdminRequired | Self::NotCardOwner | Self::NotOrderOwner
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::SlugAlreadyInUse)
    }

    /// Check if the operation is not allowed in the resource's current state
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::OrderNotDelivered)
    }
}
