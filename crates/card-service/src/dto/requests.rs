//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`, and those with free-form input
//! implement `Validate`. Domain rules (slug pattern, money signs, required
//! order fields) are enforced again by the services.

use card_core::{CardColors, CardLink, PlanType};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// Card Requests
// ============================================================================

/// Create card request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCardRequest {
    #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
    #[serde(default)]
    pub title: String,

    /// Required; an empty list is allowed
    #[validate(length(max = 50, message = "A card can have at most 50 links"))]
    pub links: Option<Vec<CardLink>>,

    pub colors: Option<CardColors>,

    /// Background image URL; empty string means none
    pub background: Option<String>,

    /// Profile image as data-URL or URL
    pub profile_pic: Option<String>,

    pub plan_type: Option<PlanType>,

    /// Order whose custom URL name should be used as the slug
    pub order_id: Option<Uuid>,
}

/// Update card request
///
/// Omitted fields are left untouched. `profile_pic: null` removes the image.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCardRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 50, message = "A card can have at most 50 links"))]
    pub links: Option<Vec<CardLink>>,

    pub colors: Option<CardColors>,

    /// Empty string clears the background
    pub background: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub profile_pic: Option<Option<String>>,

    pub plan_type: Option<PlanType>,
}

/// Distinguish an explicit `null` from an absent field
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Order Requests
// ============================================================================

/// Place order request
///
/// Required fields are optional here so that missing ones surface as
/// validation errors with a useful message rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateOrderRequest {
    /// Existing card to print; must belong to the caller
    pub card_id: Option<Uuid>,

    /// Defaults to 1
    #[validate(range(min = 1, max = 10000, message = "Quantity must be between 1 and 10000"))]
    pub quantity: Option<i32>,

    #[validate(length(max = 500, message = "Shipping address must be at most 500 characters"))]
    pub shipping_address: Option<String>,

    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub phone_number: Option<String>,

    pub total_price: Option<Decimal>,

    pub plan_type: Option<PlanType>,

    /// Desired public slug for the card created once the order is delivered
    #[validate(length(max = 30, message = "Custom URL must be at most 30 characters"))]
    pub custom_url_name: Option<String>,

    pub shipping_cost: Option<Decimal>,
}

/// Admin status transition request
///
/// The literal is parsed by the service so unknown statuses report
/// `INVALID_ORDER_STATUS`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetOrderStatusRequest {
    #[validate(length(min = 1, max = 32, message = "Status must be between 1 and 32 characters"))]
    pub status: String,
}

/// Bind a card to a delivered order
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MarkCardCreatedRequest {
    pub card_id: Uuid,
}
