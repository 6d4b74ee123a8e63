//! Test fixtures and data generators
//!
//! Provides factory functions for creating test data.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

// ============================================================================
// Request Fixtures
// ============================================================================

/// User registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Create a new registration request with unique email
    pub fn new(prefix: &str) -> Self {
        Self::with_email(prefix, &unique_email(prefix))
    }

    /// Create a registration request for a fixed email
    pub fn with_email(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: "SecurePass123!".to_string(),
        }
    }
}

/// User login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Order placement request for a single card
pub fn order_request(custom_url_name: Option<&str>) -> Value {
    let mut body = json!({
        "quantity": 1,
        "shipping_address": "12 Harbour Street, Casablanca",
        "phone_number": "+212600000000",
        "total_price": "25.00",
        "plan_type": "standard",
    });
    if let Some(slug) = custom_url_name {
        body["custom_url_name"] = json!(slug);
    }
    body
}

/// Card content with a single link
pub fn card_request(title: &str) -> Value {
    json!({
        "title": title,
        "links": [
            { "id": 1, "title": "Website", "url": "https://example.com" }
        ],
        "colors": { "background": "#101010", "text": "#fafafa", "button": "#ff6600" },
    })
}

// ============================================================================
// Response Fixtures
// ============================================================================

/// User response
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Authentication response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Card response
#[derive(Debug, Clone, Deserialize)]
pub struct CardResponse {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: String,
    pub plan_type: String,
    pub unique_url: String,
}

/// Order response
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub card_id: Option<Uuid>,
    pub quantity: i32,
    pub status: String,
    pub plan_type: String,
    pub card_created: bool,
    pub custom_url_name: Option<String>,
    pub has_logo_file: bool,
    pub has_design_file: bool,
}

/// Card created from a delivered order
#[derive(Debug, Clone, Deserialize)]
pub struct CardWithOrderResponse {
    pub card: CardResponse,
    pub order: OrderResponse,
}

/// Public slug availability
#[derive(Debug, Clone, Deserialize)]
pub struct SlugAvailabilityResponse {
    pub slug: String,
    pub available: bool,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Generate unique suffix for test data
pub fn unique_suffix() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

/// Generate a unique email address
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}_{}@test.com", unique_suffix())
}

/// Generate a unique custom slug
pub fn unique_slug(prefix: &str) -> String {
    format!("{prefix}-{}", unique_suffix())
}
