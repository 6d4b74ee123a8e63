//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use card_core::{Card, Order, User};

use super::responses::{CardResponse, OrderResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Card Mappers
// ============================================================================

impl From<&Card> for CardResponse {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            user_id: card.user_id,
            title: card.title.clone(),
            background: card.background.clone(),
            profile_pic: card.profile_pic.clone(),
            links: card.links.clone(),
            colors: card.colors.clone(),
            plan_type: card.plan_type,
            unique_url: card.unique_url.to_string(),
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self::from(&card)
    }
}

// ============================================================================
// Order Mappers
// ============================================================================

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            card_id: order.card_id,
            quantity: order.quantity,
            shipping_address: order.shipping_address.clone(),
            phone_number: order.phone_number.clone(),
            total_price: order.total_price,
            shipping_cost: order.shipping_cost,
            payment_method: order.payment_method,
            status: order.status,
            plan_type: order.plan_type,
            card_created: order.card_created,
            custom_url_name: order.custom_url_name.as_ref().map(ToString::to_string),
            has_logo_file: order.has_logo_file,
            has_design_file: order.has_design_file,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self::from(&order)
    }
}
