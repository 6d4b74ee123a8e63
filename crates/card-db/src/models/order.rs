//! Order database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for orders table
#[derive(Debug, Clone, FromRow)]
pub struct OrderModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub card_id: Option<Uuid>,
    pub quantity: i32,
    pub shipping_address: String,
    pub phone_number: String,
    pub total_price: Decimal,
    pub payment_method: String,
    pub status: String,
    pub plan_type: String,
    pub card_created: bool,
    pub custom_url_name: Option<String>,
    pub shipping_cost: Decimal,
    pub has_logo_file: bool,
    pub has_design_file: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
