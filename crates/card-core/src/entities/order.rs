//! Order entity - a request for physical NFC cards

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::{OrderStatus, PaymentMethod, PlanType, Slug};

/// Order entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Card bound to this order once it has been created
    pub card_id: Option<Uuid>,
    pub quantity: i32,
    pub shipping_address: String,
    pub phone_number: String,
    pub total_price: Decimal,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub plan_type: PlanType,
    /// One-way latch, only ever set while the order is delivered
    pub card_created: bool,
    pub custom_url_name: Option<Slug>,
    pub shipping_cost: Decimal,
    pub has_logo_file: bool,
    pub has_design_file: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Digits after the decimal point stored for money columns
    pub const MONEY_SCALE: u32 = 3;
    /// Largest amount a money column holds (`NUMERIC(10, 3)`)
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 3);

    /// Create a new pending order
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        quantity: i32,
        shipping_address: String,
        phone_number: String,
        total_price: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            card_id: None,
            quantity,
            shipping_address,
            phone_number,
            total_price,
            payment_method: PaymentMethod::CashOnDelivery,
            status: OrderStatus::Pending,
            plan_type: PlanType::default(),
            card_created: false,
            custom_url_name: None,
            shipping_cost: Decimal::ZERO,
            has_logo_file: false,
            has_design_file: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_plan_type(mut self, plan_type: PlanType) -> Self {
        self.plan_type = plan_type;
        self
    }

    pub fn with_custom_url_name(mut self, slug: Option<Slug>) -> Self {
        self.custom_url_name = slug;
        self
    }

    pub fn with_shipping_cost(mut self, shipping_cost: Decimal) -> Self {
        self.shipping_cost = shipping_cost;
        self
    }

    pub fn with_card(mut self, card_id: Option<Uuid>) -> Self {
        self.card_id = card_id;
        self
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Move the order to `status`
    ///
    /// Any known status may follow any other. The `card_created` latch is left alone.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Bind a card to this order and set the `card_created` latch
    pub fn mark_card_created(&mut self, card_id: Uuid) -> Result<(), DomainError> {
        if !self.status.allows_card_creation() {
            return Err(DomainError::OrderNotDelivered);
        }
        self.card_created = true;
        self.card_id = Some(card_id);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Record uploaded files; flags never flip back to false
    pub fn record_files(&mut self, logo: bool, design: bool) {
        self.has_logo_file |= logo;
        self.has_design_file |= design;
        self.updated_at = Utc::now();
    }

    /// Validate the order's scalar fields
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.shipping_address.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "shipping address is required".to_string(),
            ));
        }
        if self.phone_number.trim().is_empty() {
            return Err(DomainError::ValidationError("phone number is required".to_string()));
        }
        if self.quantity < 1 {
            return Err(DomainError::ValidationError(
                "quantity must be at least 1".to_string(),
            ));
        }
        check_amount("total price", self.total_price)?;
        check_amount("shipping cost", self.shipping_cost)?;
        Ok(())
    }
}

fn check_amount(field: &str, amount: Decimal) -> Result<(), DomainError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(DomainError::ValidationError(format!("{field} cannot be negative")));
    }
    if amount > Order::MAX_AMOUNT {
        return Err(DomainError::ValidationError(format!(
            "{field} cannot exceed {}",
            Order::MAX_AMOUNT
        )));
    }
    if amount.normalize().scale() > Order::MONEY_SCALE {
        return Err(DomainError::ValidationError(format!(
            "{field} must have at most {} decimal places",
            Order::MONEY_SCALE
        )));
    }
    Ok(())
}
