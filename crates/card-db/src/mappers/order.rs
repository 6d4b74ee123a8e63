//! Order entity <-> model mapper

use card_core::{DomainError, Order, OrderStatus, PaymentMethod, PlanType, Slug};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::card::corrupt_column;
use crate::models::OrderModel;

impl TryFrom<OrderModel> for Order {
    type Error = DomainError;

    fn try_from(model: OrderModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<OrderStatus>()
            .map_err(|_| corrupt_column("orders", "status", &model.status))?;
        let plan_type = model
            .plan_type
            .parse::<PlanType>()
            .map_err(|_| corrupt_column("orders", "plan_type", &model.plan_type))?;
        let payment_method = model
            .payment_method
            .parse::<PaymentMethod>()
            .map_err(|_| corrupt_column("orders", "payment_method", &model.payment_method))?;

        Ok(Order {
            id: model.id,
            user_id: model.user_id,
            card_id: model.card_id,
            quantity: model.quantity,
            shipping_address: model.shipping_address,
            phone_number: model.phone_number,
            total_price: model.total_price,
            payment_method,
            status,
            plan_type,
            card_created: model.card_created,
            custom_url_name: model.custom_url_name.map(Slug::from_stored),
            shipping_cost: model.shipping_cost,
            has_logo_file: model.has_logo_file,
            has_design_file: model.has_design_file,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Order values bound by the INSERT statement
pub struct OrderInsert<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub card_id: Option<Uuid>,
    pub quantity: i32,
    pub shipping_address: &'a str,
    pub phone_number: &'a str,
    pub total_price: Decimal,
    pub payment_method: &'static str,
    pub status: &'static str,
    pub plan_type: &'static str,
    pub card_created: bool,
    pub custom_url_name: Option<&'a str>,
    pub shipping_cost: Decimal,
    pub has_logo_file: bool,
    pub has_design_file: bool,
}

impl<'a> OrderInsert<'a> {
    pub fn new(order: &'a Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            card_id: order.card_id,
            quantity: order.quantity,
            shipping_address: &order.shipping_address,
            phone_number: &order.phone_number,
            total_price: order.total_price,
            payment_method: order.payment_method.as_str(),
            status: order.status.as_str(),
            plan_type: order.plan_type.as_str(),
            card_created: order.card_created,
            custom_url_name: order.custom_url_name.as_ref().map(Slug::as_str),
            shipping_cost: order.shipping_cost,
            has_logo_file: order.has_logo_file,
            has_design_file: order.has_design_file,
        }
    }
}
