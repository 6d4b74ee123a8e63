//! Order workflow service
//!
//! Placement of physical card orders, admin status transitions, and the
//! delivered-only card-created gate.

use card_core::traits::ListQuery;
use card_core::{DomainError, Order, OrderStatus, Slug, User};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{CreateOrderRequest, OrderResponse};

use super::access::{AccessGate, Resource};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Order service
pub struct OrderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OrderService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Place a new order for the actor
    #[instrument(skip(self, actor, request), fields(user_id = %actor.id))]
    pub async fn create_order(
        &self,
        actor: &User,
        request: CreateOrderRequest,
    ) -> ServiceResult<OrderResponse> {
        let shipping_address = required_text(request.shipping_address, "shipping address")?;
        let phone_number = required_text(request.phone_number, "phone number")?;
        let total_price = request
            .total_price
            .ok_or_else(|| ServiceError::validation("total price is required"))?;

        // Blank means no custom URL; anything else must be an exact slug
        let custom_url_name = match request.custom_url_name.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(Slug::parse(raw)?),
            _ => None,
        };

        if let Some(card_id) = request.card_id {
            let card = self
                .ctx
                .card_repo()
                .find_by_id(card_id)
                .await?
                .ok_or_else(|| DomainError::CardNotFound(card_id.to_string()))?;
            AccessGate::require_owner(actor, card.user_id, Resource::Card)?;
        }

        let order = Order::new(
            Uuid::new_v4(),
            actor.id,
            request.quantity.unwrap_or(1),
            shipping_address,
            phone_number,
            total_price,
        )
        .with_plan_type(request.plan_type.unwrap_or_default())
        .with_custom_url_name(custom_url_name)
        .with_shipping_cost(request.shipping_cost.unwrap_or(Decimal::ZERO))
        .with_card(request.card_id);

        order.validate()?;
        self.ctx.order_repo().create(&order).await?;

        info!(
            order_id = %order.id,
            quantity = order.quantity,
            plan_type = %order.plan_type,
            "Order created"
        );

        Ok(OrderResponse::from(&order))
    }

    /// Move an order to a new status (admin only)
    ///
    /// Setting the current status again is a no-op.
    #[instrument(skip(self, actor), fields(admin_id = %actor.id))]
    pub async fn set_order_status(
        &self,
        actor: &User,
        order_id: Uuid,
        status: &str,
    ) -> ServiceResult<OrderResponse> {
        AccessGate::require_admin(actor)?;

        let mut order = self.find_order(order_id).await?;
        let status: OrderStatus = status.parse()?;

        if order.status == status {
            debug!(order_id = %order.id, %status, "Status unchanged");
            return Ok(OrderResponse::from(&order));
        }

        self.ctx.order_repo().update_status(order.id, status).await?;
        let previous = order.status;
        order.set_status(status);

        if previous.is_terminal() {
            warn!(order_id = %order.id, from = %previous, to = %status, "Order moved out of a terminal status");
        } else {
            info!(order_id = %order.id, from = %previous, to = %status, "Order status changed");
        }

        Ok(OrderResponse::from(&order))
    }

    /// Bind a card to a delivered order and set its `card_created` latch
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn mark_card_created(
        &self,
        actor: &User,
        order_id: Uuid,
        card_id: Uuid,
    ) -> ServiceResult<OrderResponse> {
        let mut order = self.require_order_owner(actor, order_id).await?;

        let card = self
            .ctx
            .card_repo()
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| DomainError::CardNotFound(card_id.to_string()))?;
        AccessGate::require_owner(actor, card.user_id, Resource::Card)?;

        if !order.status.allows_card_creation() {
            warn!(order_id = %order.id, status = %order.status, "Card creation on undelivered order");
            return Err(DomainError::OrderNotDelivered.into());
        }

        // Status may have moved since the read above
        if !self
            .ctx
            .order_repo()
            .mark_card_created(order.id, card.id)
            .await?
        {
            warn!(order_id = %order.id, "Order left delivered state before card was bound");
            return Err(DomainError::OrderNotDelivered.into());
        }
        order.mark_card_created(card.id)?;

        info!(order_id = %order.id, card_id = %card.id, "Card created for order");

        Ok(OrderResponse::from(&order))
    }

    /// Get an order visible to the actor (owner or admin)
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn get_order(&self, actor: &User, order_id: Uuid) -> ServiceResult<OrderResponse> {
        let order = self.find_order(order_id).await?;
        AccessGate::require_owner_or_admin(actor, Some(order.user_id), Resource::Order)?;
        Ok(OrderResponse::from(&order))
    }

    /// List the actor's own orders, newest first
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn list_my_orders(&self, actor: &User) -> ServiceResult<Vec<OrderResponse>> {
        let orders = self.ctx.order_repo().find_by_user(actor.id).await?;
        Ok(orders.iter().map(OrderResponse::from).collect())
    }

    /// List every order (admin only)
    #[instrument(skip(self, actor), fields(admin_id = %actor.id))]
    pub async fn list_all_orders(
        &self,
        actor: &User,
        query: ListQuery,
    ) -> ServiceResult<Vec<OrderResponse>> {
        AccessGate::require_admin(actor)?;
        let orders = self.ctx.order_repo().list(query).await?;
        Ok(orders.iter().map(OrderResponse::from).collect())
    }

    /// Record that design files were uploaded for an order
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn record_uploaded_files(
        &self,
        actor: &User,
        order_id: Uuid,
        has_logo: bool,
        has_design: bool,
    ) -> ServiceResult<OrderResponse> {
        let mut order = self.require_order_owner(actor, order_id).await?;

        self.ctx
            .order_repo()
            .set_uploaded_files(order.id, has_logo, has_design)
            .await?;
        order.record_files(has_logo, has_design);

        info!(order_id = %order.id, has_logo, has_design, "Order files recorded");

        Ok(OrderResponse::from(&order))
    }

    /// Load an order and require the actor to own it
    pub async fn require_order_owner(&self, actor: &User, order_id: Uuid) -> ServiceResult<Order> {
        let order = self.find_order(order_id).await?;
        AccessGate::require_owner(actor, Some(order.user_id), Resource::Order)?;
        Ok(order)
    }

    async fn find_order(&self, order_id: Uuid) -> ServiceResult<Order> {
        self.ctx
            .order_repo()
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::OrderNotFound(order_id).into())
    }
}

fn required_text(value: Option<String>, field: &str) -> ServiceResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServiceError::validation(format!("{field} is required"))),
    }
}
