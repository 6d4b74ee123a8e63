//! Order handlers
//!
//! Endpoints for placing orders and turning delivered orders into cards.

use axum::{extract::State, Json};
use card_service::{
    CardService, CardWithOrderResponse, CreateCardRequest, CreateOrderRequest,
    MarkCardCreatedRequest, OrderResponse, OrderService,
};
use uuid::Uuid;

use crate::extractors::{AuthUser, PathParam, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Place an order
///
/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<Created<Json<OrderResponse>>> {
    let service = OrderService::new(state.service_context());
    let response = service.create_order(&auth.user, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's orders
///
/// GET /orders
pub async fn list_my_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<OrderResponse>>> {
    let service = OrderService::new(state.service_context());
    let response = service.list_my_orders(&auth.user).await?;
    Ok(Json(response))
}

/// Get an order (owner or admin)
///
/// GET /orders/{order_id}
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(order_id): PathParam<Uuid>,
) -> ApiResult<Json<OrderResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service.get_order(&auth.user, order_id).await?;
    Ok(Json(response))
}

/// Bind an existing card to a delivered order
///
/// PUT /orders/{order_id}/card-created
pub async fn mark_card_created(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(order_id): PathParam<Uuid>,
    ValidatedJson(request): ValidatedJson<MarkCardCreatedRequest>,
) -> ApiResult<Json<OrderResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service
        .mark_card_created(&auth.user, order_id, request.card_id)
        .await?;
    Ok(Json(response))
}

/// Create the card for a delivered order
///
/// POST /orders/{order_id}/card
pub async fn create_card_for_order(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(order_id): PathParam<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateCardRequest>,
) -> ApiResult<Created<Json<CardWithOrderResponse>>> {
    let service = CardService::new(state.service_context());
    let response = service
        .create_card_for_order(&auth.user, order_id, request)
        .await?;
    Ok(Created(Json(response)))
}
