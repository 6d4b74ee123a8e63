//! Admin handlers
//!
//! User management and order workflow endpoints. Every handler here requires
//! an administrator; the check is made by the services.

use axum::{extract::State, Json};
use card_service::{OrderResponse, OrderService, SetOrderStatusRequest, UserResponse, UserService};
use uuid::Uuid;

use crate::extractors::{AuthUser, Pagination, PathParam, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List users
///
/// GET /admin/users?limit&offset
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_users(&auth.user, pagination.query()).await?;
    Ok(Json(response))
}

/// Ban (delete) a user
///
/// DELETE /admin/users/{user_id}
pub async fn ban_user(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(user_id): PathParam<Uuid>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.ban_user(&auth.user, user_id).await?;
    Ok(NoContent)
}

/// List every order
///
/// GET /admin/orders?limit&offset
pub async fn list_all_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<Vec<OrderResponse>>> {
    let service = OrderService::new(state.service_context());
    let response = service.list_all_orders(&auth.user, pagination.query()).await?;
    Ok(Json(response))
}

/// Move an order to a new status
///
/// PATCH /admin/orders/{order_id}/status
pub async fn set_order_status(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(order_id): PathParam<Uuid>,
    ValidatedJson(request): ValidatedJson<SetOrderStatusRequest>,
) -> ApiResult<Json<OrderResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service
        .set_order_status(&auth.user, order_id, &request.status)
        .await?;
    Ok(Json(response))
}
