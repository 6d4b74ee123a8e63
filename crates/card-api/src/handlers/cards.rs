//! Card handlers
//!
//! Endpoints for managing the caller's own cards.

use axum::{extract::State, Json};
use card_service::{CardResponse, CardService, CreateCardRequest, UpdateCardRequest};
use uuid::Uuid;

use crate::extractors::{AuthUser, PathParam, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a card
///
/// POST /cards
pub async fn create_card(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCardRequest>,
) -> ApiResult<Created<Json<CardResponse>>> {
    let service = CardService::new(state.service_context());
    let response = service.create_card(&auth.user, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's cards
///
/// GET /cards
pub async fn list_my_cards(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CardResponse>>> {
    let service = CardService::new(state.service_context());
    let response = service.list_my_cards(&auth.user).await?;
    Ok(Json(response))
}

/// GET /cards/{card_id}
pub async fn get_card(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(card_id): PathParam<Uuid>,
) -> ApiResult<Json<CardResponse>> {
    let service = CardService::new(state.service_context());
    let response = service.get_card(&auth.user, card_id).await?;
    Ok(Json(response))
}

/// Update a card
///
/// PATCH /cards/{card_id}
pub async fn update_card(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(card_id): PathParam<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateCardRequest>,
) -> ApiResult<Json<CardResponse>> {
    let service = CardService::new(state.service_context());
    let response = service.update_card(&auth.user, card_id, request).await?;
    Ok(Json(response))
}

/// Delete a card
///
/// DELETE /cards/{card_id}
pub async fn delete_card(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(card_id): PathParam<Uuid>,
) -> ApiResult<NoContent> {
    let service = CardService::new(state.service_context());
    service.delete_card(&auth.user, card_id).await?;
    Ok(NoContent)
}
