//! Public handlers
//!
//! Unauthenticated access to published cards.

use axum::{extract::State, Json};
use card_service::{CardResponse, CardService, SlugAvailabilityResponse};

use crate::extractors::PathParam;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a published card by slug
///
/// GET /public/cards/{slug}
pub async fn get_public_card(
    State(state): State<AppState>,
    PathParam(slug): PathParam<String>,
) -> ApiResult<Json<CardResponse>> {
    let service = CardService::new(state.service_context());
    let response = service.get_card_by_slug(&slug).await?;
    Ok(Json(response))
}

/// Check whether a custom slug can still be claimed
///
/// GET /public/slugs/{slug}
pub async fn check_slug(
    State(state): State<AppState>,
    PathParam(slug): PathParam<String>,
) -> ApiResult<Json<SlugAvailabilityResponse>> {
    let service = CardService::new(state.service_context());
    let response = service.is_slug_available(&slug).await?;
    Ok(Json(response))
}
