//! User handlers

use axum::{extract::State, Json};
use card_service::{UserResponse, UserService};

use crate::extractors::AuthUser;
use crate::state::AppState;

/// Get the current user
///
/// GET /users/@me
pub async fn get_current_user(State(state): State<AppState>, auth: AuthUser) -> Json<UserResponse> {
    let service = UserService::new(state.service_context());
    Json(service.get_current_user(&auth.user))
}
