//! Authentication extractor
//!
//! Validates the bearer JWT and loads the user it names. The user is read from
//! storage on every request so that bans and admin changes apply immediately.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use card_common::AppError;
use card_core::User;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user loaded from the JWT subject
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        let user = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(%user_id, "Token subject no longer exists");
                ApiError::App(AppError::InvalidToken)
            })?;

        Ok(AuthUser::new(user))
    }
}
