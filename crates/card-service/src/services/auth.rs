//! Authentication service
//!
//! Handles user registration, login, and token refresh.

use card_common::auth::{hash_password, validate_password, verify_password, TokenPair};
use card_common::AppError;
use card_core::{DomainError, User};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// Emails on the admin bootstrap list are registered as administrators.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password(&request.password)?;

        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("name is required"));
        }

        let email = User::normalize_email(&request.email);
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let is_admin = self.ctx.admin_config().is_admin_email(&email);
        let user = User::new(Uuid::new_v4(), name.to_string(), email).with_admin(is_admin);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, is_admin, "User registered successfully");

        self.respond(&user)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = User::normalize_email(&request.email);

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!(email = %email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.respond(&user)
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// The user must still exist.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!(%user_id, "Refresh failed: user no longer exists");
                ServiceError::App(AppError::InvalidToken)
            })?;

        info!(user_id = %user.id, "Tokens refreshed");

        self.respond(&user)
    }

    fn respond(&self, user: &User) -> ServiceResult<AuthResponse> {
        let TokenPair {
            access_token,
            refresh_token,
            expires_in,
            ..
        } = self.ctx.jwt_service().generate_token_pair(user.id)?;

        Ok(AuthResponse::new(
            access_token,
            refresh_token,
            expires_in,
            UserResponse::from(user),
        ))
    }
}
