//! User service
//!
//! Current-user lookup and admin user management.

use card_core::traits::ListQuery;
use card_core::{DomainError, User};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::UserResponse;

use super::access::AccessGate;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the authenticated user
    pub fn get_current_user(&self, actor: &User) -> UserResponse {
        UserResponse::from(actor)
    }

    /// List users, newest first (admin only)
    #[instrument(skip(self, actor), fields(admin_id = %actor.id))]
    pub async fn list_users(
        &self,
        actor: &User,
        query: ListQuery,
    ) -> ServiceResult<Vec<UserResponse>> {
        AccessGate::require_admin(actor)?;
        let users = self.ctx.user_repo().list(query).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Ban a user (admin only)
    ///
    /// Banning deletes the account. Its orders go with it and its cards stay
    /// published without an owner.
    #[instrument(skip(self, actor), fields(admin_id = %actor.id))]
    pub async fn ban_user(&self, actor: &User, user_id: Uuid) -> ServiceResult<()> {
        AccessGate::require_admin(actor)?;

        if actor.id == user_id {
            return Err(ServiceError::validation("administrators cannot ban themselves"));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        self.ctx.user_repo().delete(user.id).await?;

        info!(user_id = %user.id, email = %user.email, "User banned");

        Ok(())
    }
}
