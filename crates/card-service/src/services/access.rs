//! Access control gate
//!
//! Admin and ownership checks shared by every service. The actor is always a
//! user freshly loaded from storage, so its admin flag is current.

use card_core::{DomainError, User};
use tracing::warn;
use uuid::Uuid;

use super::error::ServiceResult;

/// Kind of resource an ownership check is made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Card,
    Order,
}

impl Resource {
    fn denied(self) -> DomainError {
        match self {
            Self::Card => DomainError::NotCardOwner,
            Self::Order => DomainError::NotOrderOwner,
        }
    }
}

/// Authorization checks
pub struct AccessGate;

impl AccessGate {
    /// Require the actor to be an administrator
    pub fn require_admin(actor: &User) -> ServiceResult<()> {
        if actor.is_admin() {
            return Ok(());
        }
        warn!(user_id = %actor.id, "Admin access denied");
        Err(DomainError::AdminRequired.into())
    }

    /// Require the actor to own a resource
    ///
    /// Orphaned resources (no owner) belong to nobody. Admins get no bypass here.
    pub fn require_owner(
        actor: &User,
        owner_id: Option<Uuid>,
        resource: Resource,
    ) -> ServiceResult<()> {
        if owner_id == Some(actor.id) {
            return Ok(());
        }
        warn!(user_id = %actor.id, ?resource, "Ownership check failed");
        Err(resource.denied().into())
    }

    /// Require the actor to own a resource or be an administrator
    pub fn require_owner_or_admin(
        actor: &User,
        owner_id: Option<Uuid>,
        resource: Resource,
    ) -> ServiceResult<()> {
        if actor.is_admin() {
            return Ok(());
        }
        Self::require_owner(actor, owner_id, resource)
    }
}
