//! Service context - dependency container for services
//!
//! Holds the repositories and shared helpers needed by services.

use std::sync::Arc;

use card_common::auth::JwtService;
use card_common::AdminConfig;
use card_core::traits::{CardRepository, OrderRepository, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    card_repo: Arc<dyn CardRepository>,
    order_repo: Arc<dyn OrderRepository>,
    jwt_service: Arc<JwtService>,
    admin: Arc<AdminConfig>,
}

impl ServiceContext {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        card_repo: Arc<dyn CardRepository>,
        order_repo: Arc<dyn OrderRepository>,
        jwt_service: Arc<JwtService>,
        admin: Arc<AdminConfig>,
    ) -> Self {
        Self {
            user_repo,
            card_repo,
            order_repo,
            jwt_service,
            admin,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn card_repo(&self) -> &dyn CardRepository {
        self.card_repo.as_ref()
    }

    pub fn order_repo(&self) -> &dyn OrderRepository {
        self.order_repo.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Admin bootstrap list
    pub fn admin_config(&self) -> &AdminConfig {
        self.admin.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("admin_emails", &self.admin.emails.len())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    card_repo: Option<Arc<dyn CardRepository>>,
    order_repo: Option<Arc<dyn OrderRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    admin: Option<AdminConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn card_repo(mut self, repo: Arc<dyn CardRepository>) -> Self {
        self.card_repo = Some(repo);
        self
    }

    pub fn order_repo(mut self, repo: Arc<dyn OrderRepository>) -> Self {
        self.order_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Optional; defaults to an empty admin list
    pub fn admin_config(mut self, admin: AdminConfig) -> Self {
        self.admin = Some(admin);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.card_repo
                .ok_or_else(|| ServiceError::validation("card_repo is required"))?,
            self.order_repo
                .ok_or_else(|| ServiceError::validation("order_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            Arc::new(self.admin.unwrap_or_default()),
        ))
    }
}
