//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, database pool, file storage, and configuration.

use std::sync::Arc;

use card_common::{AppConfig, JwtService};
use card_db::PgPool;
use card_service::ServiceContext;

use crate::storage::FileStorage;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing repositories and helpers
    service_context: Arc<ServiceContext>,
    /// Pool used for readiness checks
    pool: PgPool,
    storage: Arc<FileStorage>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        service_context: ServiceContext,
        pool: PgPool,
        storage: FileStorage,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            pool,
            storage: Arc::new(storage),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Upload storage for order files
    pub fn storage(&self) -> &FileStorage {
        &self.storage
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("storage", &self.storage)
            .field("config", &"AppConfig")
            .finish()
    }
}
