//! # card-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `card-core`:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use card_db::{create_pool, run_migrations, PgCardRepository};
//!
//! let pool = create_pool(&config.database).await?;
//! run_migrations(&pool, &config.database.migrations_dir).await?;
//! let cards = PgCardRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_lazy_pool, create_pool, run_migrations, MigrationError, PgPool, PoolSettings};
pub use repositories::{PgCardRepository, PgOrderRepository, PgUserRepository};
