//! Business logic services
//!
//! Service layer implementations that handle validation, access control, and
//! orchestration of domain operations.

pub mod access;
pub mod auth;
pub mod card;
pub mod context;
pub mod error;
pub mod order;
pub mod slug;
pub mod user;

pub use access::{AccessGate, Resource};
pub use auth::AuthService;
pub use card::CardService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use order::OrderService;
pub use slug::SlugAllocator;
pub use user::UserService;
