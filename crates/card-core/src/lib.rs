//! # card-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors
//! for the card/order workflow.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Card, CardColors, CardLink, Order, User};
pub use error::DomainError;
pub use traits::{CardRepository, ListQuery, OrderRepository, RepoResult, UserRepository};
pub use value_objects::{OrderStatus, PaymentMethod, PlanType, Slug};
