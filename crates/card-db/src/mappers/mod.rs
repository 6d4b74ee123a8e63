//! Entity to model mappers
//!
//! Conversions between domain entities (card-core) and database models.
//! - `From<Model> for Entity` / `TryFrom<Model> for Entity`: rows to domain objects
//! - `*Write` structs: entity data prepared for binding

mod card;
mod order;
mod user;

pub use card::CardWrite;
pub use order::OrderInsert;
