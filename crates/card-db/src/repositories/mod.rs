//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in card-core.

mod card;
mod error;
mod order;
mod user;

pub use card::PgCardRepository;
pub use order::PgOrderRepository;
pub use user::PgUserRepository;
