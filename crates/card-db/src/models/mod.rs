//! Database models - SQLx-compatible structs for PostgreSQL tables

mod card;
mod order;
mod user;

pub use card::CardModel;
pub use order::OrderModel;
pub use user::UserModel;
