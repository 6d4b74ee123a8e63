//! Domain entities - core business objects

mod card;
mod order;
mod user;

pub use card::{Card, CardColors, CardLink};
pub use order::Order;
pub use user::User;
