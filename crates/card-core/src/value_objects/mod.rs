//! Value objects - immutable types that represent domain concepts

mod order_status;
mod plan;
mod slug;

pub use order_status::OrderStatus;
pub use plan::{PaymentMethod, PlanType};
pub use slug::Slug;
