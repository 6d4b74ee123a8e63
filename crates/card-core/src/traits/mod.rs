//! Repository traits (ports)

mod repositories;

pub use repositories::{CardRepository, ListQuery, OrderRepository, RepoResult, UserRepository};
