//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod cards;
pub mod health;
pub mod orders;
pub mod public;
pub mod uploads;
pub mod users;
