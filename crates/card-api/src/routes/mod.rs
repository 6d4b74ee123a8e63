//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{admin, auth, cards, health, orders, public, uploads, users};
use crate::state::AppState;

/// Slack on top of the file payloads for multipart framing and text fields
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Create the main API router (health routes are mounted separately)
///
/// `max_file_size` caps each uploaded order file.
pub fn create_router(max_file_size: usize) -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes(max_file_size))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().nest(
        "/api/v1",
        Router::new()
            .route("/health", get(health::health_check))
            .route("/health/ready", get(health::readiness_check)),
    )
}

fn api_v1_routes(max_file_size: usize) -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(card_routes())
        .merge(public_routes())
        .merge(order_routes(max_file_size))
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me", get(users::get_current_user))
}

/// Card routes (owner only)
fn card_routes() -> Router<AppState> {
    Router::new()
        .route("/cards", post(cards::create_card).get(cards::list_my_cards))
        .route(
            "/cards/:card_id",
            get(cards::get_card)
                .patch(cards::update_card)
                .delete(cards::delete_card),
        )
}

/// Unauthenticated card lookup
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/public/cards/:slug", get(public::get_public_card))
        .route("/public/slugs/:slug", get(public::check_slug))
}

/// Order routes
fn order_routes(max_file_size: usize) -> Router<AppState> {
    Router::new()
        .route("/orders", post(orders::create_order).get(orders::list_my_orders))
        .route("/orders/:order_id", get(orders::get_order))
        .route("/orders/:order_id/card-created", put(orders::mark_card_created))
        .route("/orders/:order_id/card", post(orders::create_card_for_order))
        .route(
            "/orders/:order_id/files",
            post(uploads::upload_order_files)
                .layer(DefaultBodyLimit::max(2 * max_file_size + MULTIPART_OVERHEAD)),
        )
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/:user_id", delete(admin::ban_user))
        .route("/admin/orders", get(admin::list_all_orders))
        .route("/admin/orders/:order_id/status", patch(admin::set_order_status))
}
