//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::{multipart, StatusCode};
use serde_json::json;
use uuid::Uuid;

/// Register a fresh user and return its tokens
async fn register(server: &TestServer, prefix: &str) -> AuthResponse {
    let request = RegisterRequest::new(prefix);
    let response = server.post("/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Start a server with one admin account and return (server, admin auth)
async fn server_with_admin() -> (TestServer, AuthResponse) {
    let admin_email = unique_email("admin");
    let server = TestServer::start_with_admins(vec![admin_email.clone()])
        .await
        .expect("Failed to start server");

    let request = RegisterRequest::with_email("admin", &admin_email);
    let response = server.post("/auth/register", &request).await.unwrap();
    let admin: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(admin.user.is_admin);

    (server, admin)
}

async fn place_order(server: &TestServer, token: &str, slug: Option<&str>) -> OrderResponse {
    let response = server
        .post_auth("/orders", token, &order_request(slug))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn set_status(server: &TestServer, admin_token: &str, order_id: Uuid, status: &str) -> OrderResponse {
    let response = server
        .patch_auth(
            &format!("/admin/orders/{order_id}/status"),
            admin_token,
            &json!({ "status": status }),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::new("alice");

    let response = server.post("/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.user.email, request.email);
    assert!(!auth.user.is_admin);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::new("dup");

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same address with different casing
    let again = RegisterRequest::with_email("dup", &request.email.to_uppercase());
    let response = server.post("/auth/register", &again).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::new("weak");
    request.password = "short".to_string();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_and_refresh() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::new("bob");
    let response = server.post("/auth/register", &request).await.unwrap();
    let registered: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest::new(&request.email, &request.password);
    let response = server.post("/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.id, registered.user.id);

    let response = server
        .post("/auth/refresh", &json!({ "refresh_token": auth.refresh_token }))
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, registered.user.id);

    // Access tokens are not accepted as refresh tokens
    let response = server
        .post("/auth/refresh", &json!({ "refresh_token": auth.access_token }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::new("carol");
    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest::new(&request.email, "WrongPass123!");
    let response = server.post("/auth/login", &login).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, "me").await;

    let response = server.get_auth("/users/@me", &auth.access_token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.email, auth.user.email);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/orders").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Card Tests
// ============================================================================

#[tokio::test]
async fn test_card_crud_and_public_lookup() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, "cards").await;
    let token = &auth.access_token;

    let response = server.post_auth("/cards", token, &card_request("My Card")).await.unwrap();
    let card: CardResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(card.title, "My Card");
    assert_eq!(card.user_id, Some(auth.user.id));
    assert!(Uuid::parse_str(&card.unique_url).is_ok());

    let response = server.get(&format!("/public/cards/{}", card.unique_url)).await.unwrap();
    let public: CardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public.id, card.id);

    let response = server
        .patch_auth(&format!("/cards/{}", card.id), token, &json!({ "title": "Renamed" }))
        .await
        .unwrap();
    let updated: CardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.unique_url, card.unique_url);

    let response = server.get_auth("/cards", token).await.unwrap();
    let cards: Vec<CardResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cards.len(), 1);

    let response = server.delete_auth(&format!("/cards/{}", card.id), token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/public/cards/{}", card.unique_url)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_card_requires_title_and_links() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, "nolinks").await;

    let response = server
        .post_auth("/cards", &auth.access_token, &json!({ "title": "No links" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth("/cards", &auth.access_token, &card_request("   "))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_non_owner_cannot_modify_card() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register(&server, "owner").await;
    let stranger = register(&server, "stranger").await;

    let response = server
        .post_auth("/cards", &owner.access_token, &card_request("Mine"))
        .await
        .unwrap();
    let card: CardResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/cards/{}", card.id),
            &stranger.access_token,
            &json!({ "title": "Stolen" }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_CARD_OWNER");

    let response = server
        .delete_auth(&format!("/cards/{}", card.id), &stranger.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Order Workflow Tests
// ============================================================================

#[tokio::test]
async fn test_order_to_card_with_custom_slug() {
    if !check_test_env().await {
        return;
    }

    let (server, admin) = server_with_admin().await;
    let user = register(&server, "buyer").await;
    let slug = unique_slug("john");

    let order = place_order(&server, &user.access_token, Some(&slug)).await;
    assert_eq!(order.status, "pending");
    assert_eq!(order.quantity, 1);
    assert!(!order.card_created);
    assert_eq!(order.custom_url_name.as_deref(), Some(slug.as_str()));

    let response = server
        .get(&format!("/public/slugs/{slug}"))
        .await
        .unwrap();
    let availability: SlugAvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(availability.available);

    // Not delivered yet
    let response = server
        .post_auth(
            &format!("/orders/{}/card", order.id),
            &user.access_token,
            &card_request("Too early"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "ORDER_NOT_DELIVERED");

    set_status(&server, &admin.access_token, order.id, "shipped").await;
    let delivered = set_status(&server, &admin.access_token, order.id, "delivered").await;
    assert_eq!(delivered.status, "delivered");

    let response = server
        .post_auth(
            &format!("/orders/{}/card", order.id),
            &user.access_token,
            &card_request("John Doe"),
        )
        .await
        .unwrap();
    let created: CardWithOrderResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.card.unique_url, slug);
    assert_eq!(created.card.plan_type, "standard");
    assert!(created.order.card_created);
    assert_eq!(created.order.card_id, Some(created.card.id));

    let response = server.get(&format!("/public/cards/{slug}")).await.unwrap();
    let public: CardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public.id, created.card.id);

    let response = server.get(&format!("/public/slugs/{slug}")).await.unwrap();
    let availability: SlugAvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!availability.available);
}

#[tokio::test]
async fn test_custom_slug_conflict() {
    if !check_test_env().await {
        return;
    }

    let (server, admin) = server_with_admin().await;
    let first = register(&server, "first").await;
    let second = register(&server, "second").await;
    let slug = unique_slug("taken");

    for auth in [&first, &second] {
        let order = place_order(&server, &auth.access_token, Some(&slug)).await;
        set_status(&server, &admin.access_token, order.id, "delivered").await;
    }

    let response = server.get_auth("/orders", &first.access_token).await.unwrap();
    let first_orders: Vec<OrderResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server
        .post_auth(
            &format!("/orders/{}/card", first_orders[0].id),
            &first.access_token,
            &card_request("First"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/orders", &second.access_token).await.unwrap();
    let second_orders: Vec<OrderResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server
        .post_auth(
            &format!("/orders/{}/card", second_orders[0].id),
            &second.access_token,
            &card_request("Second"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "SLUG_ALREADY_IN_USE");

    // The losing order stays unbound
    let response = server
        .get_auth(&format!("/orders/{}", second_orders[0].id), &second.access_token)
        .await
        .unwrap();
    let order: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!order.card_created);
    assert_eq!(order.card_id, None);
}

#[tokio::test]
async fn test_invalid_custom_slug_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, "badslug").await;

    let response = server
        .post_auth("/orders", &auth.access_token, &order_request(Some("john doe!")))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_SLUG");
}

#[tokio::test]
async fn test_unknown_order_status_rejected() {
    if !check_test_env().await {
        return;
    }

    let (server, admin) = server_with_admin().await;
    let user = register(&server, "archiver").await;
    let order = place_order(&server, &user.access_token, None).await;

    let response = server
        .patch_auth(
            &format!("/admin/orders/{}/status", order.id),
            &admin.access_token,
            &json!({ "status": "archived" }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_ORDER_STATUS");

    let response = server
        .get_auth(&format!("/orders/{}", order.id), &user.access_token)
        .await
        .unwrap();
    let unchanged: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged.status, "pending");
}

#[tokio::test]
async fn test_malformed_status_and_binding_bodies() {
    if !check_test_env().await {
        return;
    }

    let (server, admin) = server_with_admin().await;
    let user = register(&server, "malformed").await;
    let order = place_order(&server, &user.access_token, None).await;

    let response = server
        .patch_auth(
            &format!("/admin/orders/{}/status", order.id),
            &admin.access_token,
            &json!({}),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");

    let response = server
        .put_auth(
            &format!("/orders/{}/card-created", order.id),
            &user.access_token,
            &json!({ "card_id": "not-a-uuid" }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");
}

#[tokio::test]
async fn test_non_admin_cannot_set_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "sneaky").await;
    let order = place_order(&server, &user.access_token, None).await;

    let response = server
        .patch_auth(
            &format!("/admin/orders/{}/status", order.id),
            &user.access_token,
            &json!({ "status": "delivered" }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "ADMIN_REQUIRED");
}

#[tokio::test]
async fn test_non_owner_cannot_read_order() {
    if !check_test_env().await {
        return;
    }

    let (server, admin) = server_with_admin().await;
    let owner = register(&server, "orderer").await;
    let stranger = register(&server, "peeker").await;
    let order = place_order(&server, &owner.access_token, None).await;

    let response = server
        .get_auth(&format!("/orders/{}", order.id), &stranger.access_token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_ORDER_OWNER");

    // Admins can read any order
    let response = server
        .get_auth(&format!("/orders/{}", order.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_mark_card_created_with_existing_card() {
    if !check_test_env().await {
        return;
    }

    let (server, admin) = server_with_admin().await;
    let user = register(&server, "binder").await;
    let token = &user.access_token;

    let response = server.post_auth("/cards", token, &card_request("Existing")).await.unwrap();
    let card: CardResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let order = place_order(&server, token, None).await;

    let response = server
        .put_auth(
            &format!("/orders/{}/card-created", order.id),
            token,
            &json!({ "card_id": card.id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    set_status(&server, &admin.access_token, order.id, "delivered").await;

    let response = server
        .put_auth(
            &format!("/orders/{}/card-created", order.id),
            token,
            &json!({ "card_id": card.id }),
        )
        .await
        .unwrap();
    let bound: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(bound.card_created);
    assert_eq!(bound.card_id, Some(card.id));
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_order_files() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "uploader").await;
    let order = place_order(&server, &user.access_token, None).await;

    let form = multipart::Form::new()
        .part(
            "logo",
            multipart::Part::bytes(b"\x89PNG fake logo".to_vec()).file_name("logo.PNG"),
        )
        .part(
            "design",
            multipart::Part::bytes(b"%PDF fake design".to_vec()).file_name("design.pdf"),
        );

    let response = server
        .post_multipart_auth(&format!("/orders/{}/files", order.id), &user.access_token, form)
        .await
        .unwrap();
    let updated: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.has_logo_file);
    assert!(updated.has_design_file);

    let order_dir = server.upload_dir.join("orders").join(order.id.to_string());
    assert!(order_dir.join("logo.png").exists());
    assert!(order_dir.join("design.pdf").exists());
}

#[tokio::test]
async fn test_upload_requires_order_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register(&server, "fileowner").await;
    let stranger = register(&server, "fileintruder").await;
    let order = place_order(&server, &owner.access_token, None).await;

    let form = multipart::Form::new().part(
        "logo",
        multipart::Part::bytes(b"logo".to_vec()).file_name("logo.png"),
    );
    let response = server
        .post_multipart_auth(&format!("/orders/{}/files", order.id), &stranger.access_token, form)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let order_dir = server.upload_dir.join("orders").join(order.id.to_string());
    assert!(!order_dir.exists());
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_lists_and_bans_users() {
    if !check_test_env().await {
        return;
    }

    let (server, admin) = server_with_admin().await;
    let user = register(&server, "banned").await;
    let response = server.post_auth("/cards", &user.access_token, &card_request("Orphan")).await.unwrap();
    let card: CardResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/admin/users?limit=100", &admin.access_token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.id == user.user.id));

    let response = server
        .delete_auth(&format!("/admin/users/{}", user.user.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The banned account's token no longer resolves to a user
    let response = server.get_auth("/users/@me", &user.access_token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Its card stays published without an owner
    let response = server.get(&format!("/public/cards/{}", card.unique_url)).await.unwrap();
    let public: CardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public.user_id, None);

    let response = server
        .delete_auth(&format!("/admin/users/{}", admin.user.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_admin_lists_all_orders() {
    if !check_test_env().await {
        return;
    }

    let (server, admin) = server_with_admin().await;
    let user = register(&server, "lister").await;
    let order = place_order(&server, &user.access_token, None).await;

    let response = server.get_auth("/admin/orders?limit=100", &admin.access_token).await.unwrap();
    let orders: Vec<OrderResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(orders.iter().any(|o| o.id == order.id && o.user_id == user.user.id));

    let response = server.get_auth("/admin/orders", &user.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
