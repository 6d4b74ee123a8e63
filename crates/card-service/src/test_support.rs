//! In-memory repositories for service tests
//!
//! A single store implements every repository port so that foreign-key
//! behaviour (cascades, SET NULL) can be emulated across tables.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use card_common::auth::{hash_password, JwtService};
use card_common::AdminConfig;
use card_core::traits::{CardRepository, ListQuery, OrderRepository, RepoResult, UserRepository};
use card_core::{Card, DomainError, Order, OrderStatus, User};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::services::{ServiceContext, ServiceContextBuilder};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<Uuid, (User, String)>>,
    cards: Mutex<HashMap<Uuid, Card>>,
    orders: Mutex<HashMap<Uuid, Order>>,
    fail_order_lookups: AtomicBool,
}

impl MemoryStore {
    /// Make `OrderRepository::find_by_id` fail with a database error
    pub fn fail_order_lookups(&self, fail: bool) {
        self.fail_order_lookups.store(fail, Ordering::SeqCst);
    }

    pub fn card_count(&self) -> usize {
        self.cards.lock().len()
    }

    pub fn order(&self, id: Uuid) -> Option<Order> {
        self.orders.lock().get(&id).cloned()
    }

    pub fn card(&self, id: Uuid) -> Option<Card> {
        self.cards.lock().get(&id).cloned()
    }

    /// Insert a user directly, bypassing registration
    pub fn seed_user(&self, name: &str, is_admin: bool) -> User {
        let user = User::new(
            Uuid::new_v4(),
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
        )
        .with_admin(is_admin);
        self.users
            .lock()
            .insert(user.id, (user.clone(), "unused-hash".to_string()));
        user
    }

    /// Force an order's status without going through the workflow
    pub fn force_status(&self, id: Uuid, status: OrderStatus) {
        if let Some(order) = self.orders.lock().get_mut(&id) {
            order.set_status(status);
        }
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.users.lock().get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .values()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.users.lock().values().any(|(u, _)| u.email == email))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.users.lock();
        if users.values().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        users.insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        if self.users.lock().remove(&id).is_none() {
            return Err(DomainError::UserNotFound(id));
        }
        self.orders.lock().retain(|_, o| o.user_id != id);
        for card in self.cards.lock().values_mut() {
            if card.user_id == Some(id) {
                card.user_id = None;
            }
        }
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        Ok(self.users.lock().get(&id).map(|(_, h)| h.clone()))
    }

    async fn list(&self, query: ListQuery) -> RepoResult<Vec<User>> {
        let mut users: Vec<User> = self.users.lock().values().map(|(u, _)| u.clone()).collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }
}

#[async_trait]
impl CardRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Card>> {
        Ok(self.cards.lock().get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Card>> {
        Ok(self
            .cards
            .lock()
            .values()
            .find(|c| c.unique_url.as_str() == slug)
            .cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Card>> {
        Ok(self
            .cards
            .lock()
            .values()
            .filter(|c| c.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn slug_exists(&self, slug: &str) -> RepoResult<bool> {
        Ok(self
            .cards
            .lock()
            .values()
            .any(|c| c.unique_url.as_str() == slug))
    }

    async fn create(&self, card: &Card) -> RepoResult<()> {
        let mut cards = self.cards.lock();
        if cards.values().any(|c| c.unique_url == card.unique_url) {
            return Err(DomainError::SlugAlreadyInUse);
        }
        cards.insert(card.id, card.clone());
        Ok(())
    }

    async fn update(&self, card: &Card) -> RepoResult<()> {
        match self.cards.lock().get_mut(&card.id) {
            Some(stored) => {
                let slug = stored.unique_url.clone();
                *stored = card.clone();
                stored.unique_url = slug;
                Ok(())
            }
            None => Err(DomainError::CardNotFound(card.id.to_string())),
        }
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        if self.cards.lock().remove(&id).is_none() {
            return Err(DomainError::CardNotFound(id.to_string()));
        }
        for order in self.orders.lock().values_mut() {
            if order.card_id == Some(id) {
                order.card_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Order>> {
        if self.fail_order_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        Ok(self.orders.lock().get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Order>> {
        Ok(self
            .orders
            .lock()
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list(&self, query: ListQuery) -> RepoResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.orders.lock().values().cloned().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn create(&self, order: &Order) -> RepoResult<()> {
        self.orders.lock().insert(order.id, order.clone());
        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> RepoResult<()> {
        match self.orders.lock().get_mut(&id) {
            Some(order) => {
                order.set_status(status);
                Ok(())
            }
            None => Err(DomainError::OrderNotFound(id)),
        }
    }

    async fn mark_card_created(&self, id: Uuid, card_id: Uuid) -> RepoResult<bool> {
        Ok(self
            .orders
            .lock()
            .get_mut(&id)
            .is_some_and(|order| order.mark_card_created(card_id).is_ok()))
    }

    async fn set_uploaded_files(&self, id: Uuid, logo: bool, design: bool) -> RepoResult<()> {
        match self.orders.lock().get_mut(&id) {
            Some(order) => {
                order.record_files(logo, design);
                Ok(())
            }
            None => Err(DomainError::OrderNotFound(id)),
        }
    }
}

/// Build a context over a fresh store
pub fn context() -> (ServiceContext, Arc<MemoryStore>) {
    context_with_admins(&[])
}

pub fn context_with_admins(admins: &[&str]) -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let ctx = ServiceContextBuilder::new()
        .user_repo(store.clone())
        .card_repo(store.clone())
        .order_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new("service-test-secret", 900, 3600)))
        .admin_config(AdminConfig {
            emails: admins.iter().map(|e| (*e).to_string()).collect(),
        })
        .build()
        .expect("context");
    (ctx, store)
}

/// Seed a user whose stored hash matches `TEST_PASSWORD`
pub async fn seed_user_with_password(store: &MemoryStore, email: &str) -> User {
    let user = User::new(Uuid::new_v4(), "Seeded".to_string(), email.to_string());
    let hash = hash_password(TEST_PASSWORD).expect("hash");
    UserRepository::create(store, &user, &hash)
        .await
        .expect("seed user");
    user
}
