//! PostgreSQL implementation of OrderRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use card_core::traits::{ListQuery, OrderRepository, RepoResult};
use card_core::{Order, OrderStatus};

use crate::mappers::OrderInsert;
use crate::models::OrderModel;

use super::error::{map_db_error, order_not_found};

const ORDER_COLUMNS: &str = "id, user_id, card_id, quantity, shipping_address, phone_number, \
                             total_price, payment_method, status, plan_type, card_created, \
                             custom_url_name, shipping_cost, has_logo_file, has_design_file, \
                             created_at, updated_at";

/// PostgreSQL implementation of OrderRepository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Order>> {
        sqlx::query_as::<_, OrderModel>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(Order::try_from)
        .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderModel>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Order::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ListQuery) -> RepoResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderModel>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC, id LIMIT $1 OFFSET $2"
        ))
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Order::try_from).collect()
    }

    #[instrument(skip(self, order), fields(order_id = %order.id, user_id = %order.user_id))]
    async fn create(&self, order: &Order) -> RepoResult<()> {
        let o = OrderInsert::new(order);

        sqlx::query(
            r"
            INSERT INTO orders (id, user_id, card_id, quantity, shipping_address, phone_number,
                                total_price, payment_method, status, plan_type, card_created,
                                custom_url_name, shipping_cost, has_logo_file, has_design_file,
                                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ",
        )
        .bind(o.id)
        .bind(o.user_id)
        .bind(o.card_id)
        .bind(o.quantity)
        .bind(o.shipping_address)
        .bind(o.phone_number)
        .bind(o.total_price)
        .bind(o.payment_method)
        .bind(o.status)
        .bind(o.plan_type)
        .bind(o.card_created)
        .bind(o.custom_url_name)
        .bind(o.shipping_cost)
        .bind(o.has_logo_file)
        .bind(o.has_design_file)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(order_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_card_created(&self, id: Uuid, card_id: Uuid) -> RepoResult<bool> {
        // Guarded on status in the same statement
        let result = sqlx::query(
            r"
            UPDATE orders
            SET card_created = TRUE, card_id = $2, updated_at = NOW()
            WHERE id = $1 AND status = 'delivered'
            ",
        )
        .bind(id)
        .bind(card_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn set_uploaded_files(&self, id: Uuid, logo: bool, design: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE orders
            SET has_logo_file = has_logo_file OR $2,
                has_design_file = has_design_file OR $3,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(logo)
        .bind(design)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(order_not_found(id));
        }

        Ok(())
    }
}
