//! PostgreSQL implementation of CardRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use card_core::traits::{CardRepository, RepoResult};
use card_core::{Card, DomainError};

use crate::mappers::CardWrite;
use crate::models::CardModel;

use super::error::{card_not_found, map_db_error, map_unique_violation};

const CARD_COLUMNS: &str = "id, user_id, title, background, profile_pic, links, colors, \
                            plan_type, unique_url, created_at, updated_at";

/// PostgreSQL implementation of CardRepository
#[derive(Clone)]
pub struct PgCardRepository {
    pool: PgPool,
}

impl PgCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for PgCardRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Card>> {
        sqlx::query_as::<_, CardModel>(&format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(Card::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Card>> {
        sqlx::query_as::<_, CardModel>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE unique_url = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(Card::try_from)
        .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Card>> {
        let rows = sqlx::query_as::<_, CardModel>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Card::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cards WHERE unique_url = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, card), fields(card_id = %card.id, slug = %card.unique_url))]
    async fn create(&self, card: &Card) -> RepoResult<()> {
        let w = CardWrite::new(card);

        sqlx::query(
            r"
            INSERT INTO cards (id, user_id, title, background, profile_pic, links, colors,
                               plan_type, unique_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(w.id)
        .bind(w.user_id)
        .bind(w.title)
        .bind(w.background)
        .bind(w.profile_pic)
        .bind(w.links)
        .bind(w.colors)
        .bind(w.plan_type)
        .bind(w.unique_url)
        .bind(card.created_at)
        .bind(card.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyInUse))?;

        Ok(())
    }

    #[instrument(skip(self, card), fields(card_id = %card.id))]
    async fn update(&self, card: &Card) -> RepoResult<()> {
        let w = CardWrite::new(card);

        // unique_url is immutable
        let result = sqlx::query(
            r"
            UPDATE cards
            SET title = $2, background = $3, profile_pic = $4, links = $5, colors = $6,
                plan_type = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(w.id)
        .bind(w.title)
        .bind(w.background)
        .bind(w.profile_pic)
        .bind(w.links)
        .bind(w.colors)
        .bind(w.plan_type)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(card_not_found(card.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(card_not_found(id));
        }

        Ok(())
    }
}
