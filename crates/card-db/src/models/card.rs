//! Card database model

use card_core::{CardColors, CardLink};
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for cards table
///
/// `links` and `colors` live in JSONB columns.
#[derive(Debug, Clone, FromRow)]
pub struct CardModel {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: String,
    pub background: Option<String>,
    pub profile_pic: Option<String>,
    pub links: Json<Vec<CardLink>>,
    pub colors: Json<CardColors>,
    pub plan_type: String,
    pub unique_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
