//! Card entity <-> model mapper

use card_core::{Card, CardColors, CardLink, DomainError, PlanType, Slug};
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::CardModel;

/// Stored enum text that no longer parses means the row is corrupt
pub(crate) fn corrupt_column(table: &str, column: &str, value: &str) -> DomainError {
    DomainError::DatabaseError(format!("invalid {table}.{column} value: {value}"))
}

impl TryFrom<CardModel> for Card {
    type Error = DomainError;

    fn try_from(model: CardModel) -> Result<Self, Self::Error> {
        let plan_type = model
            .plan_type
            .parse::<PlanType>()
            .map_err(|_| corrupt_column("cards", "plan_type", &model.plan_type))?;

        Ok(Card {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            background: model.background,
            profile_pic: model.profile_pic,
            links: model.links.0,
            colors: model.colors.0,
            plan_type,
            unique_url: Slug::from_stored(model.unique_url),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Card values bound by INSERT and UPDATE statements
pub struct CardWrite<'a> {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: &'a str,
    pub background: Option<&'a str>,
    pub profile_pic: Option<&'a str>,
    pub links: Json<&'a [CardLink]>,
    pub colors: Json<&'a CardColors>,
    pub plan_type: &'static str,
    pub unique_url: &'a str,
}

impl<'a> CardWrite<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self {
            id: card.id,
            user_id: card.user_id,
            title: &card.title,
            background: card.background.as_deref(),
            profile_pic: card.profile_pic.as_deref(),
            links: Json(&card.links),
            colors: Json(&card.colors),
            plan_type: card.plan_type.as_str(),
            unique_url: card.unique_url.as_str(),
        }
    }
}
