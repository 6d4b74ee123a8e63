//! Card entity - a published digital business card

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::value_objects::{PlanType, Slug};

/// A single link shown on a card
///
/// Clients historically send the link `id` either as a string or as a number
/// (a timestamp), so both are accepted and stored as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLink {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Colour triple applied to a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardColors {
    pub background: String,
    pub text: String,
    pub button: String,
}

impl Default for CardColors {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#000000".to_string(),
            button: "#007bff".to_string(),
        }
    }
}

/// Card entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: Uuid,
    /// Owner; `None` once the owning account has been removed
    pub user_id: Option<Uuid>,
    pub title: String,
    pub background: Option<String>,
    pub profile_pic: Option<String>,
    pub links: Vec<CardLink>,
    pub colors: CardColors,
    pub plan_type: PlanType,
    pub unique_url: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Create a new card owned by `user_id`
    pub fn new(id: Uuid, user_id: Uuid, title: String, unique_url: Slug) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: Some(user_id),
            title,
            background: None,
            profile_pic: None,
            links: Vec::new(),
            colors: CardColors::default(),
            plan_type: PlanType::default(),
            unique_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_links(mut self, links: Vec<CardLink>) -> Self {
        self.links = links;
        self
    }

    pub fn with_colors(mut self, colors: CardColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set the background image; an empty string means no background
    pub fn with_background(mut self, background: Option<String>) -> Self {
        self.background = background.filter(|b| !b.trim().is_empty());
        self
    }

    pub fn with_profile_pic(mut self, profile_pic: Option<String>) -> Self {
        self.profile_pic = profile_pic;
        self
    }

    pub fn with_plan_type(mut self, plan_type: PlanType) -> Self {
        self.plan_type = plan_type;
        self
    }

    /// Check whether `user_id` owns this card
    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == Some(user_id)
    }

    /// Bump the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
