//! Slug - the public path segment a card is published under
//!
//! Custom slugs are chosen by users (usually through an order's `custom_url_name`)
//! and must match `^[A-Za-z0-9_-]{3,30}$`. Generated slugs are random UUIDs.

use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

use crate::error::DomainError;

/// Unique public identifier of a card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Minimum length of a custom slug
    pub const MIN_LEN: usize = 3;
    /// Maximum length of a custom slug
    pub const MAX_LEN: usize = 30;

    /// Parse a user-supplied custom slug
    ///
    /// The whole input must match the slug pattern; whitespace is not stripped.
    pub fn parse(candidate: &str) -> Result<Self, DomainError> {
        if candidate.is_empty() {
            return Err(DomainError::InvalidSlug("custom URL cannot be empty".to_string()));
        }

        if !Self::is_valid_custom(candidate) {
            return Err(DomainError::InvalidSlug(format!(
                "custom URL must be {}-{} characters of letters, digits, '-' or '_'",
                Self::MIN_LEN,
                Self::MAX_LEN
            )));
        }

        Ok(Self(candidate.to_string()))
    }

    /// Generate a fresh random slug
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Rebuild a slug read back from storage without re-validating it
    ///
    /// Generated slugs are longer than the custom limit, so stored values
    /// are trusted as-is.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Check whether a string is acceptable as a custom slug
    pub fn is_valid_custom(value: &str) -> bool {
        (Self::MIN_LEN..=Self::MAX_LEN).contains(&value.len())
            && value
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    }

    /// Borrow the slug as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the slug and return the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slug::parse(s)
    }
}

impl Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
