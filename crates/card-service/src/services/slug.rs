//! Slug allocation for newly published cards

use card_core::{DomainError, Slug};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Picks the public slug of a new card
pub struct SlugAllocator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SlugAllocator<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Allocate a slug
    ///
    /// A requested slug is validated and must be free. Without one a random
    /// slug is generated; random slugs are not checked for collisions.
    #[instrument(skip(self))]
    pub async fn allocate(&self, requested: Option<&str>) -> ServiceResult<Slug> {
        let Some(raw) = requested else {
            let slug = Slug::generate();
            debug!(slug = %slug, "Generated random slug");
            return Ok(slug);
        };

        let slug = Slug::parse(raw)?;
        if self.ctx.card_repo().slug_exists(slug.as_str()).await? {
            warn!(slug = %slug, "Requested slug already in use");
            return Err(DomainError::SlugAlreadyInUse.into());
        }
        Ok(slug)
    }
}
