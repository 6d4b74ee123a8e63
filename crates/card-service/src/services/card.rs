//! Card publication service
//!
//! Creating, publishing, and editing digital business cards.

use card_core::{Card, DomainError, Order, Slug, User};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    CardResponse, CardWithOrderResponse, CreateCardRequest, SlugAvailabilityResponse,
    UpdateCardRequest,
};

use super::access::{AccessGate, Resource};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::order::OrderService;
use super::slug::SlugAllocator;

/// Card service
pub struct CardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CardService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a card owned by the actor
    ///
    /// When `order_id` names one of the actor's orders carrying a custom URL
    /// name, that name is requested as the slug. Problems resolving the order
    /// are logged and the card falls back to a random slug.
    #[instrument(skip(self, actor, request), fields(user_id = %actor.id))]
    pub async fn create_card(
        &self,
        actor: &User,
        request: CreateCardRequest,
    ) -> ServiceResult<CardResponse> {
        check_new_card(&request)?;

        let requested = match request.order_id {
            Some(order_id) => self.requested_slug_from_order(actor, order_id).await,
            None => None,
        };

        let card = self.publish(actor, request, requested.as_ref()).await?;
        Ok(CardResponse::from(&card))
    }

    /// Create the card for a delivered order and bind it to the order
    ///
    /// Ownership and delivery are checked before anything is written. The
    /// order's custom URL name, if any, must be free.
    #[instrument(skip(self, actor, request), fields(user_id = %actor.id))]
    pub async fn create_card_for_order(
        &self,
        actor: &User,
        order_id: Uuid,
        mut request: CreateCardRequest,
    ) -> ServiceResult<CardWithOrderResponse> {
        let orders = OrderService::new(self.ctx);
        let order = orders.require_order_owner(actor, order_id).await?;

        if !order.status.allows_card_creation() {
            warn!(order_id = %order.id, status = %order.status, "Card requested for undelivered order");
            return Err(DomainError::OrderNotDelivered.into());
        }

        check_new_card(&request)?;
        request.plan_type = request.plan_type.or(Some(order.plan_type));

        let card = self
            .publish(actor, request, order.custom_url_name.as_ref())
            .await?;

        match orders.mark_card_created(actor, order.id, card.id).await {
            Ok(order) => Ok(CardWithOrderResponse {
                card: CardResponse::from(&card),
                order,
            }),
            Err(err) => {
                warn!(order_id = %order.id, card_id = %card.id, error = %err, "Rolling back card");
                if let Err(cleanup) = self.ctx.card_repo().delete(card.id).await {
                    warn!(card_id = %card.id, error = %cleanup, "Failed to roll back card");
                }
                Err(err)
            }
        }
    }

    /// Get a published card by its public slug
    #[instrument(skip(self))]
    pub async fn get_card_by_slug(&self, slug: &str) -> ServiceResult<CardResponse> {
        let card = self
            .ctx
            .card_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::CardNotFound(slug.to_string()))?;
        Ok(CardResponse::from(&card))
    }

    /// Get one of the actor's cards
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn get_card(&self, actor: &User, card_id: Uuid) -> ServiceResult<CardResponse> {
        let card = self.require_card_owner(actor, card_id).await?;
        Ok(CardResponse::from(&card))
    }

    /// List the actor's cards
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn list_my_cards(&self, actor: &User) -> ServiceResult<Vec<CardResponse>> {
        let cards = self.ctx.card_repo().find_by_user(actor.id).await?;
        Ok(cards.iter().map(CardResponse::from).collect())
    }

    /// Update a card's content; the slug never changes
    #[instrument(skip(self, actor, request), fields(user_id = %actor.id))]
    pub async fn update_card(
        &self,
        actor: &User,
        card_id: Uuid,
        request: UpdateCardRequest,
    ) -> ServiceResult<CardResponse> {
        let mut card = self.require_card_owner(actor, card_id).await?;

        if let Some(title) = request.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(ServiceError::validation("title cannot be empty"));
            }
            card.title = title.to_string();
        }
        if let Some(links) = request.links {
            card.links = links;
        }
        if let Some(colors) = request.colors {
            card.colors = colors;
        }
        if let Some(background) = request.background {
            card = card.with_background(Some(background));
        }
        if let Some(profile_pic) = request.profile_pic {
            card.profile_pic = profile_pic;
        }
        if let Some(plan_type) = request.plan_type {
            card.plan_type = plan_type;
        }
        card.touch();

        self.ctx.card_repo().update(&card).await?;

        info!(card_id = %card.id, "Card updated");

        Ok(CardResponse::from(&card))
    }

    /// Delete one of the actor's cards
    ///
    /// Orders that referenced the card keep their `card_created` flag.
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn delete_card(&self, actor: &User, card_id: Uuid) -> ServiceResult<()> {
        let card = self.require_card_owner(actor, card_id).await?;
        self.ctx.card_repo().delete(card.id).await?;

        info!(card_id = %card.id, slug = %card.unique_url, "Card deleted");

        Ok(())
    }

    /// Check whether a custom slug is valid and unused
    #[instrument(skip(self))]
    pub async fn is_slug_available(&self, raw: &str) -> ServiceResult<SlugAvailabilityResponse> {
        let slug = Slug::parse(raw)?;
        let taken = self.ctx.card_repo().slug_exists(slug.as_str()).await?;
        Ok(SlugAvailabilityResponse {
            slug: slug.into_inner(),
            available: !taken,
        })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn require_card_owner(&self, actor: &User, card_id: Uuid) -> ServiceResult<Card> {
        let card = self
            .ctx
            .card_repo()
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| DomainError::CardNotFound(card_id.to_string()))?;
        AccessGate::require_owner(actor, card.user_id, Resource::Card)?;
        Ok(card)
    }

    /// Best-effort lookup of the slug an order asked for
    async fn requested_slug_from_order(&self, actor: &User, order_id: Uuid) -> Option<Slug> {
        let order: Order = match self.ctx.order_repo().find_by_id(order_id).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                warn!(%order_id, "Order for card not found, using random slug");
                return None;
            }
            Err(err) => {
                warn!(%order_id, error = %err, "Order lookup failed, using random slug");
                return None;
            }
        };

        if !order.is_owned_by(actor.id) {
            warn!(%order_id, user_id = %actor.id, "Order belongs to another user, using random slug");
            return None;
        }

        order.custom_url_name
    }

    async fn publish(
        &self,
        actor: &User,
        request: CreateCardRequest,
        requested: Option<&Slug>,
    ) -> ServiceResult<Card> {
        let slug = SlugAllocator::new(self.ctx)
            .allocate(requested.map(Slug::as_str))
            .await?;

        let card = Card::new(
            Uuid::new_v4(),
            actor.id,
            request.title.trim().to_string(),
            slug,
        )
        .with_links(request.links.unwrap_or_default())
        .with_colors(request.colors.unwrap_or_default())
        .with_background(request.background)
        .with_profile_pic(request.profile_pic)
        .with_plan_type(request.plan_type.unwrap_or_default());

        self.ctx.card_repo().create(&card).await?;

        info!(card_id = %card.id, slug = %card.unique_url, "Card created");

        Ok(card)
    }
}

fn check_new_card(request: &CreateCardRequest) -> ServiceResult<()> {
    if request.title.trim().is_empty() {
        return Err(ServiceError::validation("title is required"));
    }
    if request.links.is_none() {
        return Err(ServiceError::validation("links are required"));
    }
    Ok(())
}
