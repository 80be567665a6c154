//! Links from a user's profile to external social networks.

use std::sync::Arc;

use tracing::info;

use photohub_auth::ensure_owner;
use photohub_core::error::AppError;
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_core::types::id::SocialMediaId;
use photohub_database::store::SOCIAL_MEDIA_MISSING;
use photohub_database::{SocialMediaStore, UserStore};
use photohub_entity::social_media::{CreateSocialMedia, SocialMedia, UpdateSocialMedia};
use photohub_entity::user::UserSummary;

use crate::context::RequestContext;

const NOUN: &str = "social media entry";

/// Editable link fields.
#[derive(Debug, Clone)]
pub struct SocialMediaInput {
    /// Network name.
    pub name: String,
    /// Profile location.
    pub social_media_url: String,
}

/// A link with its owner.
#[derive(Debug, Clone)]
pub struct SocialMediaDetails {
    /// The link.
    pub social_media: SocialMedia,
    /// Owner.
    pub user: Option<UserSummary>,
}

/// Handles social media link use cases.
#[derive(Clone)]
pub struct SocialMediaService {
    social_medias: Arc<dyn SocialMediaStore>,
    users: Arc<dyn UserStore>,
}

impl SocialMediaService {
    /// Creates a new social media service.
    pub fn new(social_medias: Arc<dyn SocialMediaStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            social_medias,
            users,
        }
    }

    /// Add a link owned by the current user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: SocialMediaInput,
    ) -> AppResult<SocialMedia> {
        let link = self
            .social_medias
            .create(&CreateSocialMedia {
                name: input.name,
                social_media_url: input.social_media_url,
                user_id: ctx.user_id(),
            })
            .await?;
        info!(social_media_id = %link.id, user_id = %link.user_id, "Social media created");
        Ok(link)
    }

    /// The current user's own links.
    pub async fn list_mine(&self, ctx: &RequestContext) -> AppResult<Vec<SocialMediaDetails>> {
        let owner = ctx.user.summary();
        Ok(self
            .social_medias
            .list_by_user(ctx.user_id())
            .await?
            .into_iter()
            .map(|social_media| SocialMediaDetails {
                social_media,
                user: Some(owner.clone()),
            })
            .collect())
    }

    /// One link with its owner.
    pub async fn get(&self, id: SocialMediaId) -> AppResult<SocialMediaDetails> {
        let social_media = self
            .social_medias
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(SOCIAL_MEDIA_MISSING))?;
        let user = self
            .users
            .find_by_id(social_media.user_id)
            .await?
            .map(|u| u.summary());
        Ok(SocialMediaDetails { social_media, user })
    }

    /// Replace a link's fields. Owner only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: SocialMediaId,
        input: SocialMediaInput,
    ) -> AppResult<SocialMedia> {
        let existing = self.social_medias.find_by_id(id).await?;
        ensure_owner(existing, &ctx.user, NOUN, "update")?;

        let link = self
            .social_medias
            .update(&UpdateSocialMedia {
                id,
                name: input.name,
                social_media_url: input.social_media_url,
            })
            .await?;
        info!(social_media_id = %id, user_id = %ctx.user_id(), "Social media updated");
        Ok(link)
    }

    /// Delete a link. Owner only.
    pub async fn delete(&self, ctx: &RequestContext, id: SocialMediaId) -> AppResult<()> {
        let existing = self.social_medias.find_by_id(id).await?;
        ensure_owner(existing, &ctx.user, NOUN, "delete")?;

        if !self.social_medias.delete(id).await? {
            return Err(AppError::not_found(SOCIAL_MEDIA_MISSING));
        }
        info!(social_media_id = %id, user_id = %ctx.user_id(), "Social media deleted");
        Ok(())
    }
}
