//! Photo creation, listing and owner-only mutation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use photohub_auth::ensure_owner;
use photohub_core::error::AppError;
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_core::types::id::{PhotoId, UserId};
use photohub_core::types::pagination::{PageRequest, PageResponse};
use photohub_database::store::PHOTO_MISSING;
use photohub_database::{PhotoStore, UserStore};
use photohub_entity::photo::{CreatePhoto, Photo, UpdatePhoto};
use photohub_entity::user::UserSummary;

use crate::context::RequestContext;

/// Editable photo fields.
#[derive(Debug, Clone)]
pub struct PhotoInput {
    /// Title.
    pub title: String,
    /// Optional caption.
    pub caption: Option<String>,
    /// Image location.
    pub photo_url: String,
}

/// A photo together with its owner's public details.
#[derive(Debug, Clone)]
pub struct PhotoDetails {
    /// The photo.
    pub photo: Photo,
    /// The owner; `None` only if the owner vanished mid-request.
    pub owner: Option<UserSummary>,
}

/// Handles photo use cases.
#[derive(Clone)]
pub struct PhotoService {
    photos: Arc<dyn PhotoStore>,
    users: Arc<dyn UserStore>,
}

impl PhotoService {
    /// Creates a new photo service.
    pub fn new(photos: Arc<dyn PhotoStore>, users: Arc<dyn UserStore>) -> Self {
        Self { photos, users }
    }

    /// Create a photo owned by the current user.
    pub async fn create(&self, ctx: &RequestContext, input: PhotoInput) -> AppResult<Photo> {
        let photo = self
            .photos
            .create(&CreatePhoto {
                title: input.title,
                caption: input.caption,
                photo_url: input.photo_url,
                user_id: ctx.user_id(),
            })
            .await?;
        info!(photo_id = %photo.id, user_id = %photo.user_id, "Photo created");
        Ok(photo)
    }

    /// One page of photos with their owners, fetched in a single batch.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<PhotoDetails>> {
        let photos = self.photos.list(page.normalized()).await?;

        let mut owner_ids: Vec<UserId> = photos.items.iter().map(|p| p.user_id).collect();
        owner_ids.sort();
        owner_ids.dedup();
        let owners: HashMap<UserId, UserSummary> = self
            .users
            .find_by_ids(&owner_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.summary()))
            .collect();

        Ok(photos.map(|photo| PhotoDetails {
            owner: owners.get(&photo.user_id).cloned(),
            photo,
        }))
    }

    /// One photo with its owner.
    pub async fn get(&self, id: PhotoId) -> AppResult<PhotoDetails> {
        let photo = self
            .photos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(PHOTO_MISSING))?;
        let owner = self.users.find_by_id(photo.user_id).await?.map(|u| u.summary());
        Ok(PhotoDetails { photo, owner })
    }

    /// Replace a photo's fields. Owner only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: PhotoId,
        input: PhotoInput,
    ) -> AppResult<Photo> {
        let existing = self.photos.find_by_id(id).await?;
        ensure_owner(existing, &ctx.user, "photo", "update")?;

        let photo = self
            .photos
            .update(&UpdatePhoto {
                id,
                title: input.title,
                caption: input.caption,
                photo_url: input.photo_url,
            })
            .await?;
        info!(photo_id = %id, user_id = %ctx.user_id(), "Photo updated");
        Ok(photo)
    }

    /// Delete a photo and its comments. Owner only.
    pub async fn delete(&self, ctx: &RequestContext, id: PhotoId) -> AppResult<()> {
        let existing = self.photos.find_by_id(id).await?;
        ensure_owner(existing, &ctx.user, "photo", "delete")?;

        if !self.photos.delete(id).await? {
            return Err(AppError::not_found(PHOTO_MISSING));
        }
        info!(photo_id = %id, user_id = %ctx.user_id(), "Photo deleted");
        Ok(())
    }
}
