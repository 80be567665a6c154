//! Photo entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use photohub_core::traits::Owned;
use photohub_core::types::id::{PhotoId, UserId};

/// An uploaded photo reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    /// Unique photo identifier.
    pub id: PhotoId,
    /// Title (max 100 characters).
    pub title: String,
    /// Optional caption (max 200 characters).
    pub caption: Option<String>,
    /// Location of the image.
    pub photo_url: String,
    /// Owner.
    pub user_id: UserId,
    /// When the photo was created.
    pub created_at: DateTime<Utc>,
    /// When the photo was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Photo {
    /// The response shape without timestamps.
    pub fn summary(&self) -> PhotoSummary {
        PhotoSummary {
            id: self.id,
            title: self.title.clone(),
            caption: self.caption.clone(),
            photo_url: self.photo_url.clone(),
            user_id: self.user_id,
        }
    }
}

impl Owned for Photo {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// Data required to create a photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePhoto {
    /// Title.
    pub title: String,
    /// Optional caption.
    pub caption: Option<String>,
    /// Location of the image.
    pub photo_url: String,
    /// Owner, taken from the authenticated identity.
    pub user_id: UserId,
}

/// Replacement values for a photo's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePhoto {
    /// The photo to update.
    pub id: PhotoId,
    /// New title.
    pub title: String,
    /// New caption.
    pub caption: Option<String>,
    /// New image location.
    pub photo_url: String,
}

/// Photo fields returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSummary {
    /// Photo identifier.
    pub id: PhotoId,
    /// Title.
    pub title: String,
    /// Caption.
    pub caption: Option<String>,
    /// Image location.
    pub photo_url: String,
    /// Owner.
    pub user_id: UserId,
}
