//! Social media link model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use photohub_core::traits::Owned;
use photohub_core::types::id::{SocialMediaId, UserId};

/// A link from a user's profile to an external social network.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SocialMedia {
    /// Unique identifier.
    pub id: SocialMediaId,
    /// Network name (max 50 characters).
    pub name: String,
    /// Profile location on the network.
    pub social_media_url: String,
    /// Owner.
    pub user_id: UserId,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
    /// When the link was last updated.
    pub updated_at: DateTime<Utc>,
}

impl SocialMedia {
    /// The response shape without timestamps.
    pub fn summary(&self) -> SocialMediaSummary {
        SocialMediaSummary {
            id: self.id,
            name: self.name.clone(),
            social_media_url: self.social_media_url.clone(),
            user_id: self.user_id,
        }
    }
}

impl Owned for SocialMedia {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// Data required to create a social media link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSocialMedia {
    /// Network name.
    pub name: String,
    /// Profile location.
    pub social_media_url: String,
    /// Owner, taken from the authenticated identity.
    pub user_id: UserId,
}

/// Replacement values for a social media link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSocialMedia {
    /// The link to update.
    pub id: SocialMediaId,
    /// New network name.
    pub name: String,
    /// New profile location.
    pub social_media_url: String,
}

/// Social media fields returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaSummary {
    /// Identifier.
    pub id: SocialMediaId,
    /// Network name.
    pub name: String,
    /// Profile location.
    pub social_media_url: String,
    /// Owner.
    pub user_id: UserId,
}
