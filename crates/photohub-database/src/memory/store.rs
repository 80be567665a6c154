//! In-memory store implementation using the dashmap crate.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use photohub_core::error::AppError;
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_core::types::id::{CommentId, PhotoId, SocialMediaId, UserId};
use photohub_core::types::pagination::{PageRequest, PageResponse};
use photohub_entity::comment::{Comment, CreateComment, UpdateComment};
use photohub_entity::photo::{CreatePhoto, Photo, UpdatePhoto};
use photohub_entity::social_media::{CreateSocialMedia, SocialMedia, UpdateSocialMedia};
use photohub_entity::user::{CreateUser, UpdateUser, User};

use crate::store::{
    COMMENT_MISSING, CommentStore, EMAIL_TAKEN, PHOTO_MISSING, PhotoStore, SOCIAL_MEDIA_MISSING,
    SocialMediaStore, USER_MISSING, USERNAME_TAKEN, UserStore,
};

/// Store holding every table in process memory.
///
/// Enforces the same unique keys and cascades as the PostgreSQL schema.
/// Email and username uniqueness go through `entry()` on index maps so two
/// concurrent registrations cannot both claim the same key.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<UserId, User>,
    emails: DashMap<String, UserId>,
    usernames: DashMap<String, UserId>,
    photos: DashMap<PhotoId, Photo>,
    comments: DashMap<CommentId, Comment>,
    social_medias: DashMap<SocialMediaId, SocialMedia>,
    user_seq: AtomicI64,
    photo_seq: AtomicI64,
    comment_seq: AtomicI64,
    social_media_seq: AtomicI64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn next(seq: &AtomicI64) -> i64 {
    seq.fetch_add(1, Ordering::SeqCst) + 1
}

/// Claim `key` for `id`. Succeeds if the key is free or already held by `id`.
fn reserve(index: &DashMap<String, UserId>, key: &str, id: UserId) -> bool {
    match index.entry(key.to_string()) {
        Entry::Occupied(held) => *held.get() == id,
        Entry::Vacant(slot) => {
            slot.insert(id);
            true
        }
    }
}

/// Rows sorted by id, the insertion order of a sequence.
fn sorted<K, V: Clone>(map: &DashMap<K, V>, key: impl Fn(&V) -> i64) -> Vec<V>
where
    K: Eq + std::hash::Hash,
{
    let mut rows: Vec<V> = map.iter().map(|r| r.value().clone()).collect();
    rows.sort_by_key(|row| key(row));
    rows
}

#[async_trait]
impl Repository<User, UserId> for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let Some((_, user)) = self.users.remove(&id) else {
            return Ok(false);
        };
        self.emails.remove(&user.email);
        self.usernames.remove(&user.username);

        let owned_photos: Vec<PhotoId> = self
            .photos
            .iter()
            .filter(|p| p.user_id == id)
            .map(|p| p.id)
            .collect();
        self.photos.retain(|_, p| p.user_id != id);
        self.comments
            .retain(|_, c| c.user_id != id && !owned_photos.contains(&c.photo_id));
        self.social_medias.retain(|_, s| s.user_id != id);

        debug!(user_id = %id, photos = owned_photos.len(), "Cascaded user delete");
        Ok(true)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|u| u.value().clone()))
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.emails.get(email).map(|e| *e.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let Some(id) = self.usernames.get(username).map(|e| *e.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let id = UserId::new(next(&self.user_seq));
        if !reserve(&self.emails, &data.email, id) {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }
        if !reserve(&self.usernames, &data.username, id) {
            self.emails.remove(&data.email);
            return Err(AppError::conflict(USERNAME_TAKEN));
        }

        let now = Utc::now();
        let user = User {
            id,
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            age: data.age,
            profile_image_url: data.profile_image_url.clone(),
            created_at: now,
            updated_at: now,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, data: &UpdateUser) -> AppResult<User> {
        let mut user = self
            .users
            .get_mut(&data.id)
            .ok_or_else(|| AppError::not_found(USER_MISSING))?;

        let email_changed = user.email != data.email;
        let username_changed = user.username != data.username;

        if !reserve(&self.emails, &data.email, data.id) {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }
        if !reserve(&self.usernames, &data.username, data.id) {
            if email_changed {
                self.emails.remove(&data.email);
            }
            return Err(AppError::conflict(USERNAME_TAKEN));
        }
        if email_changed {
            self.emails.remove(&user.email);
        }
        if username_changed {
            self.usernames.remove(&user.username);
        }

        user.username = data.username.clone();
        user.email = data.email.clone();
        user.age = data.age;
        user.profile_image_url = data.profile_image_url.clone();
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl Repository<Photo, PhotoId> for MemoryStore {
    async fn find_by_id(&self, id: PhotoId) -> AppResult<Option<Photo>> {
        Ok(self.photos.get(&id).map(|p| p.value().clone()))
    }

    async fn delete(&self, id: PhotoId) -> AppResult<bool> {
        if self.photos.remove(&id).is_none() {
            return Ok(false);
        }
        self.comments.retain(|_, c| c.photo_id != id);
        Ok(true)
    }
}

#[async_trait]
impl PhotoStore for MemoryStore {
    async fn find_by_ids(&self, ids: &[PhotoId]) -> AppResult<Vec<Photo>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.photos.get(id).map(|p| p.value().clone()))
            .collect())
    }

    async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Photo>> {
        let all = sorted(&self.photos, |p| p.id.get());
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit as usize)
            .collect();
        Ok(PageResponse::new(items, page, total))
    }

    async fn create(&self, data: &CreatePhoto) -> AppResult<Photo> {
        if !self.users.contains_key(&data.user_id) {
            return Err(AppError::not_found(USER_MISSING));
        }
        let now = Utc::now();
        let photo = Photo {
            id: PhotoId::new(next(&self.photo_seq)),
            title: data.title.clone(),
            caption: data.caption.clone(),
            photo_url: data.photo_url.clone(),
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        };
        self.photos.insert(photo.id, photo.clone());
        Ok(photo)
    }

    async fn update(&self, data: &UpdatePhoto) -> AppResult<Photo> {
        let mut photo = self
            .photos
            .get_mut(&data.id)
            .ok_or_else(|| AppError::not_found(PHOTO_MISSING))?;
        photo.title = data.title.clone();
        photo.caption = data.caption.clone();
        photo.photo_url = data.photo_url.clone();
        photo.updated_at = Utc::now();
        Ok(photo.clone())
    }
}

#[async_trait]
impl Repository<Comment, CommentId> for MemoryStore {
    async fn find_by_id(&self, id: CommentId) -> AppResult<Option<Comment>> {
        Ok(self.comments.get(&id).map(|c| c.value().clone()))
    }

    async fn delete(&self, id: CommentId) -> AppResult<bool> {
        Ok(self.comments.remove(&id).is_some())
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn list_all(&self) -> AppResult<Vec<Comment>> {
        Ok(sorted(&self.comments, |c| c.id.get()))
    }

    async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        if !self.photos.contains_key(&data.photo_id) {
            return Err(AppError::not_found(PHOTO_MISSING));
        }
        if !self.users.contains_key(&data.user_id) {
            return Err(AppError::not_found(USER_MISSING));
        }
        let now = Utc::now();
        let comment = Comment {
            id: CommentId::new(next(&self.comment_seq)),
            user_id: data.user_id,
            photo_id: data.photo_id,
            message: data.message.clone(),
            created_at: now,
            updated_at: now,
        };
        self.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn update(&self, data: &UpdateComment) -> AppResult<Comment> {
        let mut comment = self
            .comments
            .get_mut(&data.id)
            .ok_or_else(|| AppError::not_found(COMMENT_MISSING))?;
        comment.message = data.message.clone();
        comment.updated_at = Utc::now();
        Ok(comment.clone())
    }
}

#[async_trait]
impl Repository<SocialMedia, SocialMediaId> for MemoryStore {
    async fn find_by_id(&self, id: SocialMediaId) -> AppResult<Option<SocialMedia>> {
        Ok(self.social_medias.get(&id).map(|s| s.value().clone()))
    }

    async fn delete(&self, id: SocialMediaId) -> AppResult<bool> {
        Ok(self.social_medias.remove(&id).is_some())
    }
}

#[async_trait]
impl SocialMediaStore for MemoryStore {
    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<SocialMedia>> {
        let mut rows = sorted(&self.social_medias, |s| s.id.get());
        rows.retain(|s| s.user_id == user_id);
        Ok(rows)
    }

    async fn create(&self, data: &CreateSocialMedia) -> AppResult<SocialMedia> {
        if !self.users.contains_key(&data.user_id) {
            return Err(AppError::not_found(USER_MISSING));
        }
        let now = Utc::now();
        let link = SocialMedia {
            id: SocialMediaId::new(next(&self.social_media_seq)),
            name: data.name.clone(),
            social_media_url: data.social_media_url.clone(),
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        };
        self.social_medias.insert(link.id, link.clone());
        Ok(link)
    }

    async fn update(&self, data: &UpdateSocialMedia) -> AppResult<SocialMedia> {
        let mut link = self
            .social_medias
            .get_mut(&data.id)
            .ok_or_else(|| AppError::not_found(SOCIAL_MEDIA_MISSING))?;
        link.name = data.name.clone();
        link.social_media_url = data.social_media_url.clone();
        link.updated_at = Utc::now();
        Ok(link.clone())
    }
}
