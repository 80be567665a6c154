//! PostgreSQL implementations of the store traits.

pub mod comment;
pub mod photo;
pub mod social_media;
pub mod user;

pub use comment::PgCommentRepository;
pub use photo::PgPhotoRepository;
pub use social_media::PgSocialMediaRepository;
pub use user::PgUserRepository;
