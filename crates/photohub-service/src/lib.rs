//! # photohub-service
//!
//! Business logic service layer for PhotoHub. Each service orchestrates
//! the stores and the auth primitives to implement one group of use
//! cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. Every operation performed
//! on behalf of a signed-in user takes an explicit [`RequestContext`].

pub mod auth;
pub mod comment;
pub mod context;
pub mod photo;
pub mod social_media;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{AuthService, LoginOutcome, RegisterInput};
pub use comment::{CommentDetails, CommentService};
pub use context::RequestContext;
pub use photo::{PhotoDetails, PhotoInput, PhotoService};
pub use social_media::{SocialMediaDetails, SocialMediaInput, SocialMediaService};
pub use user::{UpdateProfileInput, UserService};
