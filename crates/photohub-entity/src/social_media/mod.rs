//! Social media link entities.

pub mod model;

pub use model::{CreateSocialMedia, SocialMedia, SocialMediaSummary, UpdateSocialMedia};
