//! Social media link use cases.

pub mod service;

pub use service::{SocialMediaDetails, SocialMediaInput, SocialMediaService};
