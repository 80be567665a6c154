//! Route handlers organized by domain.

pub mod auth;
pub mod comment;
pub mod health;
pub mod photo;
pub mod social_media;
pub mod user;
