//! # photohub-entity
//!
//! Domain entity models for PhotoHub. Every struct in this crate
//! represents a database table row, a write payload for one, or a
//! trimmed-down summary embedded in API responses. Row structs derive
//! `sqlx::FromRow`.

pub mod comment;
pub mod photo;
pub mod social_media;
pub mod user;
