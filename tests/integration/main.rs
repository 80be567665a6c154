//! HTTP integration tests driving the full router against the in-memory store.

mod helpers;

mod auth_test;
mod comment_test;
mod photo_test;
mod social_media_test;
