//! Core traits defined in `photohub-core` and implemented by other crates.

pub mod repository;

pub use repository::{Owned, Repository};
