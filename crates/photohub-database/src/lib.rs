//! # photohub-database
//!
//! PostgreSQL connection management, migrations and the store
//! implementations backing every PhotoHub entity.
//!
//! Two backends implement the traits in [`store`]:
//!
//! - **postgres**: sqlx repositories in [`repositories`]
//! - **memory**: a process-local [`memory::MemoryStore`] built on dashmap
//!
//! [`Stores`] bundles one implementation of each trait and is selected at
//! startup from `database.provider`.

pub mod connection;
#[cfg(feature = "memory")]
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;
pub mod stores;

pub use connection::DatabasePool;
pub use store::{CommentStore, PhotoStore, SocialMediaStore, UserStore};
pub use stores::Stores;
