//! In-process store backed by concurrent hash maps.

pub mod store;

pub use store::MemoryStore;
