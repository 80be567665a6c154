//! Photo use cases.

pub mod service;

pub use service::{PhotoDetails, PhotoInput, PhotoService};
