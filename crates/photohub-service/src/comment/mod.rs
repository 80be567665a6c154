//! Comment use cases.

pub mod service;

pub use service::{CommentDetails, CommentService};
