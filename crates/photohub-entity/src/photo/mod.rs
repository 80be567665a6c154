//! Photo domain entities.

pub mod model;

pub use model::{CreatePhoto, Photo, PhotoSummary, UpdatePhoto};
