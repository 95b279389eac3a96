//! Core rendering abstractions for document output.
//!
//! This crate provides the fundamental traits and types used by rendering backends:
//! - `PageSink` for drawing composed pages into an open output
//! - `DocumentRenderer` for the begin/end bracket around a multi-document artifact
//! - Error types for rendering operations
//! - Shared utility functions for font naming and coordinate conversion

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{DocumentRenderer, PageSink};
