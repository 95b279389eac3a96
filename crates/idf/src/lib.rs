//! Intermediate Document Format (IDF)
//! This crate defines the in-memory representation of document content after
//! it has been ingested but before layout: validated content kinds, styled
//! text runs, image handles and list trees.

pub mod content;
pub mod list;

use std::sync::Arc;

pub use content::{ContentError, ContentKind, ContentValue, ImageHandle, RichText, Span, SpanStyle, classify};
pub use list::{Indent, ItemId, List, ListEntry, ListItem, ListSymbol};

/// A string type for the document.
pub type TextStr = String;

/// A reference-counted container for shared, immutable data like images.
pub type SharedData = Arc<Vec<u8>>;
