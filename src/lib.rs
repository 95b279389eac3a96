//! quire: sequential multi-document PDF generation.
//!
//! Several independent documents are generated one after another into a
//! single PDF. The building blocks live in the workspace crates and are
//! re-exported here:
//!
//! - [`idf`]: content classification, rich text, hierarchical lists
//! - [`layout`]: list flattening, container groups, the page composer
//! - [`render`]: the output bracket traits and the lopdf backend
//!
//! ```ignore
//! use quire::{Document, DocumentUnit, MultiDocument};
//! use quire::layout::TextBlock;
//!
//! let mut cover = Document::new();
//! cover.object(TextBlock::plain("Annual report"));
//! let mut body = Document::new();
//! body.object(TextBlock::plain("Contents"));
//!
//! let units: Vec<Box<dyn DocumentUnit>> = vec![Box::new(cover), Box::new(body)];
//! let path = MultiDocument::new(units)?.generate_to_file("out/report")?;
//! ```

pub mod document;
pub mod error;
pub mod pipeline;

pub use document::Document;
pub use error::{GenerationError, PipelineError};
pub use pipeline::{DocumentUnit, GenerationOptions, MultiDocument, Progress};

pub use quire_idf as idf;
pub use quire_layout as layout;
pub use quire_types as types;

pub mod render {
    pub use quire_render_core::{utils, DocumentRenderer, PageSink, RenderError};
    pub use quire_render_lopdf::LopdfRenderer;
}
