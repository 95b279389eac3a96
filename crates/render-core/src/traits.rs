use crate::error::RenderError;
use quire_layout::PositionedElement;
use quire_types::{DocumentMetadata, PageBounds};

/// Receives composed pages while an output bracket is open.
pub trait PageSink {
    /// Draws one page. `bounds` is the page's own geometry, which may differ
    /// from the bracket's default bounds.
    fn render_page(&mut self, bounds: &PageBounds, elements: &[PositionedElement]) -> Result<(), RenderError>;

    /// Number of pages drawn since the bracket was opened.
    fn pages_written(&self) -> usize;
}

/// A renderer that brackets a single output artifact shared by several documents.
///
/// `begin_multi_document` and `end_multi_document` must each be called exactly
/// once; pages are only accepted between them.
pub trait DocumentRenderer: PageSink {
    fn begin_multi_document(&mut self, bounds: PageBounds, metadata: &DocumentMetadata) -> Result<(), RenderError>;

    fn end_multi_document(&mut self) -> Result<(), RenderError>;

    fn is_open(&self) -> bool;
}
