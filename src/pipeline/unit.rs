use super::progress::Progress;
use crate::error::GenerationError;
use quire_render_core::PageSink;
use quire_types::PageBounds;

/// One independently generated document inside a multi-document output.
pub trait DocumentUnit {
    /// The unit's own page geometry. The first unit's bounds become the
    /// default bounds of the shared output.
    fn page_bounds(&self) -> PageBounds;

    /// The unit's progress handle. It should be finished once `generate`
    /// returns successfully; the orchestrator finishes it otherwise.
    fn progress(&self) -> &Progress;

    /// Draws the unit's pages into the open output.
    fn generate(&mut self, sink: &mut dyn PageSink, debug_overlay: bool) -> Result<(), GenerationError>;
}
