//! Document units and renderers shared by the integration tests.

use quire::layout::{PositionedElement, TextBlock};
use quire::render::{DocumentRenderer, PageSink, RenderError};
use quire::types::{DocumentMetadata, PageBounds};
use quire::{Document, DocumentUnit, GenerationError, Progress};
use std::sync::{Arc, Mutex};

/// A document with one text block per page.
pub fn text_document(pages: &[&str]) -> Document {
    let mut doc = Document::new();
    for (i, text) in pages.iter().enumerate() {
        if i > 0 {
            doc.page_break();
        }
        doc.object(TextBlock::plain(*text));
    }
    doc
}

pub fn boxed(doc: Document) -> Box<dyn DocumentUnit> {
    Box::new(doc)
}

#[derive(Debug, Clone, PartialEq)]
pub enum BracketEvent {
    Begin(PageBounds, Option<String>),
    Page(PageBounds, usize),
    End,
}

/// Records every bracket call. Can be told to fail when closing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<BracketEvent>,
    pub fail_on_close: bool,
    open: bool,
    pages: usize,
}

impl RecordingRenderer {
    pub fn failing_on_close() -> Self {
        Self { fail_on_close: true, ..Default::default() }
    }

    pub fn count(&self, matcher: impl Fn(&BracketEvent) -> bool) -> usize {
        self.events.iter().filter(|e| matcher(e)).count()
    }

    pub fn begins(&self) -> usize {
        self.count(|e| matches!(e, BracketEvent::Begin(..)))
    }

    pub fn ends(&self) -> usize {
        self.count(|e| matches!(e, BracketEvent::End))
    }
}

impl PageSink for RecordingRenderer {
    fn render_page(&mut self, bounds: &PageBounds, elements: &[PositionedElement]) -> Result<(), RenderError> {
        if !self.open {
            return Err(RenderError::BracketState("not open".into()));
        }
        self.pages += 1;
        self.events.push(BracketEvent::Page(*bounds, elements.len()));
        Ok(())
    }

    fn pages_written(&self) -> usize {
        self.pages
    }
}

impl DocumentRenderer for RecordingRenderer {
    fn begin_multi_document(&mut self, bounds: PageBounds, metadata: &DocumentMetadata) -> Result<(), RenderError> {
        self.open = true;
        self.events.push(BracketEvent::Begin(bounds, metadata.title.clone()));
        Ok(())
    }

    fn end_multi_document(&mut self) -> Result<(), RenderError> {
        self.open = false;
        self.events.push(BracketEvent::End);
        if self.fail_on_close {
            return Err(RenderError::Other("disk full".into()));
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unit {0} could not be generated")]
pub struct UnitFailed(pub usize);

/// A unit that draws `pages` empty pages and then optionally fails. It logs
/// the debug flag it was given into `seen_debug`.
pub struct ScriptedUnit {
    pub id: usize,
    pub pages: usize,
    pub fail: bool,
    pub bounds: PageBounds,
    pub progress: Progress,
    pub seen_debug: Arc<Mutex<Vec<(usize, bool)>>>,
}

impl ScriptedUnit {
    pub fn new(id: usize, pages: usize, seen_debug: &Arc<Mutex<Vec<(usize, bool)>>>) -> Self {
        Self {
            id,
            pages,
            fail: false,
            bounds: PageBounds::default(),
            progress: Progress::new(pages as u64),
            seen_debug: Arc::clone(seen_debug),
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl DocumentUnit for ScriptedUnit {
    fn page_bounds(&self) -> PageBounds {
        self.bounds
    }

    fn progress(&self) -> &Progress {
        &self.progress
    }

    fn generate(&mut self, sink: &mut dyn PageSink, debug_overlay: bool) -> Result<(), GenerationError> {
        if let Ok(mut seen) = self.seen_debug.lock() {
            seen.push((self.id, debug_overlay));
        }
        for _ in 0..self.pages {
            sink.render_page(&self.bounds, &[])?;
            self.progress.complete_units(1);
        }
        if self.fail {
            return Err(Box::new(UnitFailed(self.id)));
        }
        Ok(())
    }
}
