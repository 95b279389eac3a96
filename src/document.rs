//! The stock document unit: a sequence of blocks composed with [`PageComposer`].

use crate::error::GenerationError;
use crate::pipeline::{DocumentUnit, Progress};
use log::debug;
use quire_idf::List;
use quire_layout::{Block, ContainerGroup, LayoutConfig, PageComposer, Positionable};
use quire_render_core::PageSink;
use quire_types::PageBounds;

/// A document built from blocks. Generation composes the pages (one progress
/// unit) and then draws each page (one unit per page).
#[derive(Debug, Default)]
pub struct Document {
    blocks: Vec<Block>,
    bounds: PageBounds,
    config: LayoutConfig,
    progress: Progress,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: PageBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn object(&mut self, object: impl Positionable + 'static) -> &mut Self {
        self.push(Block::object(object))
    }

    pub fn list(&mut self, list: List) -> &mut Self {
        self.push(Block::List(list))
    }

    pub fn group(&mut self, group: ContainerGroup) -> &mut Self {
        self.push(Block::Group(group))
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.push(Block::PageBreak)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}

impl DocumentUnit for Document {
    fn page_bounds(&self) -> PageBounds {
        self.bounds
    }

    fn progress(&self) -> &Progress {
        &self.progress
    }

    fn generate(&mut self, sink: &mut dyn PageSink, debug_overlay: bool) -> Result<(), GenerationError> {
        let pages = PageComposer::new(&self.config, self.bounds)
            .with_debug_overlay(debug_overlay)
            .compose(&self.blocks)?;
        debug!("Composed {} blocks into {} pages.", self.blocks.len(), pages.len());

        self.progress.set_total(1 + pages.len() as u64);
        self.progress.complete_units(1);
        for page in &pages {
            sink.render_page(&page.bounds, &page.elements)?;
            self.progress.complete_units(1);
        }
        self.progress.finish();
        Ok(())
    }
}
