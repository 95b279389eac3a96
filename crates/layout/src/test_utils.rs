use crate::compose::{Block, ComposedPage, PageComposer};
use crate::config::LayoutConfig;
use crate::LayoutError;
use quire_types::geometry::{Margins, PageBounds};

/// A small page with round numbers: 200x100 with 10pt margins gives an 80pt
/// tall content column, i.e. eight 10pt lines.
pub fn small_page() -> PageBounds {
    PageBounds::new(200.0, 100.0, Margins::all(10.0))
}

pub fn test_config() -> LayoutConfig {
    LayoutConfig {
        font_size: 8.0,
        line_height: 10.0,
        band_inset: 2.0,
    }
}

pub fn compose_test_blocks(blocks: &[Block]) -> Result<Vec<ComposedPage>, LayoutError> {
    let config = test_config();
    PageComposer::new(&config, small_page()).compose(blocks)
}
