use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Node has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod algorithms;
pub mod compose;
pub mod config;
mod elements;
pub mod group;
pub mod list;
pub mod list_utils;
pub mod objects;

pub use self::compose::{Block, ComposedPage, PageComposer};
pub use self::config::LayoutConfig;
pub use self::elements::{FrameElement, ImageElement, LayoutElement, PositionedElement, TextElement, TextRun};
pub use self::group::ContainerGroup;
pub use self::list::{FlatRow, flatten};
pub use self::objects::{ImageBox, Positionable, Spacer, TextBlock};

// Re-export geometry types used by objects to prevent type mismatches
pub use quire_types::geometry::{PageBounds, Rect, Size};

#[cfg(test)]
mod test_utils;
