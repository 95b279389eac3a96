pub mod document;
pub mod geometry;
pub mod ids;

pub use document::DocumentMetadata;
pub use geometry::{Margins, PageBounds, PageSize, Rect, Size};
pub use ids::Zone;
