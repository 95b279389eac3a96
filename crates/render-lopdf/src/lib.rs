//! Streaming PDF renderer using lopdf.
//!
//! Page content streams are written to the output as soon as each page is
//! drawn; only the page tree, catalog and info dictionary are held back until
//! the bracket closes.

mod helpers;
mod renderer;
mod writer;

pub use helpers::render_elements_to_content;
pub use renderer::{DEFAULT_PDF_VERSION, LopdfRenderer};
pub use writer::StreamingPdfWriter;
