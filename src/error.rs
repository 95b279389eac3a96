use quire_layout::LayoutError;
use quire_render_core::RenderError;
use thiserror::Error;

/// The opaque error a document unit reports from `generate`.
pub type GenerationError = Box<dyn std::error::Error + Send + Sync>;

/// A comprehensive error type for multi-document generation.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("A multi-document requires at least one document")]
    EmptyDocumentSet,

    /// A unit's own failure, passed through unchanged.
    #[error(transparent)]
    Generation(GenerationError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl PipelineError {
    /// The unit error behind a `Generation` failure, if that is what this is.
    pub fn generation_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            PipelineError::Generation(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
