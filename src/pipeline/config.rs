use crate::error::PipelineError;
use quire_types::DocumentMetadata;
use serde::{Deserialize, Serialize};

pub use quire_render_lopdf::DEFAULT_PDF_VERSION;

/// Settings applied to a whole multi-document run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Outline every placed box.
    pub debug_overlay: bool,
    /// Stamped once on the output when it is opened.
    pub metadata: DocumentMetadata,
    pub pdf_version: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            debug_overlay: false,
            metadata: DocumentMetadata::default(),
            pdf_version: DEFAULT_PDF_VERSION.to_string(),
        }
    }
}

impl GenerationOptions {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }
}
