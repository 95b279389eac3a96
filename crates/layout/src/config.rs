use serde::{Deserialize, Serialize};

/// Typographic settings used by the page composer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Font size for text content, in points.
    pub font_size: f32,
    /// Vertical advance per line of text, in points. Text is not wrapped; each
    /// explicit line break starts a new line.
    pub line_height: f32,
    /// Distance between the page edge and the header/footer bands.
    ///
    /// The header band spans the top margin below this inset and the footer
    /// band spans the bottom margin above it.
    pub band_inset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            line_height: 14.4,
            band_inset: 12.0,
        }
    }
}
