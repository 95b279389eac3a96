use crate::helpers;
use crate::writer::StreamingPdfWriter;
use lopdf::{dictionary, Dictionary, Object, StringFormat};
use quire_layout::PositionedElement;
use quire_render_core::utils::{encode_win_ansi, STANDARD_FONTS};
use quire_render_core::{DocumentRenderer, PageSink, RenderError};
use quire_types::{DocumentMetadata, PageBounds};
use std::io::{Seek, Write};

pub const DEFAULT_PDF_VERSION: &str = "1.7";

enum BracketState<W: Write + Seek> {
    Ready(W),
    Open(StreamingPdfWriter<W>),
    /// Finished output and the number of pages it holds.
    Closed(W, usize),
    /// The output was lost to an I/O failure while opening or closing.
    Failed,
}

/// A PDF renderer that streams pages into `W` between
/// `begin_multi_document` and `end_multi_document`.
pub struct LopdfRenderer<W: Write + Seek> {
    state: BracketState<W>,
    version: String,
}

impl<W: Write + Seek> LopdfRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { state: BracketState::Ready(output), version: DEFAULT_PDF_VERSION.to_string() }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Returns the output once the bracket has been closed.
    pub fn into_inner(self) -> Result<W, RenderError> {
        match self.state {
            BracketState::Closed(output, _) => Ok(output),
            BracketState::Ready(_) => Err(RenderError::BracketState("output was never opened".into())),
            BracketState::Open(_) => Err(RenderError::BracketState("output is still open".into())),
            BracketState::Failed => Err(RenderError::BracketState("output was lost to an earlier failure".into())),
        }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        match &mut self.state {
            BracketState::Open(writer) => Ok(writer),
            _ => Err(RenderError::BracketState("page rendered outside of an open document".into())),
        }
    }
}

fn font_dictionary() -> Dictionary {
    let mut fonts = Dictionary::new();
    for (resource, base_font) in STANDARD_FONTS {
        fonts.set(
            resource,
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font,
                "Encoding" => "WinAnsiEncoding",
            },
        );
    }
    fonts
}

fn info_dictionary(metadata: &DocumentMetadata) -> Option<Dictionary> {
    let entries = metadata.entries();
    if entries.is_empty() {
        return None;
    }
    let mut info = Dictionary::new();
    for (key, value) in entries {
        info.set(key, Object::String(encode_win_ansi(&value), StringFormat::Literal));
    }
    Some(info)
}

impl<W: Write + Seek> PageSink for LopdfRenderer<W> {
    fn render_page(&mut self, bounds: &PageBounds, elements: &[PositionedElement]) -> Result<(), RenderError> {
        let writer = self.writer_mut()?;
        let content = helpers::render_elements_to_content(elements, bounds.height);
        let content_id = writer.write_content_stream(content)?;
        writer.write_page(content_id, bounds)?;
        log::debug!("Wrote page {} ({} elements)", writer.page_count(), elements.len());
        Ok(())
    }

    fn pages_written(&self) -> usize {
        match &self.state {
            BracketState::Open(writer) => writer.page_count(),
            BracketState::Closed(_, pages) => *pages,
            _ => 0,
        }
    }
}

impl<W: Write + Seek> DocumentRenderer for LopdfRenderer<W> {
    fn begin_multi_document(&mut self, bounds: PageBounds, metadata: &DocumentMetadata) -> Result<(), RenderError> {
        match std::mem::replace(&mut self.state, BracketState::Failed) {
            BracketState::Ready(output) => {
                let mut writer = StreamingPdfWriter::new(output, &self.version, font_dictionary(), bounds)?;
                if let Some(info) = info_dictionary(metadata) {
                    writer.set_info(info);
                }
                self.state = BracketState::Open(writer);
                Ok(())
            }
            other => {
                self.state = other;
                Err(RenderError::BracketState("output has already been opened".into()))
            }
        }
    }

    fn end_multi_document(&mut self) -> Result<(), RenderError> {
        match std::mem::replace(&mut self.state, BracketState::Failed) {
            BracketState::Open(writer) => {
                let pages = writer.page_count();
                let output = writer.finish()?;
                log::debug!("Closed PDF output with {} pages", pages);
                self.state = BracketState::Closed(output, pages);
                Ok(())
            }
            other => {
                self.state = other;
                Err(RenderError::BracketState("output is not open".into()))
            }
        }
    }

    fn is_open(&self) -> bool {
        matches!(self.state, BracketState::Open(_))
    }
}
