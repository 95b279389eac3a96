use super::config::GenerationOptions;
use super::progress::Progress;
use super::unit::DocumentUnit;
use crate::error::PipelineError;
use log::{info, warn};
use quire_render_core::{DocumentRenderer, RenderError};
use quire_render_lopdf::LopdfRenderer;
use quire_types::{DocumentMetadata, PageBounds};
use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Generates several documents, one after another, into a single output.
///
/// The output is opened once before the first document runs and closed once
/// after the last, also when a document fails part way through.
pub struct MultiDocument {
    units: Vec<Box<dyn DocumentUnit>>,
    bounds: PageBounds,
    progress: Progress,
    options: GenerationOptions,
}

impl std::fmt::Debug for MultiDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiDocument")
            .field("units", &self.units.len())
            .field("bounds", &self.bounds)
            .field("progress", &self.progress)
            .field("options", &self.options)
            .finish()
    }
}

impl MultiDocument {
    /// Fails with [`PipelineError::EmptyDocumentSet`] when `units` is empty.
    pub fn new(units: Vec<Box<dyn DocumentUnit>>) -> Result<Self, PipelineError> {
        let bounds = units.first().ok_or(PipelineError::EmptyDocumentSet)?.page_bounds();
        let progress = Progress::new(units.len() as u64);
        Ok(Self { units, bounds, progress, options: GenerationOptions::default() })
    }

    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.options.debug_overlay = enabled;
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.options.metadata = metadata;
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Bounds of the shared output, taken from the first document.
    pub fn page_bounds(&self) -> PageBounds {
        self.bounds
    }

    /// The aggregate tracker. Each document is worth one unit.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Writes the output as a PDF file and returns the path actually used.
    /// See [`resolve_output_path`].
    ///
    /// If a document fails, the file is still closed as a valid PDF holding the
    /// pages drawn so far, and the document's error is returned.
    pub fn generate_to_file(self, path: impl AsRef<Path>) -> Result<PathBuf, PipelineError> {
        let output_path = resolve_output_path(path.as_ref());
        if let Some(parent_dir) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent_dir)?;
        }
        let file = fs::File::create(&output_path)?;
        let writer = io::BufWriter::new(file);

        let mut renderer = LopdfRenderer::new(writer).with_version(self.options.pdf_version.clone());
        let result = self.generate_with(&mut renderer);
        let flushed = renderer
            .into_inner()
            .and_then(|mut writer| writer.flush().map_err(RenderError::from));

        match (result, flushed) {
            (Ok(()), Ok(())) => Ok(output_path),
            (Ok(()), Err(e)) => Err(e.into()),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(flush_err)) => {
                warn!(
                    "Flushing {} after a failed document also failed: {}",
                    output_path.display(),
                    flush_err
                );
                Err(e)
            }
        }
    }

    /// Produces the output as an in-memory PDF.
    pub fn generate_to_bytes(self) -> Result<Vec<u8>, PipelineError> {
        let mut renderer =
            LopdfRenderer::new(Cursor::new(Vec::new())).with_version(self.options.pdf_version.clone());
        self.generate_with(&mut renderer)?;
        Ok(renderer.into_inner()?.into_inner())
    }

    /// Runs every document into `renderer`, bracketing the whole run with
    /// `begin_multi_document` / `end_multi_document`.
    pub fn generate_with<R: DocumentRenderer>(mut self, renderer: &mut R) -> Result<(), PipelineError> {
        let start_time = Instant::now();
        info!("Starting multi-document generation of {} documents.", self.units.len());

        renderer.begin_multi_document(self.bounds, &self.options.metadata)?;
        let result = self.generate_units(renderer);
        let pages = renderer.pages_written();
        let closed = renderer.end_multi_document();

        match (result, closed) {
            (Ok(()), Ok(())) => {
                info!(
                    "Finished {} documents ({} pages) in {:.2?}.",
                    self.units.len(),
                    pages,
                    start_time.elapsed()
                );
                Ok(())
            }
            (Ok(()), Err(e)) => Err(e.into()),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                warn!("Closing the output after a failed document also failed: {}", close_err);
                Err(e)
            }
        }
    }

    fn generate_units<R: DocumentRenderer>(&mut self, renderer: &mut R) -> Result<(), PipelineError> {
        let count = self.units.len();
        let debug_overlay = self.options.debug_overlay;
        for (index, unit) in self.units.iter_mut().enumerate() {
            self.progress.add_child(unit.progress(), 1);

            let unit_start = Instant::now();
            info!("Generating document {}/{}.", index + 1, count);
            if let Err(e) = unit.generate(&mut *renderer, debug_overlay) {
                warn!("Document {}/{} failed, closing output: {}", index + 1, count, e);
                return Err(PipelineError::Generation(e));
            }
            unit.progress().finish();
            info!(
                "Document {}/{} done in {:.2?} ({} pages written so far).",
                index + 1,
                count,
                unit_start.elapsed(),
                renderer.pages_written()
            );
        }
        Ok(())
    }
}

/// Appends a `.pdf` extension to a path that has none.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("pdf")
    }
}
