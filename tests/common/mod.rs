#![allow(dead_code)]

pub mod fixtures;

use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Strings shown with `Tj` on a page (1-based), decoded as Latin-1.
    pub fn page_strings(&self, page_number: u32) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let pages = self.doc.get_pages();
        let page_id = pages.get(&page_number).ok_or("page out of range")?;
        let content = Content::decode(&self.doc.get_page_content(*page_id)?)?;
        Ok(content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first())
            .filter_map(|operand| operand.as_str().ok())
            .map(|bytes| bytes.iter().map(|&b| b as char).collect())
            .collect())
    }

    /// Operators used on a page (1-based), in order.
    pub fn page_operators(&self, page_number: u32) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let pages = self.doc.get_pages();
        let page_id = pages.get(&page_number).ok_or("page out of range")?;
        let content = Content::decode(&self.doc.get_page_content(*page_id)?)?;
        Ok(content.operations.into_iter().map(|op| op.operator).collect())
    }

    /// A string entry of the trailer's `/Info` dictionary.
    pub fn info_entry(&self, key: &[u8]) -> Option<String> {
        let info_id = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let info = self.doc.get_dictionary(info_id).ok()?;
        let value = info.get(key).ok()?.as_str().ok()?;
        Some(value.iter().map(|&b| b as char).collect())
    }

    pub fn page_width(&self, page_number: u32) -> Option<f32> {
        let pages = self.doc.get_pages();
        let page = self.doc.get_dictionary(*pages.get(&page_number)?).ok()?;
        let media_box = match page.get(b"MediaBox") {
            Ok(own) => own.as_array().ok()?,
            Err(_) => {
                let parent = self.doc.get_dictionary(page.get(b"Parent").ok()?.as_reference().ok()?).ok()?;
                parent.get(b"MediaBox").ok()?.as_array().ok()?
            }
        };
        media_box.get(2)?.as_float().ok()
    }
}
