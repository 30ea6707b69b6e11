// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use vitae::{CvDocument, ExportPipeline, LopdfEngine, Theme};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

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

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Exports `cv` through a fresh pipeline and parses the result.
pub fn export_pdf(cv: &CvDocument, theme: &dyn Theme) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = ExportPipeline::new(LopdfEngine::default());
    let file = tokio::runtime::Builder::new_current_thread()
        .build()?
        .block_on(pipeline.export_pdf(cv, theme))?;
    GeneratedPdf::from_bytes(file.bytes)
}
