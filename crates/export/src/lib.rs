//! Export of a CV document to PDF and JSON, and JSON import.
//!
//! PDF export goes through a [`PdfEngine`], the one suspension point of the
//! pipeline. The print tree is captured from the theme before the engine is
//! awaited, and a busy flag rejects a second export while one is running.

mod engine;
mod error;
mod file;
mod json;
mod pipeline;

pub use engine::{LopdfEngine, PdfEngine};
pub use error::{EngineError, ExportError, ImportError};
pub use file::{ExportedFile, json_filename, pdf_filename};
pub use json::{DEFAULT_MAX_JSON_BYTES, export_json, import_json, import_json_file};
pub use pipeline::ExportPipeline;
