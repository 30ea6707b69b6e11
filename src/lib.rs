//! vitae: a CV document with interchangeable themes, an HTML preview and
//! PDF/JSON export.
//!
//! The workspace crates do the work; this crate wires them into a
//! [`Shell`] that owns the live document, and adds configuration, local
//! persistence and photo import.

pub mod config;
pub mod error;
pub mod persist;
pub mod photo;
pub mod session;

pub use config::VitaeConfig;
pub use error::{CliError, ConfigError, ShellError};
pub use persist::{FileStore, MemoryStore, StateStore, StoreError};
pub use photo::{PhotoError, import_photo};
pub use session::{DirectorySink, DownloadSink, MemorySink, PreviewOutcome, Shell};

pub use vitae_export::{
    EngineError, ExportError, ExportPipeline, ExportedFile, ImportError, LopdfEngine, PdfEngine,
};
pub use vitae_model::CvDocument;
pub use vitae_theme::{Theme, ThemeRegistry};
pub use vitae_themes::builtin_registry;
