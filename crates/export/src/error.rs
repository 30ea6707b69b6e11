use thiserror::Error;
use vitae_layout::LayoutError;
use vitae_model::ModelError;
use vitae_render_lopdf::RenderError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("PDF writing failed: {0}")]
    Render(#[from] RenderError),

    #[error("PDF engine failed: {0}")]
    Failed(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("An export is already in progress.")]
    Busy,

    #[error("PDF generation failed: {0}")]
    Engine(#[from] EngineError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why an imported file was rejected. The current document is never
/// touched when import fails.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("File is {size} bytes; the limit is {max}.")]
    TooLarge { size: usize, max: usize },

    #[error("'{0}' is not a .json file.")]
    NotJson(String),

    #[error("File is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("File is not a CV document: {0}")]
    Invalid(#[from] ModelError),
}
