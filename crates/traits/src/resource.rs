//! Loading of image sources referenced by a print document.
//!
//! Photos are stored in the CV as `data:` URLs, so the default provider
//! decodes them in place and never touches the network or the filesystem.

use crate::data_url::DataUrl;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// Resolves an image source string to its bytes.
pub trait ResourceProvider: Send + Sync + Debug {
    fn load(&self, src: &str) -> Result<SharedResourceData, ResourceError>;

    fn exists(&self, src: &str) -> bool {
        self.load(src).is_ok()
    }

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Decodes `data:` URLs. Any other source is `NotFound`, since external
/// URLs are not fetched.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUrlResourceProvider;

impl ResourceProvider for DataUrlResourceProvider {
    fn load(&self, src: &str) -> Result<SharedResourceData, ResourceError> {
        if !DataUrl::is_data_url(src) {
            log::debug!("Not fetching external image source: {}", shorten(src));
            return Err(ResourceError::NotFound(shorten(src)));
        }
        let url = DataUrl::parse(src)?;
        if !url.mime.starts_with("image/") {
            return Err(ResourceError::InvalidFormat(format!(
                "expected an image, got {}",
                url.mime
            )));
        }
        Ok(Arc::new(url.bytes))
    }

    fn exists(&self, src: &str) -> bool {
        DataUrl::is_data_url(src)
    }

    fn name(&self) -> &'static str {
        "DataUrlResourceProvider"
    }
}

/// Data URLs are long; keep log lines and error messages readable.
fn shorten(src: &str) -> String {
    const MAX: usize = 48;
    match src.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &src[..idx]),
        None => src.to_string(),
    }
}
