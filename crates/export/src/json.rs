use crate::error::{ExportError, ImportError};
use crate::file::ExportedFile;
use serde_json::Value;
use vitae_model::CvDocument;

/// Largest JSON file [`import_json_file`] accepts by default.
pub const DEFAULT_MAX_JSON_BYTES: usize = 1024 * 1024;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The document as pretty-printed JSON, named after its owner.
pub fn export_json(cv: &CvDocument) -> Result<ExportedFile, ExportError> {
    let json = cv.to_json_pretty()?;
    log::info!("Exported CV as JSON ({} bytes).", json.len());
    Ok(ExportedFile::json(&cv.basic_info.name, json.into_bytes()))
}

/// Parses, validates and converts an imported file. Repeated entries in
/// `sectionConfig.order` are dropped, keeping the first.
pub fn import_json(bytes: &[u8]) -> Result<CvDocument, ImportError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let value: Value = serde_json::from_slice(bytes).map_err(ImportError::Parse)?;
    let mut cv = CvDocument::from_value(value)?;

    let dropped = cv.section_config.normalize_order();
    if dropped > 0 {
        log::debug!("Dropped {} repeated section order entries on import.", dropped);
    }
    for duplicate in cv.duplicate_ids() {
        log::warn!(
            "Imported CV repeats id '{}' in {}.",
            duplicate.id,
            duplicate.collection
        );
    }
    Ok(cv)
}

/// [`import_json`] behind the checks applied to a user-picked file: the
/// name, when known, must end in `.json`, and the size is capped.
pub fn import_json_file(
    name: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<CvDocument, ImportError> {
    if let Some(name) = name {
        if !name.to_ascii_lowercase().ends_with(".json") {
            return Err(ImportError::NotJson(name.to_string()));
        }
    }
    if bytes.len() > max_bytes {
        return Err(ImportError::TooLarge {
            size: bytes.len(),
            max: max_bytes,
        });
    }
    import_json(bytes)
}
