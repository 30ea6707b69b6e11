use thiserror::Error;
use vitae_traits::encode_data_url;

/// Largest photo accepted by default.
pub const DEFAULT_MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    #[error("'{0}' is not an image type.")]
    NotAnImage(String),

    #[error("Photo is {size} bytes; the limit is {max}.")]
    TooLarge { size: usize, max: usize },
}

/// Checks an uploaded photo and returns it as a `data:` URL.
pub fn import_photo(bytes: &[u8], mime: &str, max_bytes: usize) -> Result<String, PhotoError> {
    let mime = mime.trim().to_ascii_lowercase();
    if !mime.starts_with("image/") {
        return Err(PhotoError::NotAnImage(mime));
    }
    if bytes.len() > max_bytes {
        return Err(PhotoError::TooLarge {
            size: bytes.len(),
            max: max_bytes,
        });
    }
    log::debug!("Imported {} photo of {} bytes.", mime, bytes.len());
    Ok(encode_data_url(&mime, bytes))
}

/// MIME type for a photo file, judged by its extension.
pub fn mime_from_extension(path: &std::path::Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn images_become_data_urls() {
        let url = import_photo(b"abc", "image/PNG", 10).unwrap();
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn non_images_rejected() {
        assert_eq!(
            import_photo(b"abc", "application/pdf", 10),
            Err(PhotoError::NotAnImage("application/pdf".into()))
        );
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(import_photo(&[0; 10], "image/jpeg", 10).is_ok());
        assert_eq!(
            import_photo(&[0; 11], "image/jpeg", 10),
            Err(PhotoError::TooLarge { size: 11, max: 10 })
        );
    }

    #[test]
    fn extensions_map_to_mime() {
        assert_eq!(mime_from_extension(Path::new("me.JPG")), Some("image/jpeg"));
        assert_eq!(mime_from_extension(Path::new("me.txt")), None);
        assert_eq!(mime_from_extension(Path::new("me")), None);
    }
}
