//! `data:` URLs, the self-contained form photos are stored in.

use crate::resource::ResourceError;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// A decoded `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    pub fn is_data_url(src: &str) -> bool {
        src.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("data:"))
    }

    /// Parses a data URL. Base64 and plain (unescaped) payloads are accepted.
    pub fn parse(src: &str) -> Result<Self, ResourceError> {
        if !Self::is_data_url(src) {
            return Err(ResourceError::InvalidFormat("not a data URL".to_string()));
        }
        let rest = &src[5..];
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ResourceError::InvalidFormat("data URL has no payload".to_string()))?;

        let mut params = header.split(';');
        let mime = params.next().unwrap_or_default().trim();
        let is_base64 = params.any(|p| p.trim().eq_ignore_ascii_case("base64"));
        let mime = if mime.is_empty() {
            "text/plain".to_string()
        } else {
            mime.to_ascii_lowercase()
        };

        let bytes = if is_base64 {
            let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            STANDARD
                .decode(compact.as_bytes())
                .map_err(|e| ResourceError::InvalidFormat(format!("bad base64 payload: {}", e)))?
        } else {
            payload.as_bytes().to_vec()
        };

        Ok(Self { mime, bytes })
    }
}

/// Encodes bytes as `data:<mime>;base64,...`.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_payload_decodes() {
        let url = encode_data_url("image/png", &[0x89, b'P', b'N', b'G']);
        assert!(url.starts_with("data:image/png;base64,"));
        let parsed = DataUrl::parse(&url).unwrap();
        assert_eq!(parsed.mime, "image/png");
        assert_eq!(parsed.bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn plain_payload_and_default_mime() {
        let parsed = DataUrl::parse("data:,hello").unwrap();
        assert_eq!(parsed.mime, "text/plain");
        assert_eq!(parsed.bytes, b"hello");
    }

    #[test]
    fn malformed_urls_rejected() {
        assert!(matches!(
            DataUrl::parse("https://example.com/me.png"),
            Err(ResourceError::InvalidFormat(_))
        ));
        assert!(DataUrl::parse("data:image/png;base64").is_err());
        assert!(DataUrl::parse("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert!(DataUrl::is_data_url("DATA:image/jpeg;base64,AA=="));
        assert!(!DataUrl::is_data_url("dat"));
    }
}
