/// A finished download: what to call it, its MIME type and its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn pdf(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            filename: pdf_filename(name),
            mime: "application/pdf",
            bytes,
        }
    }

    pub fn json(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            filename: json_filename(name),
            mime: "application/json",
            bytes,
        }
    }
}

/// `cv-<slug>.<extension>`, or `cv.<extension>` when the name has no
/// letters or digits to keep.
fn filename(name: &str, extension: &str) -> String {
    let slug = slug::slugify(name);
    if slug.is_empty() {
        format!("cv.{}", extension)
    } else {
        format!("cv-{}.{}", slug, extension)
    }
}

pub fn pdf_filename(name: &str) -> String {
    filename(name, "pdf")
}

pub fn json_filename(name: &str) -> String {
    filename(name, "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_slugged() {
        assert_eq!(json_filename("John   Smith!!"), "cv-john-smith.json");
        assert_eq!(pdf_filename("María Pérez"), "cv-maria-perez.pdf");
        assert_eq!(pdf_filename("  Ana-Lucía  O'Neil "), "cv-ana-lucia-o-neil.pdf");
    }

    #[test]
    fn empty_slug_falls_back() {
        assert_eq!(pdf_filename(""), "cv.pdf");
        assert_eq!(json_filename("!!! ???"), "cv.json");
    }

    #[test]
    fn mime_types() {
        assert_eq!(ExportedFile::pdf("a", vec![]).mime, "application/pdf");
        assert_eq!(ExportedFile::json("a", vec![]).mime, "application/json");
    }
}
