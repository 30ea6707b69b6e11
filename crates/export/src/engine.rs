use crate::error::EngineError;
use std::future::Future;
use std::sync::Arc;
use vitae_idf::PrintDocument;
use vitae_layout::{LaidOutDocument, LayoutConfig, LayoutEngine};
use vitae_render_lopdf::{DecodedImage, LopdfRenderer, ResolvedImages};
use vitae_traits::{DataUrlResourceProvider, ResourceProvider};

/// Turns a print tree into PDF bytes. Rendering may suspend; callers hold
/// no borrowed document state across the await.
pub trait PdfEngine: Send + Sync {
    fn render(
        &self,
        doc: PrintDocument,
    ) -> impl Future<Output = Result<Vec<u8>, EngineError>> + Send;
}

/// Paginates with [`LayoutEngine`] and writes the pages with lopdf.
#[derive(Debug, Clone)]
pub struct LopdfEngine {
    layout: LayoutEngine,
    renderer: LopdfRenderer,
    resources: Arc<dyn ResourceProvider>,
}

impl Default for LopdfEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LopdfEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            layout: LayoutEngine::new(config),
            renderer: LopdfRenderer::new(),
            resources: Arc::new(DataUrlResourceProvider),
        }
    }

    /// Replaces the provider image sources are loaded from.
    pub fn with_resources(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = resources;
        self
    }

    /// The whole render without yielding.
    pub fn render_now(&self, doc: &PrintDocument) -> Result<Vec<u8>, EngineError> {
        let laid_out = self.layout.paginate(doc)?;
        log::debug!(
            "Laid out '{}' on {} page(s).",
            doc.title,
            laid_out.pages.len()
        );
        let images = self.resolve_images(&laid_out);
        Ok(self.renderer.render(&laid_out, &images)?)
    }

    /// Loads and decodes every image the pages reference. A photo that
    /// cannot be loaded or decoded is left out of the PDF rather than
    /// failing the export.
    fn resolve_images(&self, laid_out: &LaidOutDocument) -> ResolvedImages {
        let mut images = ResolvedImages::new();
        for src in laid_out.image_sources() {
            if images.contains_key(src) {
                continue;
            }
            let decoded = self
                .resources
                .load(src)
                .map_err(|e| e.to_string())
                .and_then(|bytes| DecodedImage::decode(src, &bytes).map_err(|e| e.to_string()));
            match decoded {
                Ok(image) => {
                    images.insert(src.to_string(), image);
                }
                Err(message) => log::warn!(
                    "Leaving image out of the PDF ({}): {}",
                    self.resources.name(),
                    message
                ),
            }
        }
        images
    }
}

impl PdfEngine for LopdfEngine {
    async fn render(&self, doc: PrintDocument) -> Result<Vec<u8>, EngineError> {
        tokio::task::yield_now().await;
        self.render_now(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use lopdf::Document;
    use std::io::Cursor;
    use vitae_model::CvDocument;
    use vitae_theme::Theme;
    use vitae_themes::{BasicTheme, ModernoTheme};
    use vitae_traits::encode_data_url;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn png_photo() -> String {
        let img = RgbImage::from_pixel(4, 4, Rgb([200, 40, 40]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        encode_data_url("image/png", &bytes)
    }

    fn image_count(pdf: &[u8]) -> usize {
        let doc = Document::load_mem(pdf).unwrap();
        doc.objects
            .values()
            .filter(|obj| {
                obj.as_stream()
                    .ok()
                    .and_then(|s| s.dict.get(b"Subtype").ok())
                    .and_then(|t| t.as_name().ok())
                    == Some(b"Image".as_slice())
            })
            .count()
    }

    #[tokio::test]
    async fn renders_sample_cv() {
        init_logger();
        let cv = CvDocument::sample().unwrap();
        let bytes = LopdfEngine::default()
            .render(ModernoTheme.render_print(&cv))
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(!doc.get_pages().is_empty());
    }

    #[test]
    fn photo_is_embedded() {
        let mut cv = CvDocument::sample().unwrap();
        cv.basic_info.photo = Some(png_photo());
        let bytes = LopdfEngine::default()
            .render_now(&BasicTheme.render_print(&cv))
            .unwrap();
        assert_eq!(image_count(&bytes), 1);
    }

    #[test]
    fn undecodable_photo_is_skipped() {
        init_logger();
        let mut cv = CvDocument::sample().unwrap();
        cv.basic_info.photo = Some(encode_data_url("image/png", b"not a png"));
        let bytes = LopdfEngine::default()
            .render_now(&BasicTheme.render_print(&cv))
            .unwrap();
        assert_eq!(image_count(&bytes), 0);
    }
}
