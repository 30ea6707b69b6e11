use crate::engine::PdfEngine;
use crate::error::ExportError;
use crate::file::ExportedFile;
use std::sync::atomic::{AtomicBool, Ordering};
use vitae_model::CvDocument;
use vitae_theme::Theme;

/// Runs PDF exports one at a time through an engine.
#[derive(Debug, Default)]
pub struct ExportPipeline<E> {
    engine: E,
    generating: AtomicBool,
}

/// Holds the busy flag for the duration of one export and clears it when
/// dropped, whether the export finished, failed or was abandoned.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<E: PdfEngine> ExportPipeline<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            generating: AtomicBool::new(false),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// True while an export is between start and completion.
    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    /// Renders `cv` with `theme` and returns the PDF as a download. A
    /// second call while one is running fails with [`ExportError::Busy`].
    pub async fn export_pdf(
        &self,
        cv: &CvDocument,
        theme: &dyn Theme,
    ) -> Result<ExportedFile, ExportError> {
        let Some(_guard) = BusyGuard::acquire(&self.generating) else {
            log::warn!("Export requested while another is running; ignoring.");
            return Err(ExportError::Busy);
        };

        // Snapshot before suspending; later edits do not leak into this export.
        let print = theme.render_print(cv);
        let name = cv.basic_info.name.clone();
        log::info!("Generating PDF with theme '{}'.", theme.id());

        match self.engine.render(print).await {
            Ok(bytes) => {
                let file = ExportedFile::pdf(&name, bytes);
                log::info!("Generated {} ({} bytes).", file.filename, file.bytes.len());
                Ok(file)
            }
            Err(e) => {
                log::error!("PDF generation failed: {}", e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;
    use vitae_idf::PrintDocument;
    use vitae_themes::BasicTheme;

    /// Waits for a signal before finishing, so a test can observe the
    /// pipeline mid-export.
    #[derive(Default)]
    struct GatedEngine {
        gate: Notify,
        titles: std::sync::Mutex<Vec<String>>,
    }

    impl PdfEngine for GatedEngine {
        async fn render(&self, doc: PrintDocument) -> Result<Vec<u8>, EngineError> {
            self.titles.lock().unwrap().push(doc.title.clone());
            self.gate.notified().await;
            Ok(b"%PDF-gated".to_vec())
        }
    }

    #[derive(Default)]
    struct FailingEngine {
        calls: AtomicUsize,
    }

    impl PdfEngine for FailingEngine {
        async fn render(&self, _doc: PrintDocument) -> Result<Vec<u8>, EngineError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(EngineError::Failed("boom".into()))
        }
    }

    fn sample() -> CvDocument {
        CvDocument::sample().unwrap()
    }

    #[tokio::test]
    async fn second_export_rejected_while_busy() {
        let _ = env_logger::builder().is_test(true).try_init();
        let pipeline = ExportPipeline::new(GatedEngine::default());
        let cv = sample();

        let first = pipeline.export_pdf(&cv, &BasicTheme);
        tokio::pin!(first);
        tokio::select! {
            biased;
            _ = &mut first => panic!("export finished before the gate opened"),
            _ = tokio::task::yield_now() => {}
        }
        assert!(pipeline.is_generating());

        let second = pipeline.export_pdf(&cv, &BasicTheme).await;
        assert!(matches!(second, Err(ExportError::Busy)));

        pipeline.engine().gate.notify_one();
        let file = first.await.unwrap();
        assert_eq!(file.filename, "cv-alex-rivera.pdf");
        assert_eq!(file.bytes, b"%PDF-gated");
        assert!(!pipeline.is_generating());
        assert_eq!(pipeline.engine().titles.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn engine_receives_theme_print_tree() {
        let pipeline = ExportPipeline::new(GatedEngine::default());
        let cv = sample();
        pipeline.engine().gate.notify_one();
        let exported = pipeline.export_pdf(&cv, &BasicTheme).await;
        assert!(exported.is_ok());
        assert_eq!(
            *pipeline.engine().titles.lock().unwrap(),
            vec!["Alex Rivera".to_string()]
        );
    }

    #[tokio::test]
    async fn failure_clears_busy_flag() {
        let _ = env_logger::builder().is_test(true).try_init();
        let pipeline = ExportPipeline::new(FailingEngine::default());
        let cv = sample();

        let err = pipeline.export_pdf(&cv, &BasicTheme).await.unwrap_err();
        assert!(matches!(err, ExportError::Engine(EngineError::Failed(_))));
        assert!(!pipeline.is_generating());

        let again = pipeline.export_pdf(&cv, &BasicTheme).await.unwrap_err();
        assert!(matches!(again, ExportError::Engine(_)));
        assert_eq!(pipeline.engine().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn abandoned_export_clears_busy_flag() {
        let pipeline = ExportPipeline::new(GatedEngine::default());
        let cv = sample();
        {
            let first = pipeline.export_pdf(&cv, &BasicTheme);
            tokio::pin!(first);
            tokio::select! {
                biased;
                _ = &mut first => panic!("export finished before the gate opened"),
                _ = tokio::task::yield_now() => {}
            }
            assert!(pipeline.is_generating());
        }
        assert!(!pipeline.is_generating());
    }
}
