//! The application shell: owns the live document and the selected theme,
//! persists every change, and hands exports to a download sink.

use crate::config::VitaeConfig;
use crate::error::ShellError;
use crate::persist::{KEY_DATA, KEY_PHOTO, KEY_THEME, StateStore};
use crate::photo::import_photo;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vitae_export::{ExportPipeline, ExportedFile, PdfEngine, export_json, import_json, import_json_file};
use vitae_idf::PreviewDocument;
use vitae_model::CvDocument;
use vitae_text::escape_html;
use vitae_theme::{Theme, ThemeRegistry};

/// What the preview pane shows.
#[derive(Debug, Clone)]
pub enum PreviewOutcome {
    Rendered(PreviewDocument),
    /// The selected theme is not registered; export is disabled too.
    MissingTheme { id: String },
}

impl PreviewOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, PreviewOutcome::Rendered(_))
    }

    pub fn to_html(&self) -> String {
        match self {
            PreviewOutcome::Rendered(doc) => doc.to_html(),
            PreviewOutcome::MissingTheme { id } => format!(
                "<div class=\"missing-theme\">Theme \u{201c}{}\u{201d} not found.</div>",
                escape_html(id)
            ),
        }
    }
}

/// Where finished downloads go.
pub trait DownloadSink {
    fn deliver(&mut self, file: ExportedFile) -> io::Result<()>;
}

/// Writes downloads into a directory under their suggested names.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, file: ExportedFile) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&file.filename);
        fs::write(&path, &file.bytes)?;
        log::info!("Wrote {}.", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Keeps downloads in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub files: Vec<ExportedFile>,
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, file: ExportedFile) -> io::Result<()> {
        self.files.push(file);
        Ok(())
    }
}

pub struct Shell<E> {
    config: VitaeConfig,
    registry: Arc<ThemeRegistry>,
    store: Arc<dyn StateStore>,
    pipeline: ExportPipeline<E>,
    cv: CvDocument,
    theme_id: String,
}

impl<E: PdfEngine> Shell<E> {
    /// Starts from the persisted state. Stored data that no longer imports
    /// is replaced by the bundled sample.
    pub fn restore(
        config: VitaeConfig,
        registry: Arc<ThemeRegistry>,
        store: Arc<dyn StateStore>,
        engine: E,
    ) -> Result<Self, ShellError> {
        let stored = store
            .get(KEY_DATA)?
            .and_then(|json| match import_json(json.as_bytes()) {
                Ok(cv) => Some(cv),
                Err(e) => {
                    log::warn!("Stored CV is unusable, starting from the sample: {}", e);
                    None
                }
            });
        let mut cv = match stored {
            Some(cv) => cv,
            None => CvDocument::sample()?,
        };
        if let Some(photo) = store.get(KEY_PHOTO)? {
            cv.basic_info.photo = Some(photo);
        }

        let candidate = store
            .get(KEY_THEME)?
            .or_else(|| Some(cv.active_theme.clone()).filter(|id| !id.trim().is_empty()))
            .unwrap_or_else(|| config.default_theme.clone());
        // Keeps the unresolved id when even the default is missing, so the
        // preview can name it.
        let theme_id = match registry.resolve(&candidate, &config.default_theme) {
            Some(theme) => theme.id().to_string(),
            None => candidate,
        };
        cv.active_theme = theme_id.clone();
        log::debug!("Restored session with theme '{}'.", theme_id);

        Ok(Self {
            config,
            registry,
            store,
            pipeline: ExportPipeline::new(engine),
            cv,
            theme_id,
        })
    }

    pub fn document(&self) -> &CvDocument {
        &self.cv
    }

    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn active_theme(&self) -> Option<Arc<dyn Theme>> {
        self.registry.get(&self.theme_id)
    }

    /// Export needs a registered theme and no export in flight.
    pub fn can_export(&self) -> bool {
        self.active_theme().is_some() && !self.pipeline.is_generating()
    }

    pub fn preview(&self) -> PreviewOutcome {
        match self.active_theme() {
            Some(theme) => PreviewOutcome::Rendered(theme.render_preview(&self.cv)),
            None => {
                log::warn!("No theme '{}' to preview with.", self.theme_id);
                PreviewOutcome::MissingTheme {
                    id: self.theme_id.clone(),
                }
            }
        }
    }

    /// Applies an edit and saves the result.
    pub fn update(&mut self, edit: impl FnOnce(&mut CvDocument)) -> Result<(), ShellError> {
        edit(&mut self.cv);
        self.persist()
    }

    /// Selects another theme. Unknown ids are refused and nothing changes.
    pub fn select_theme(&mut self, id: &str) -> Result<(), ShellError> {
        if !self.registry.contains(id) {
            return Err(ShellError::MissingTheme(id.to_string()));
        }
        self.theme_id = id.to_string();
        self.cv.active_theme = self.theme_id.clone();
        self.persist()
    }

    /// Replaces the document with an imported file. On any failure the
    /// current document stays as it was.
    pub fn import_json(&mut self, name: Option<&str>, bytes: &[u8]) -> Result<(), ShellError> {
        let cv = import_json_file(name, bytes, self.config.max_json_bytes)?;
        if self.registry.contains(&cv.active_theme) {
            self.theme_id = cv.active_theme.clone();
        } else {
            log::warn!(
                "Imported theme '{}' is not available; keeping '{}'.",
                cv.active_theme,
                self.theme_id
            );
        }
        self.cv = cv;
        self.cv.active_theme = self.theme_id.clone();
        match &self.cv.basic_info.photo {
            Some(photo) => self.store.set(KEY_PHOTO, photo)?,
            None => self.store.remove(KEY_PHOTO)?,
        }
        log::info!("Imported CV for '{}'.", self.cv.basic_info.name);
        self.persist()
    }

    /// Reads a JSON file from disk and imports it.
    pub fn import_json_path(&mut self, path: &Path) -> Result<(), ShellError> {
        let bytes = fs::read(path).map_err(|source| ShellError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path.file_name().and_then(|n| n.to_str());
        self.import_json(name, &bytes)
    }

    pub fn import_photo(&mut self, bytes: &[u8], mime: &str) -> Result<(), ShellError> {
        let url = import_photo(bytes, mime, self.config.max_photo_bytes)?;
        self.store.set(KEY_PHOTO, &url)?;
        self.cv.basic_info.photo = Some(url);
        self.persist()
    }

    pub fn remove_photo(&mut self) -> Result<(), ShellError> {
        self.store.remove(KEY_PHOTO)?;
        self.cv.basic_info.photo = None;
        self.persist()
    }

    pub async fn export_pdf(&self, sink: &mut dyn DownloadSink) -> Result<(), ShellError> {
        let theme = self
            .active_theme()
            .ok_or_else(|| ShellError::MissingTheme(self.theme_id.clone()))?;
        let file = self.pipeline.export_pdf(&self.cv, theme.as_ref()).await?;
        deliver(sink, file)
    }

    pub fn export_json(&self, sink: &mut dyn DownloadSink) -> Result<(), ShellError> {
        let file = export_json(&self.cv)?;
        deliver(sink, file)
    }

    fn persist(&self) -> Result<(), ShellError> {
        self.store.set(KEY_DATA, &self.cv.to_json_pretty()?)?;
        self.store.set(KEY_THEME, &self.theme_id)?;
        Ok(())
    }
}

fn deliver(sink: &mut dyn DownloadSink, file: ExportedFile) -> Result<(), ShellError> {
    let filename = file.filename.clone();
    sink.deliver(file)
        .map_err(|source| ShellError::Download { filename, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use vitae_export::LopdfEngine;
    use vitae_themes::builtin_registry;

    fn shell_with(store: Arc<dyn StateStore>) -> Shell<LopdfEngine> {
        Shell::restore(
            VitaeConfig::default(),
            Arc::new(builtin_registry()),
            store,
            LopdfEngine::default(),
        )
        .unwrap()
    }

    #[test]
    fn empty_store_starts_from_sample() {
        let shell = shell_with(Arc::new(MemoryStore::new()));
        assert_eq!(shell.document().basic_info.name, "Alex Rivera");
        assert!(shell.preview().is_rendered());
        assert!(shell.can_export());
    }

    #[test]
    fn corrupt_store_falls_back_to_sample() {
        let store = Arc::new(MemoryStore::new());
        store.set(KEY_DATA, "{ not json").unwrap();
        let shell = shell_with(store);
        assert_eq!(shell.document().basic_info.name, "Alex Rivera");
    }

    #[test]
    fn unknown_stored_theme_falls_back_to_default() {
        let store = Arc::new(MemoryStore::new());
        store.set(KEY_THEME, "retro").unwrap();
        let shell = shell_with(store);
        assert_eq!(shell.theme_id(), "basic");
        assert_eq!(shell.document().active_theme, "basic");
        assert!(shell.preview().is_rendered());
        assert!(shell.can_export());
    }

    #[test]
    fn unknown_document_theme_falls_back_to_default() {
        let mut cv = CvDocument::sample().unwrap();
        cv.active_theme = "retro".into();
        let store = Arc::new(MemoryStore::new());
        store.set(KEY_DATA, &cv.to_json_pretty().unwrap()).unwrap();
        let shell = shell_with(store);
        assert_eq!(shell.theme_id(), "basic");
        assert!(shell.can_export());
    }

    #[test]
    fn unresolvable_theme_disables_preview_and_export() {
        let store = Arc::new(MemoryStore::new());
        store.set(KEY_THEME, "retro").unwrap();
        let config = VitaeConfig {
            default_theme: "retro".into(),
            ..Default::default()
        };
        let shell = Shell::restore(
            config,
            Arc::new(builtin_registry()),
            store,
            LopdfEngine::default(),
        )
        .unwrap();
        let preview = shell.preview();
        assert!(matches!(&preview, PreviewOutcome::MissingTheme { id } if id == "retro"));
        assert!(preview.to_html().contains("retro"));
        assert!(!shell.can_export());
    }

    #[test]
    fn select_theme_refuses_unknown_ids() {
        let mut shell = shell_with(Arc::new(MemoryStore::new()));
        assert!(matches!(
            shell.select_theme("retro"),
            Err(ShellError::MissingTheme(_))
        ));
        assert_eq!(shell.theme_id(), "basic");
        shell.select_theme("programador").unwrap();
        assert_eq!(shell.document().active_theme, "programador");
    }

    #[test]
    fn failed_import_leaves_document_alone() {
        let mut shell = shell_with(Arc::new(MemoryStore::new()));
        let before = shell.document().clone();
        assert!(shell.import_json(Some("cv.json"), b"{\"basicInfo\": 1}").is_err());
        assert!(shell.import_json(Some("cv.txt"), b"{}").is_err());
        assert_eq!(shell.document(), &before);
    }

    #[test]
    fn photo_limits_enforced() {
        let mut shell = shell_with(Arc::new(MemoryStore::new()));
        assert!(matches!(
            shell.import_photo(b"%PDF", "application/pdf"),
            Err(ShellError::Photo(_))
        ));
        let big = vec![0u8; 5 * 1024 * 1024 + 1];
        assert!(matches!(
            shell.import_photo(&big, "image/png"),
            Err(ShellError::Photo(_))
        ));
        assert_eq!(shell.document().basic_info.photo, None);
    }

    #[test]
    fn json_export_reaches_sink() {
        let shell = shell_with(Arc::new(MemoryStore::new()));
        let mut sink = MemorySink::default();
        shell.export_json(&mut sink).unwrap();
        assert_eq!(sink.files.len(), 1);
        assert_eq!(sink.files[0].filename, "cv-alex-rivera.json");
    }
}
