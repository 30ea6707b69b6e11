use crate::Theme;
use indexmap::IndexMap;
use std::sync::Arc;

/// Themes by id, in registration order.
#[derive(Default, Clone)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Arc<dyn Theme>>,
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.themes.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a theme. Registering an id again replaces the earlier theme but
    /// keeps its position in [`all`](Self::all).
    pub fn register(&mut self, theme: Arc<dyn Theme>) {
        let id = theme.id().to_string();
        if let Some(previous) = self.themes.insert(id.clone(), theme) {
            log::warn!(
                "Theme '{}' was registered twice; replacing '{}'.",
                id,
                previous.name()
            );
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Theme>> {
        self.themes.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    pub fn all(&self) -> Vec<Arc<dyn Theme>> {
        self.themes.values().cloned().collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// `preferred` if registered, otherwise `fallback`.
    pub fn resolve(&self, preferred: &str, fallback: &str) -> Option<Arc<dyn Theme>> {
        self.get(preferred).or_else(|| {
            log::warn!(
                "Theme '{}' is not registered, falling back to '{}'.",
                preferred,
                fallback
            );
            self.get(fallback)
        })
    }
}
