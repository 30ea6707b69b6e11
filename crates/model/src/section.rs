//! Section identifiers and the display configuration shared by all themes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The five orderable body sections. `basicInfo` is not one of them: it is
/// always rendered first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Summary,
    Experiences,
    Education,
    Skills,
    Projects,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Summary,
        SectionKind::Experiences,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experiences => "experiences",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        SectionKind::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// Heading used when the configured title is blank.
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Experiences => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
        }
    }
}

/// One entry of `sectionConfig.order`. Entries that do not name a known
/// section are kept so they round-trip, and are skipped when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionKey {
    Known(SectionKind),
    Other(Value),
}

impl SectionKey {
    pub fn kind(&self) -> Option<SectionKind> {
        match self {
            SectionKey::Known(kind) => Some(*kind),
            SectionKey::Other(_) => None,
        }
    }
}

impl From<SectionKind> for SectionKey {
    fn from(kind: SectionKind) -> Self {
        SectionKey::Known(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionVisibility {
    #[serde(default)]
    pub basic_info: bool,
    #[serde(default)]
    pub summary: bool,
    #[serde(default)]
    pub experiences: bool,
    #[serde(default)]
    pub education: bool,
    #[serde(default)]
    pub skills: bool,
    #[serde(default)]
    pub projects: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            basic_info: true,
            summary: true,
            experiences: true,
            education: true,
            skills: true,
            projects: true,
        }
    }
}

impl SectionVisibility {
    pub fn is_visible(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Summary => self.summary,
            SectionKind::Experiences => self.experiences,
            SectionKind::Education => self.education,
            SectionKind::Skills => self.skills,
            SectionKind::Projects => self.projects,
        }
    }

    pub fn set(&mut self, kind: SectionKind, visible: bool) {
        match kind {
            SectionKind::Summary => self.summary = visible,
            SectionKind::Experiences => self.experiences = visible,
            SectionKind::Education => self.education = visible,
            SectionKind::Skills => self.skills = visible,
            SectionKind::Projects => self.projects = visible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionTitles {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experiences: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub projects: String,
}

impl SectionTitles {
    /// The configured heading, or the section's default when blank.
    pub fn get(&self, kind: SectionKind) -> &str {
        let title = match kind {
            SectionKind::Summary => &self.summary,
            SectionKind::Experiences => &self.experiences,
            SectionKind::Education => &self.education,
            SectionKind::Skills => &self.skills,
            SectionKind::Projects => &self.projects,
        };
        if title.trim().is_empty() {
            kind.default_title()
        } else {
            title
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub visibility: SectionVisibility,
    pub titles: SectionTitles,
    pub order: Vec<SectionKey>,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            visibility: SectionVisibility::default(),
            titles: SectionTitles::default(),
            order: SectionKind::ALL.into_iter().map(SectionKey::Known).collect(),
        }
    }
}

impl SectionConfig {
    /// Removes repeated `order` entries, keeping the first occurrence.
    /// Returns how many entries were dropped.
    pub fn normalize_order(&mut self) -> usize {
        let before = self.order.len();
        let mut seen: Vec<SectionKey> = Vec::with_capacity(before);
        for key in self.order.drain(..) {
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        self.order = seen;
        before - self.order.len()
    }

    /// Known, visible sections in `order`, each at most once. Sections
    /// missing from `order` are never rendered.
    pub fn rendered_sections(&self) -> Vec<SectionKind> {
        let mut out: Vec<SectionKind> = Vec::new();
        for key in &self.order {
            match key.kind() {
                Some(kind) if self.visibility.is_visible(kind) && !out.contains(&kind) => {
                    out.push(kind)
                }
                Some(_) => {}
                None => log::debug!("Ignoring unknown section in order: {:?}", key),
            }
        }
        out
    }
}
