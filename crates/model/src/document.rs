//! The CV document: the single source every theme renders from.
//!
//! Field names and declaration order match the JSON file format, so a
//! pretty-printed export diffs cleanly against the file it was imported from.

use crate::error::ModelError;
use crate::section::{SectionConfig, SectionKind};
use crate::validate::validate_report;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub website: String,
    pub phone: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    /// A data URL or an external URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Rich text.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub start_date: String,
    /// Kept as written even while `current` hides it.
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    /// Rich text, one entry per achievement.
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institute: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub title: String,
    /// Free text; themes may split it on commas into tags.
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDocument {
    pub basic_info: BasicInfo,
    pub summary: Summary,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub active_theme: String,
    pub section_config: SectionConfig,
    /// Format version. Optional and ignored by the validator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// An id that occurs more than once within one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub collection: &'static str,
    pub id: String,
}

const SAMPLE_CV: &str = include_str!("../data/default_cv.json");

impl CvDocument {
    /// Validates the shape of untrusted JSON, then converts it. Soft fields
    /// the validator does not require fall back to their defaults.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        validate_report(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The bundled document shown before anything is imported.
    pub fn sample() -> Result<Self, ModelError> {
        Self::from_json_str(SAMPLE_CV)
    }

    /// Whether a section has anything to show. Empty sections are omitted
    /// rather than rendered as a bare heading.
    pub fn has_content(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Summary => !self.summary.content.trim().is_empty(),
            SectionKind::Experiences => !self.experiences.is_empty(),
            SectionKind::Education => !self.education.is_empty(),
            SectionKind::Skills => !self.skills.is_empty(),
            SectionKind::Projects => !self.projects.is_empty(),
        }
    }

    /// Ids repeated within a collection, in the order they repeat.
    pub fn duplicate_ids(&self) -> Vec<DuplicateId> {
        fn scan<'a>(
            collection: &'static str,
            ids: impl Iterator<Item = &'a str>,
            out: &mut Vec<DuplicateId>,
        ) {
            let mut seen: Vec<&str> = Vec::new();
            for id in ids {
                if seen.contains(&id) {
                    out.push(DuplicateId {
                        collection,
                        id: id.to_string(),
                    });
                } else {
                    seen.push(id);
                }
            }
        }

        let mut out = Vec::new();
        scan("experiences", self.experiences.iter().map(|e| e.id.as_str()), &mut out);
        scan("education", self.education.iter().map(|e| e.id.as_str()), &mut out);
        scan("skills", self.skills.iter().map(|s| s.id.as_str()), &mut out);
        scan("projects", self.projects.iter().map(|p| p.id.as_str()), &mut out);
        out
    }
}
