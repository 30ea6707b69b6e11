//! The four built-in CV themes.
//!
//! Each theme renders the same document twice: as a preview tree for the
//! on-screen view and as a print tree for pagination. The two trees carry
//! the same section tags in the same order, `basicInfo` first.

mod academico;
mod basic;
mod common;
mod moderno;
mod programador;

pub use academico::AcademicoTheme;
pub use basic::BasicTheme;
pub use moderno::ModernoTheme;
pub use programador::ProgramadorTheme;

use std::sync::Arc;
use vitae_theme::ThemeRegistry;

/// Id of the theme used when nothing else is selected.
pub const DEFAULT_THEME: &str = "basic";

/// A registry holding every built-in theme, in menu order.
pub fn builtin_registry() -> ThemeRegistry {
    let mut registry = ThemeRegistry::new();
    registry.register(Arc::new(BasicTheme));
    registry.register(Arc::new(AcademicoTheme));
    registry.register(Arc::new(ModernoTheme));
    registry.register(Arc::new(ProgramadorTheme));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_idf::PrintNode;
    use vitae_layout::{LayoutConfig, LayoutEngine};
    use vitae_model::{CvDocument, SectionKind};
    use vitae_theme::{Theme, plan_sections};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample() -> CvDocument {
        CvDocument::sample().unwrap()
    }

    fn expected_sections(cv: &CvDocument) -> Vec<&'static str> {
        let mut out = vec!["basicInfo"];
        out.extend(plan_sections(cv).into_iter().map(|k| k.as_str()));
        out
    }

    fn assert_trees_agree(theme: &dyn Theme, cv: &CvDocument) {
        let preview = theme.render_preview(cv);
        let print = theme.render_print(cv);
        let expected = expected_sections(cv);
        assert_eq!(preview.sections(), expected, "preview of {}", theme.id());
        assert_eq!(print.sections(), expected, "print of {}", theme.id());
    }

    #[test]
    fn registry_lists_builtins_in_order() {
        let registry = builtin_registry();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec!["basic", "academico", "moderno", "programador"]);
        assert!(registry.contains(DEFAULT_THEME));
        assert_eq!(
            registry.get("academico").map(|t| t.name().to_string()),
            Some("Académico".to_string())
        );
    }

    #[test]
    fn preview_and_print_sections_agree() {
        init_logger();
        let cv = sample();
        for theme in builtin_registry().all() {
            assert_trees_agree(theme.as_ref(), &cv);
        }
    }

    #[test]
    fn reordered_and_hidden_sections_followed() {
        init_logger();
        let mut cv = sample();
        cv.section_config.order = vec![
            SectionKind::Projects.into(),
            SectionKind::Skills.into(),
            SectionKind::Summary.into(),
            SectionKind::Experiences.into(),
            SectionKind::Education.into(),
        ];
        cv.section_config.visibility.education = false;
        for theme in builtin_registry().all() {
            assert_trees_agree(theme.as_ref(), &cv);
            assert_eq!(
                theme.render_print(&cv).sections(),
                vec!["basicInfo", "projects", "skills", "summary", "experiences"]
            );
        }
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut cv = sample();
        cv.projects.clear();
        cv.summary.content = String::new();
        for skill in &mut cv.skills {
            skill.details = ",  ,".into();
        }
        for theme in builtin_registry().all() {
            let sections = theme.render_preview(&cv).sections().join(",");
            assert!(!sections.contains("projects"), "{}", theme.id());
            assert!(!sections.contains("summary"), "{}", theme.id());
            assert!(!sections.contains("skills"), "{}", theme.id());
            assert_trees_agree(theme.as_ref(), &cv);
        }
    }

    #[test]
    fn photo_only_when_present() {
        let mut cv = sample();
        cv.basic_info.photo = None;
        for theme in builtin_registry().all() {
            assert!(theme.render_print(&cv).image_sources().is_empty());
            assert!(theme.render_preview(&cv).root.find_class("photo").is_empty());
        }

        cv.basic_info.photo = Some("data:image/png;base64,iVBORw0KGgo=".into());
        for theme in builtin_registry().all() {
            assert_eq!(
                theme.render_print(&cv).image_sources(),
                vec!["data:image/png;base64,iVBORw0KGgo="],
                "{}",
                theme.id()
            );
            assert_eq!(theme.render_preview(&cv).root.find_class("photo").len(), 1);
        }
    }

    #[test]
    fn dates_follow_theme_locale() {
        let mut cv = sample();
        cv.experiences.truncate(1);
        cv.experiences[0].start_date = "2020-01".into();
        cv.experiences[0].end_date = "2022-06".into();
        cv.experiences[0].current = false;
        let runs = |theme: &dyn Theme| theme.render_print(&cv).text_runs().join("|");

        assert!(runs(&BasicTheme).contains("Jan 2020 - Jun 2022"));
        assert!(runs(&AcademicoTheme).contains("Ene 2020 \u{2013} Jun 2022"));
        assert!(runs(&ProgramadorTheme).contains("Ene 2020 \u{2192} Jun 2022"));
    }

    #[test]
    fn entries_keep_together() {
        let cv = sample();
        for theme in builtin_registry().all() {
            let print = theme.render_print(&cv);
            let entry = print.find_by_id(&cv.experiences[0].id);
            assert!(
                entry.is_some_and(PrintNode::keep_together),
                "{}",
                theme.id()
            );
        }
    }

    #[test]
    fn preview_html_is_sanitized() {
        let mut cv = sample();
        cv.summary.content = "<p onclick=\"x()\">Hi <script>alert(1)</script><b>there</b></p>".into();
        cv.basic_info.name = "<img src=x onerror=alert(1)>".into();
        for theme in builtin_registry().all() {
            let html = theme.render_preview(&cv).to_html();
            assert!(!html.contains("<script"), "{}", theme.id());
            assert!(!html.contains("onclick"), "{}", theme.id());
            assert!(!html.contains("<img src=x"), "{}", theme.id());
            assert!(html.contains("<strong>there</strong>"), "{}", theme.id());
        }
    }

    #[test]
    fn print_trees_paginate() {
        init_logger();
        let cv = sample();
        let engine = LayoutEngine::new(LayoutConfig::default());
        for theme in builtin_registry().all() {
            let laid_out = engine.paginate(&theme.render_print(&cv)).unwrap();
            assert!(!laid_out.pages.is_empty(), "{}", theme.id());
            let company = laid_out
                .pages
                .iter()
                .flat_map(|p| p.texts())
                .any(|t| t.content.contains("Northwind"));
            assert!(company, "{}", theme.id());
        }
    }
}
