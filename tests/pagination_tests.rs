mod common;

use common::fixtures::*;
use common::{TestResult, export_pdf};
use vitae::builtin_registry;
use vitae_layout::{LaidOutDocument, LayoutConfig, LayoutEngine};

fn page_containing(doc: &LaidOutDocument, needle: &str) -> Option<usize> {
    doc.pages
        .iter()
        .position(|p| p.texts().any(|t| t.content.contains(needle)))
}

#[test]
fn entries_are_not_split_across_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let cv = cv_with_experiences(14, 4);
    let engine = LayoutEngine::new(LayoutConfig::default());
    for theme in builtin_registry().all() {
        let laid_out = engine.paginate(&theme.render_print(&cv))?;
        assert!(laid_out.pages.len() > 1, "{} should need several pages", theme.id());
        for i in 1..=14 {
            let role = page_containing(&laid_out, &format!("Role {:02}", i));
            let last = page_containing(&laid_out, &format!("Closing note {:02}", i));
            assert!(role.is_some(), "{}: Role {:02} missing", theme.id(), i);
            assert_eq!(role, last, "{}: entry {} was split", theme.id(), i);
        }
    }
    Ok(())
}

#[test]
fn long_achievement_flows_across_pages() -> TestResult {
    let cv = cv_with_long_achievement(220);
    let engine = LayoutEngine::new(LayoutConfig::default());
    for theme in builtin_registry().all() {
        let laid_out = engine.paginate(&theme.render_print(&cv))?;
        let first = page_containing(&laid_out, "Step001");
        let last = page_containing(&laid_out, "Step220");
        assert!(first.is_some() && last.is_some(), "{}", theme.id());
        assert!(last > first, "{}: expected the bullet to continue on a later page", theme.id());
    }
    Ok(())
}

#[test]
fn decorations_repeat_on_every_page() -> TestResult {
    let cv = cv_with_experiences(14, 4);
    let theme = builtin_registry().get("basic").ok_or("basic theme")?;
    let pdf = export_pdf(&cv, theme.as_ref())?;
    assert_pdf_min_pages!(pdf, 2);
    for (_, page_id) in pdf.doc.get_pages() {
        let content = pdf.doc.get_page_content(page_id)?;
        let ops = lopdf::content::Content::decode(&content)?.operations;
        assert!(
            ops.iter().any(|op| op.operator == "re"),
            "sidebar rectangle missing on a page"
        );
    }
    Ok(())
}
