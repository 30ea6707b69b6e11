use vitae_model::{CvDocument, SectionKind, Skill};
use vitae_text::split_tags;

/// The body sections a theme renders, in order: the configured order,
/// filtered by visibility, minus sections with nothing to show.
pub fn plan_sections(cv: &CvDocument) -> Vec<SectionKind> {
    cv.section_config
        .rendered_sections()
        .into_iter()
        .filter(|kind| {
            let keep = has_content(cv, *kind);
            if !keep {
                log::debug!("Omitting empty section '{}'.", kind.as_str());
            }
            keep
        })
        .collect()
}

/// Skills count only through their tags, so details that split to nothing
/// leave the section empty.
fn has_content(cv: &CvDocument, kind: SectionKind) -> bool {
    match kind {
        SectionKind::Skills => cv.skills.iter().any(|skill| !skill_tags(skill).is_empty()),
        _ => cv.has_content(kind),
    }
}

/// A skill's comma-separated details as individual tags.
pub fn skill_tags(skill: &Skill) -> Vec<String> {
    split_tags(&skill.details)
}
