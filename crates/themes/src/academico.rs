//! "Académico": a sober single-column serif layout with ruled section
//! headings and Spanish dates.

use crate::common::*;
use itertools::Itertools;
use vitae_idf::builders::{Block, Image, NodeBuilder, Paragraph, Row, Rule};
use vitae_idf::{Element, PreviewDocument, PreviewNode, PrintDocument, el};
use vitae_model::{CvDocument, SectionKind};
use vitae_style::{Dimension, Margins, PageSize, Stylesheet};
use vitae_text::{Locale, flatten_all, format_date_range};
use vitae_theme::{Theme, plan_sections};
use vitae_types::Color;

const INK: Color = Color::BLACK;
const GREY: Color = Color::rgb(68, 68, 68);
const PHOTO_SIZE: f32 = 85.0;
const LOCALE: Locale = Locale::SPANISH;

#[derive(Debug, Default, Clone, Copy)]
pub struct AcademicoTheme;

fn stylesheet() -> Stylesheet {
    Stylesheet::new()
        .define("header", style().margin(below(18.0)))
        .define("photo-cell", style().padding(Margins::new(0.0, 14.0, 0.0, 0.0)))
        .define("name", style().size(24.0).bold().color(INK).margin(below(4.0)))
        .define("role", style().size(14.0).italic().color(GREY).margin(below(6.0)))
        .define("contact", style().size(10.0).color(GREY).margin(below(2.0)))
        .define("section", style().margin(below(10.0)))
        .define(
            "section-title",
            style().size(14.0).bold().color(INK).uppercase().margin(around(8.0, 3.0)),
        )
        .define("rule", style().color(INK).margin(below(8.0)))
        .define("summary", style().size(11.0).line_height(1.45).margin(below(6.0)))
        .define("entry", style().margin(below(10.0)))
        .define("entry-header", style().margin(below(1.0)))
        .define("entry-title", style().size(12.0).bold().color(INK))
        .define("entry-dates", style().size(10.0).color(GREY))
        .define("entry-subtitle", style().size(11.0).italic().color(GREY).margin(below(3.0)))
        .define(
            "achievement",
            style()
                .size(10.5)
                .line_height(1.4)
                .padding(Margins::new(0.0, 0.0, 0.0, 12.0))
                .margin(below(2.0)),
        )
        .define("skill", style().size(11.0).margin(below(4.0)))
        .define("skill-title", style().bold())
        .define("project-description", style().size(10.5).margin(around(2.0, 2.0)))
        .define("project-tech", style().size(10.0).italic().color(GREY))
        .define("project-link", style().size(10.0).color(Color::rgb(0, 0, 170)))
}

const PREVIEW_CSS: &str = "\
.cv { font-family: 'Times New Roman', Times, serif; background: #ffffff; padding: 36pt; }
.cv .header { display: flex; align-items: flex-start; }
.cv .photo { width: 85pt; height: 85pt; object-fit: cover; margin-right: 14pt; }
.cv .entry-header { display: flex; justify-content: space-between; }
.cv .rule { border: 0; border-top: 0.75pt solid #000000; }
";

fn dates(start: &str, end: &str, current: bool) -> String {
    format_date_range(start, end, current, &LOCALE)
}

/// Contact fields on two lines: email and phone, then everything else.
fn contact_lines(cv: &CvDocument) -> Vec<String> {
    let items = contact_items(&cv.basic_info);
    let (first, rest) = items.split_at(items.len().min(2));
    [first, rest]
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.join(" | "))
        .collect()
}

fn institute_line(institute: &str, location: &str) -> String {
    [institute.trim(), location.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .join(", ")
}

fn technologies(list: &[String]) -> Option<String> {
    (!list.is_empty()).then(|| format!("Tecnologías: {}", list.join(", ")))
}

impl AcademicoTheme {
    fn header_preview(&self, cv: &CvDocument) -> Element {
        let info = &cv.basic_info;
        el("header")
            .class("header")
            .section(BASIC_INFO)
            .child_opt(photo_src(info).map(|src| {
                el("img").class("photo").attr("src", src).attr("alt", info.name.as_str())
            }))
            .child(
                el("div")
                    .class("header-info")
                    .child(el("h1").class("name").text(info.name.as_str()))
                    .child(el("div").class("role").text(info.role.as_str()))
                    .children(
                        contact_lines(cv)
                            .into_iter()
                            .map(|line| el("div").class("contact").text(line)),
                    ),
            )
    }

    fn section_preview(&self, cv: &CvDocument, kind: SectionKind) -> Element {
        let section = el("section")
            .class("section")
            .section(kind.as_str())
            .child(el("h2").class("section-title").text(section_title(cv, kind)))
            .child(el("hr").class("rule"));
        match kind {
            SectionKind::Summary => section.child(
                el("div")
                    .class("summary")
                    .child(PreviewNode::rich_text(&cv.summary.content)),
            ),
            SectionKind::Experiences => section.children(cv.experiences.iter().map(|exp| {
                el("div")
                    .class("entry")
                    .child(dated_row_preview(
                        &exp.role,
                        "entry-title",
                        dates(&exp.start_date, &exp.end_date, exp.current),
                        "entry-dates",
                    ))
                    .child(el("div").class("entry-subtitle").text(exp.company.as_str()))
                    .child(
                        el("ul").children(exp.achievements.iter().map(|a| {
                            el("li").class("achievement").child(PreviewNode::rich_text(a))
                        })),
                    )
            })),
            SectionKind::Education => section.children(cv.education.iter().map(|edu| {
                el("div")
                    .class("entry")
                    .child(dated_row_preview(
                        &edu.degree,
                        "entry-title",
                        dates(&edu.start_date, &edu.end_date, edu.current),
                        "entry-dates",
                    ))
                    .child(
                        el("div")
                            .class("entry-subtitle")
                            .text(institute_line(&edu.institute, &edu.location)),
                    )
            })),
            SectionKind::Skills => section.children(cv.skills.iter().map(|skill| {
                el("div")
                    .class("skill")
                    .child(el("strong").class("skill-title").text(format!("{}: ", skill.title)))
                    .child(el("span").text(skill.details.as_str()))
            })),
            SectionKind::Projects => section.children(cv.projects.iter().map(|project| {
                el("div")
                    .class("entry")
                    .child(el("div").class("entry-title").text(project.name.as_str()))
                    .child_opt((!project.description.trim().is_empty()).then(|| {
                        el("div")
                            .class("project-description")
                            .text(project.description.as_str())
                    }))
                    .child_opt(
                        technologies(&project.technologies)
                            .map(|t| el("div").class("project-tech").text(t)),
                    )
                    .children(
                        [project.url.as_deref(), project.github.as_deref()]
                            .into_iter()
                            .flatten()
                            .map(|url| link_preview(url, url, "project-link")),
                    )
            })),
        }
    }

    fn header_print(&self, cv: &CvDocument) -> Row {
        let info = &cv.basic_info;
        let details = Block::new()
            .child(Paragraph::new(info.name.as_str()).style_name("name"))
            .child(Paragraph::new(info.role.as_str()).style_name("role"))
            .children(
                contact_lines(cv)
                    .into_iter()
                    .map(|line| Paragraph::new(line).style_name("contact")),
            );
        let row = Row::new().style_name("header");
        let row = match photo_src(info) {
            Some(src) => row.cell_with(
                Dimension::Pt(PHOTO_SIZE + 14.0),
                Block::new()
                    .style_name("photo-cell")
                    .child(Image::new(src, PHOTO_SIZE, PHOTO_SIZE)),
            ),
            None => row,
        };
        row.cell(Dimension::Auto, details)
    }

    fn section_print(&self, cv: &CvDocument, kind: SectionKind) -> Block {
        let section = print_section(
            kind,
            Paragraph::new(section_title(cv, kind)).style_name("section-title"),
        )
        .child(Rule::new().style_name("rule"));
        match kind {
            SectionKind::Summary => section.children(
                plain_paragraphs(&cv.summary.content)
                    .iter()
                    .map(|p| Paragraph::empty().multiline(p).style_name("summary")),
            ),
            SectionKind::Experiences => section.children(cv.experiences.iter().map(|exp| {
                Block::new()
                    .id(&exp.id)
                    .style_name("entry")
                    .keep_together()
                    .child(dated_row(
                        &exp.role,
                        "entry-title",
                        dates(&exp.start_date, &exp.end_date, exp.current),
                        "entry-dates",
                        70.0,
                    ))
                    .child(Paragraph::new(exp.company.as_str()).style_name("entry-subtitle"))
                    .children(flatten_all(&exp.achievements).iter().map(|a| {
                        Paragraph::empty()
                            .multiline(&format!("\u{2022} {}", a))
                            .style_name("achievement")
                    }))
            })),
            SectionKind::Education => section.children(cv.education.iter().map(|edu| {
                Block::new()
                    .id(&edu.id)
                    .style_name("entry")
                    .keep_together()
                    .child(dated_row(
                        &edu.degree,
                        "entry-title",
                        dates(&edu.start_date, &edu.end_date, edu.current),
                        "entry-dates",
                        70.0,
                    ))
                    .child(
                        Paragraph::new(institute_line(&edu.institute, &edu.location))
                            .style_name("entry-subtitle"),
                    )
            })),
            SectionKind::Skills => section.children(cv.skills.iter().map(|skill| {
                Paragraph::empty()
                    .id(&skill.id)
                    .span(format!("{}: ", skill.title), "skill-title")
                    .text(skill.details.as_str())
                    .style_name("skill")
            })),
            SectionKind::Projects => section.children(cv.projects.iter().map(|project| {
                Block::new()
                    .id(&project.id)
                    .style_name("entry")
                    .keep_together()
                    .child(Paragraph::new(project.name.as_str()).style_name("entry-title"))
                    .child_opt((!project.description.trim().is_empty()).then(|| {
                        Paragraph::new(project.description.as_str())
                            .style_name("project-description")
                    }))
                    .child_opt(
                        technologies(&project.technologies)
                            .map(|t| Paragraph::new(t).style_name("project-tech")),
                    )
                    .children(
                        [project.url.as_deref(), project.github.as_deref()]
                            .into_iter()
                            .flatten()
                            .map(|url| link_print(url, url, "project-link")),
                    )
            })),
        }
    }
}

impl Theme for AcademicoTheme {
    fn id(&self) -> &str {
        "academico"
    }

    fn name(&self) -> &str {
        "Académico"
    }

    fn render_preview(&self, cv: &CvDocument) -> PreviewDocument {
        let root = el("div")
            .class("cv")
            .class("academico")
            .child(self.header_preview(cv))
            .children(plan_sections(cv).into_iter().map(|kind| self.section_preview(cv, kind)));
        preview_document(cv, stylesheet(), PREVIEW_CSS, root)
    }

    fn render_print(&self, cv: &CvDocument) -> PrintDocument {
        let header = Block::new().section(BASIC_INFO).child(self.header_print(cv));
        let mut children = vec![header.build()];
        children.extend(
            plan_sections(cv)
                .into_iter()
                .map(|kind| self.section_print(cv, kind).build()),
        );
        PrintDocument {
            title: cv.basic_info.name.clone(),
            page_size: PageSize::A4,
            margins: Margins::all(36.0),
            background: Some(Color::WHITE),
            decorations: Vec::new(),
            base_style: style().font("Times").size(11.0).color(INK),
            stylesheet: stylesheet(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacts_split_over_two_lines() {
        let mut cv = CvDocument::sample().unwrap();
        cv.basic_info.email = "a@b.c".into();
        cv.basic_info.phone = "123".into();
        cv.basic_info.location = "Madrid".into();
        cv.basic_info.website = String::new();
        cv.basic_info.github = String::new();
        cv.basic_info.linkedin = String::new();
        assert_eq!(contact_lines(&cv), vec!["a@b.c | 123", "Madrid"]);

        cv.basic_info.location = String::new();
        assert_eq!(contact_lines(&cv), vec!["a@b.c | 123"]);
    }

    #[test]
    fn institute_joins_location() {
        assert_eq!(institute_line("UCM", "Madrid"), "UCM, Madrid");
        assert_eq!(institute_line("UCM", " "), "UCM");
    }
}
