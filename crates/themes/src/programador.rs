//! "Programador": a dark, monospaced page in the style of a code editor.
//! Sections are numbered and skills sit two to a row.

use crate::common::*;
use vitae_idf::builders::{Block, Image, NodeBuilder, Paragraph, Row};
use vitae_idf::{Element, PreviewDocument, PreviewNode, PrintDocument, el};
use vitae_model::{CvDocument, SectionKind, Skill};
use vitae_style::{Dimension, Margins, PageSize, Stylesheet};
use vitae_text::{Locale, flatten_all, format_date_range};
use vitae_theme::{Theme, plan_sections, skill_tags};
use vitae_types::Color;

const BACKGROUND: Color = Color::rgb(30, 30, 46);
const BORDER: Color = Color::rgb(61, 61, 92);
const PRIMARY: Color = Color::rgb(137, 180, 250);
const MUTED: Color = Color::rgb(108, 112, 134);
const ACCENT: Color = Color::rgb(245, 194, 231);
const GREEN: Color = Color::rgb(166, 227, 161);
const YELLOW: Color = Color::rgb(249, 226, 175);
const TEXT: Color = Color::rgb(205, 214, 244);
const TEXT_DIM: Color = Color::rgb(147, 153, 178);

const PHOTO_SIZE: f32 = 92.0;
const LOCALE: Locale = Locale::SPANISH.with_separator(" \u{2192} ");

#[derive(Debug, Default, Clone, Copy)]
pub struct ProgramadorTheme;

fn stylesheet() -> Stylesheet {
    Stylesheet::new()
        .define(
            "header",
            style()
                .border_bottom(1.0, BORDER)
                .padding(below(14.0))
                .margin(below(18.0)),
        )
        .define("photo-cell", style().padding(Margins::new(0.0, 16.0, 0.0, 0.0)))
        .define("comment", style().size(9.0).color(MUTED).margin(below(4.0)))
        .define("name", style().size(26.0).bold().color(PRIMARY).margin(below(4.0)))
        .define("role", style().size(12.0).color(ACCENT).margin(below(8.0)))
        .define("contact", style().size(8.5).color(TEXT_DIM).margin(below(2.0)))
        .define("section", style().margin(below(14.0)))
        .define(
            "section-title",
            style().size(13.0).bold().color(PRIMARY).margin(below(8.0)),
        )
        .define("section-number", style().color(MUTED))
        .define("summary", style().size(9.5).line_height(1.6).color(TEXT).margin(below(6.0)))
        .define(
            "entry",
            style()
                .border_left(2.0, BORDER)
                .padding(Margins::new(0.0, 0.0, 0.0, 12.0))
                .margin(below(12.0)),
        )
        .define("entry-header", style().margin(below(2.0)))
        .define("entry-title", style().size(11.0).bold().color(TEXT))
        .define("entry-dates", style().size(8.5).color(YELLOW))
        .define("entry-subtitle", style().size(9.5).color(GREEN).margin(below(4.0)))
        .define("entry-location", style().size(8.5).color(TEXT_DIM))
        .define(
            "achievement",
            style().size(9.0).line_height(1.5).color(TEXT_DIM).margin(below(2.0)),
        )
        .define(
            "skill",
            style()
                .background(Color::rgb(36, 36, 56))
                .border_left(2.0, ACCENT)
                .padding(Margins::symmetric(6.0, 10.0))
                .margin(Margins::new(0.0, 6.0, 6.0, 0.0)),
        )
        .define("skill-title", style().size(9.5).bold().color(ACCENT).margin(below(3.0)))
        .define("skill-details", style().size(8.5).color(TEXT))
        .define("project-description", style().size(9.0).color(TEXT).margin(around(2.0, 2.0)))
        .define("project-tech", style().size(8.5).color(YELLOW))
        .define("project-link", style().size(8.5).color(PRIMARY))
}

const PREVIEW_CSS: &str = "\
.cv { font-family: 'JetBrains Mono', 'Fira Code', Courier, monospace; background: #1e1e2e; padding: 28pt; }
.cv .header-row { display: flex; align-items: center; }
.cv .photo { width: 92pt; height: 92pt; object-fit: cover; border-radius: 8pt; margin-right: 16pt; }
.cv .entry-header { display: flex; justify-content: space-between; }
.cv .skills-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 6pt; }
";

fn dates(start: &str, end: &str, current: bool) -> String {
    format_date_range(start, end, current, &LOCALE)
}

fn numbered(position: usize) -> String {
    format!("{:02}. ", position + 1)
}

fn stack(list: &[String]) -> Option<String> {
    (!list.is_empty()).then(|| format!("Stack: {}", list.join(" \u{2022} ")))
}

fn skill_line(skill: &Skill) -> String {
    skill_tags(skill).join(" \u{00b7} ")
}

impl ProgramadorTheme {
    fn header_preview(&self, cv: &CvDocument) -> Element {
        let info = &cv.basic_info;
        el("header").class("header").section(BASIC_INFO).child(
            el("div")
                .class("header-row")
                .child_opt(photo_src(info).map(|src| {
                    el("img").class("photo").attr("src", src).attr("alt", info.name.as_str())
                }))
                .child(
                    el("div")
                        .class("header-info")
                        .child(el("div").class("comment").text("// Perfil profesional"))
                        .child(el("h1").class("name").text(info.name.as_str()))
                        .child(el("div").class("role").text(info.role.as_str()))
                        .children(
                            contact_items(info)
                                .into_iter()
                                .map(|item| el("div").class("contact").text(item)),
                        ),
                ),
        )
    }

    fn section_preview(&self, cv: &CvDocument, kind: SectionKind, position: usize) -> Element {
        let section = el("section").class("section").section(kind.as_str()).child(
            el("h2")
                .class("section-title")
                .child(el("span").class("section-number").text(numbered(position)))
                .text(section_title(cv, kind)),
        );
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
                    .child(el("div").class("entry-subtitle").text(format!("@ {}", exp.company)))
                    .children(exp.achievements.iter().map(|a| {
                        el("div")
                            .class("achievement")
                            .text("\u{2192} ")
                            .child(PreviewNode::rich_text(a))
                    }))
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
                    .child(el("div").class("entry-subtitle").text(format!("@ {}", edu.institute)))
                    .child_opt(
                        (!edu.location.trim().is_empty())
                            .then(|| el("div").class("entry-location").text(edu.location.as_str())),
                    )
            })),
            SectionKind::Skills => section.child(el("div").class("skills-grid").children(
                cv.skills.iter().map(|skill| {
                    el("div")
                        .class("skill")
                        .child(el("div").class("skill-title").text(skill.title.as_str()))
                        .child(el("div").class("skill-details").text(skill_line(skill)))
                }),
            )),
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
                        stack(&project.technologies)
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

    fn header_print(&self, cv: &CvDocument) -> Block {
        let info = &cv.basic_info;
        let details = Block::new()
            .child(Paragraph::new("// Perfil profesional").style_name("comment"))
            .child(Paragraph::new(info.name.as_str()).style_name("name"))
            .child(Paragraph::new(info.role.as_str()).style_name("role"))
            .children(
                contact_items(info)
                    .into_iter()
                    .map(|item| Paragraph::new(item).style_name("contact")),
            );
        let row = match photo_src(info) {
            Some(src) => Row::new().cell_with(
                Dimension::Pt(PHOTO_SIZE + 16.0),
                Block::new()
                    .style_name("photo-cell")
                    .child(Image::new(src, PHOTO_SIZE, PHOTO_SIZE)),
            ),
            None => Row::new(),
        };
        Block::new()
            .section(BASIC_INFO)
            .style_name("header")
            .child(row.cell(Dimension::Auto, details))
    }

    fn skills_print(&self, cv: &CvDocument) -> Vec<Row> {
        cv.skills
            .chunks(2)
            .map(|pair| {
                pair.iter().fold(Row::new(), |row, skill| {
                    row.cell_with(
                        Dimension::Percent(50.0),
                        Block::new()
                            .id(&skill.id)
                            .style_name("skill")
                            .child(Paragraph::new(skill.title.as_str()).style_name("skill-title"))
                            .child(Paragraph::new(skill_line(skill)).style_name("skill-details")),
                    )
                })
            })
            .collect()
    }

    fn section_print(&self, cv: &CvDocument, kind: SectionKind, position: usize) -> Block {
        let section = print_section(
            kind,
            Paragraph::empty()
                .span(numbered(position), "section-number")
                .text(section_title(cv, kind))
                .style_name("section-title"),
        );
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
                        62.0,
                    ))
                    .child(
                        Paragraph::new(format!("@ {}", exp.company)).style_name("entry-subtitle"),
                    )
                    .children(flatten_all(&exp.achievements).iter().map(|a| {
                        Paragraph::empty()
                            .multiline(&format!("\u{2192} {}", a))
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
                        62.0,
                    ))
                    .child(
                        Paragraph::new(format!("@ {}", edu.institute))
                            .style_name("entry-subtitle"),
                    )
                    .child_opt((!edu.location.trim().is_empty()).then(|| {
                        Paragraph::new(edu.location.as_str()).style_name("entry-location")
                    }))
            })),
            SectionKind::Skills => section.children(self.skills_print(cv)),
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
                        stack(&project.technologies)
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

impl Theme for ProgramadorTheme {
    fn id(&self) -> &str {
        "programador"
    }

    fn name(&self) -> &str {
        "Programador"
    }

    fn render_preview(&self, cv: &CvDocument) -> PreviewDocument {
        let root = el("div")
            .class("cv")
            .class("programador")
            .child(self.header_preview(cv))
            .children(
                plan_sections(cv)
                    .into_iter()
                    .enumerate()
                    .map(|(i, kind)| self.section_preview(cv, kind, i)),
            );
        preview_document(cv, stylesheet(), PREVIEW_CSS, root)
    }

    fn render_print(&self, cv: &CvDocument) -> PrintDocument {
        let mut children = vec![self.header_print(cv).build()];
        children.extend(
            plan_sections(cv)
                .into_iter()
                .enumerate()
                .map(|(i, kind)| self.section_print(cv, kind, i).build()),
        );
        PrintDocument {
            title: cv.basic_info.name.clone(),
            page_size: PageSize::A4,
            margins: Margins::all(28.0),
            background: Some(BACKGROUND),
            decorations: Vec::new(),
            base_style: style().font("Courier").size(9.5).color(TEXT),
            stylesheet: stylesheet(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_idf::PrintNode;

    #[test]
    fn sections_are_numbered_by_position() {
        let mut cv = CvDocument::sample().unwrap();
        cv.section_config.visibility.summary = false;
        let preview = ProgramadorTheme.render_preview(&cv);
        let titles = preview.root.find_class("section-number");
        let numbers: Vec<String> = titles
            .iter()
            .map(|e| PreviewNode::Element((*e).clone()).text_content())
            .collect();
        assert_eq!(numbers.first().map(String::as_str), Some("01. "));
        assert_eq!(numbers.len(), 4);
    }

    #[test]
    fn skills_sit_two_per_row() {
        let cv = CvDocument::sample().unwrap();
        let rows = ProgramadorTheme.skills_print(&cv);
        assert_eq!(rows.len(), cv.skills.len().div_ceil(2));
        let PrintNode::Row { cells, .. } = rows.into_iter().next().unwrap().build() else {
            panic!("expected a row");
        };
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn achievements_use_arrows() {
        let cv = CvDocument::sample().unwrap();
        let print = ProgramadorTheme.render_print(&cv);
        assert!(
            print
                .text_runs()
                .iter()
                .any(|run| run.starts_with("\u{2192} "))
        );
    }
}
