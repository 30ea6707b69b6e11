//! "Moderno": soft blue-grey page with decorative circles, a centred
//! header, white section cards and a single skills cloud.

use crate::common::*;
use vitae_idf::builders::{Block, Image, NodeBuilder, Paragraph, Tags};
use vitae_idf::{Decoration, Element, PreviewDocument, PreviewNode, PrintDocument, el};
use vitae_model::{CvDocument, SectionKind};
use vitae_style::{Margins, PageSize, Stylesheet, TextAlign};
use vitae_text::{Locale, flatten_all, format_date_range};
use vitae_theme::{Theme, plan_sections, skill_tags};
use vitae_types::Color;

const BACKGROUND: Color = Color::rgb(241, 244, 247);
const PRIMARY: Color = Color::rgb(62, 95, 138);
const PRIMARY_DARK: Color = Color::rgb(47, 79, 124);
const ACCENT: Color = Color::rgb(110, 160, 216);
const TEXT: Color = Color::rgb(74, 74, 74);
const TEXT_LIGHT: Color = Color::rgb(107, 123, 138);

const PHOTO_SIZE: f32 = 110.0;
const LOCALE: Locale = Locale::SPANISH;

#[derive(Debug, Default, Clone, Copy)]
pub struct ModernoTheme;

/// The three background circles, blended into the page colour since the
/// renderer paints opaque fills.
fn decorations() -> Vec<Decoration> {
    let circle = |cx: f32, cy: f32, radius: f32, color: Color, opacity: f32| Decoration::Circle {
        cx,
        cy,
        radius,
        color: BACKGROUND.mix(&color, opacity),
    };
    vec![
        circle(A4_WIDTH - 60.0, 60.0, 140.0, Color::rgb(79, 123, 184), 0.35),
        circle(A4_WIDTH + 10.0, 70.0, 110.0, Color::rgb(143, 180, 227), 0.25),
        circle(50.0, A4_HEIGHT - 50.0, 150.0, ACCENT, 0.18),
    ]
}

fn stylesheet() -> Stylesheet {
    let centred = || style().align(TextAlign::Center);
    Stylesheet::new()
        .define("header", centred().margin(below(22.0)))
        .define("photo", centred().margin(below(14.0)))
        .define(
            "name",
            centred().size(36.0).bold().uppercase().color(PRIMARY_DARK).margin(below(6.0)),
        )
        .define("role", centred().size(14.0).color(PRIMARY).margin(below(10.0)))
        .define("contact", centred().size(9.5).color(TEXT_LIGHT))
        .define(
            "section",
            style()
                .background(Color::WHITE)
                .radius(8.0)
                .padding(Margins::symmetric(16.0, 20.0))
                .margin(below(16.0)),
        )
        .define(
            "section-title",
            style()
                .size(15.0)
                .bold()
                .uppercase()
                .color(PRIMARY)
                .border_bottom(1.5, ACCENT)
                .padding(below(5.0))
                .margin(below(10.0)),
        )
        .define(
            "summary",
            centred().size(10.5).line_height(1.6).color(TEXT).margin(below(6.0)),
        )
        .define("entry", style().margin(below(12.0)))
        .define("entry-header", style().margin(below(2.0)))
        .define("entry-title", style().size(12.0).bold().color(PRIMARY_DARK))
        .define("entry-dates", style().size(9.0).color(TEXT_LIGHT))
        .define("entry-subtitle", style().size(10.5).color(PRIMARY).margin(below(4.0)))
        .define("entry-location", style().size(9.0).italic().color(TEXT_LIGHT))
        .define(
            "achievement",
            style()
                .size(9.5)
                .line_height(1.5)
                .color(TEXT)
                .padding(Margins::new(0.0, 0.0, 0.0, 10.0))
                .margin(below(2.0)),
        )
        .define(
            "tag",
            centred()
                .size(9.0)
                .color(PRIMARY)
                .background(BACKGROUND)
                .padding(Margins::symmetric(4.0, 10.0))
                .radius(10.0),
        )
        .define("project-description", style().size(9.5).color(TEXT).margin(around(2.0, 2.0)))
        .define("project-tech", style().size(9.0).italic().color(TEXT_LIGHT))
        .define("project-link", style().size(9.0).color(ACCENT))
}

const PREVIEW_CSS: &str = "\
.cv { font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; background: #f1f4f7; padding: 40pt; position: relative; overflow: hidden; }
.cv .photo { width: 110pt; height: 110pt; border-radius: 50%; object-fit: cover; display: block; margin-left: auto; margin-right: auto; }
.cv .entry-header { display: flex; justify-content: space-between; }
.cv .tags { display: flex; flex-wrap: wrap; justify-content: center; gap: 6pt; }
.cv .contacts { display: flex; flex-wrap: wrap; justify-content: center; gap: 10pt; }
";

fn dates(start: &str, end: &str, current: bool) -> String {
    format_date_range(start, end, current, &LOCALE)
}

/// Every skill's tags in one list, in skill order.
fn all_tags(cv: &CvDocument) -> Vec<String> {
    cv.skills.iter().flat_map(skill_tags).collect()
}

fn technologies(list: &[String]) -> Option<String> {
    (!list.is_empty()).then(|| format!("Tecnologías: {}", list.join(", ")))
}

impl ModernoTheme {
    fn header_preview(&self, cv: &CvDocument) -> Element {
        let info = &cv.basic_info;
        el("header")
            .class("header")
            .section(BASIC_INFO)
            .child_opt(photo_src(info).map(|src| {
                el("img").class("photo").attr("src", src).attr("alt", info.name.as_str())
            }))
            .child(el("h1").class("name").text(info.name.as_str()))
            .child(el("div").class("role").text(info.role.as_str()))
            .child(
                el("div").class("contacts").children(
                    contact_items(info)
                        .into_iter()
                        .map(|item| el("span").class("contact").text(item)),
                ),
            )
    }

    fn section_preview(&self, cv: &CvDocument, kind: SectionKind) -> Element {
        let section = el("section")
            .class("section")
            .section(kind.as_str())
            .child(el("h2").class("section-title").text(section_title(cv, kind)));
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
                    .children(exp.achievements.iter().map(|a| {
                        el("div").class("achievement").child(PreviewNode::rich_text(a))
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
                    .child(el("div").class("entry-subtitle").text(edu.institute.as_str()))
                    .child_opt(
                        (!edu.location.trim().is_empty())
                            .then(|| el("div").class("entry-location").text(edu.location.as_str())),
                    )
            })),
            SectionKind::Skills => section.child(
                el("div").class("tags").children(
                    all_tags(cv)
                        .into_iter()
                        .map(|t| el("span").class("tag").text(t)),
                ),
            ),
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

    fn header_print(&self, cv: &CvDocument) -> Block {
        let info = &cv.basic_info;
        Block::new()
            .section(BASIC_INFO)
            .style_name("header")
            .child_opt(
                photo_src(info).map(|src| Image::circle(src, PHOTO_SIZE).style_name("photo")),
            )
            .child(Paragraph::new(info.name.as_str()).style_name("name"))
            .child(Paragraph::new(info.role.as_str()).style_name("role"))
            .child(Paragraph::new(contact_items(info).join("   \u{00b7}   ")).style_name("contact"))
    }

    fn section_print(&self, cv: &CvDocument, kind: SectionKind) -> Block {
        let section = print_section(
            kind,
            Paragraph::new(section_title(cv, kind)).style_name("section-title"),
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
                        68.0,
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
                        68.0,
                    ))
                    .child(Paragraph::new(edu.institute.as_str()).style_name("entry-subtitle"))
                    .child_opt((!edu.location.trim().is_empty()).then(|| {
                        Paragraph::new(edu.location.as_str()).style_name("entry-location")
                    }))
            })),
            SectionKind::Skills => section.child(Tags::new(all_tags(cv)).style_name("tag")),
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

impl Theme for ModernoTheme {
    fn id(&self) -> &str {
        "moderno"
    }

    fn name(&self) -> &str {
        "Moderno"
    }

    fn render_preview(&self, cv: &CvDocument) -> PreviewDocument {
        let root = el("div")
            .class("cv")
            .class("moderno")
            .child(self.header_preview(cv))
            .children(plan_sections(cv).into_iter().map(|kind| self.section_preview(cv, kind)));
        preview_document(cv, stylesheet(), PREVIEW_CSS, root)
    }

    fn render_print(&self, cv: &CvDocument) -> PrintDocument {
        let mut children = vec![self.header_print(cv).build()];
        children.extend(
            plan_sections(cv)
                .into_iter()
                .map(|kind| self.section_print(cv, kind).build()),
        );
        PrintDocument {
            title: cv.basic_info.name.clone(),
            page_size: PageSize::A4,
            margins: Margins::all(40.0),
            background: Some(BACKGROUND),
            decorations: decorations(),
            base_style: style().font("Helvetica").size(10.0).color(TEXT),
            stylesheet: stylesheet(),
            children,
        }
    }
}
