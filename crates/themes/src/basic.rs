//! "Basic": a dark sidebar with the photo and contact details next to a
//! wide main column. English dates.

use crate::common::*;
use itertools::Itertools;
use vitae_idf::builders::{Block, Columns, Image, NodeBuilder, Paragraph, Tags};
use vitae_idf::{Decoration, Element, PreviewDocument, PreviewNode, PrintDocument, el};
use vitae_model::{CvDocument, SectionKind};
use vitae_style::{Dimension, FontWeight, Margins, PageSize, Stylesheet};
use vitae_text::{Locale, flatten_all, format_date_range};
use vitae_theme::{Theme, plan_sections, skill_tags};
use vitae_types::{Color, Rect};

const SIDEBAR: Color = Color::rgb(30, 41, 59);
const SIDEBAR_NAME: Color = Color::rgb(248, 250, 252);
const SKY: Color = Color::rgb(56, 189, 248);
const SLATE_400: Color = Color::rgb(148, 163, 184);
const SLATE_200: Color = Color::rgb(226, 232, 240);
const SLATE_700: Color = Color::rgb(51, 65, 85);
const SLATE_500: Color = Color::rgb(100, 116, 139);
const INK: Color = Color::rgb(15, 23, 42);
const ACCENT: Color = Color::rgb(14, 165, 233);

const SIDEBAR_SHARE: f32 = 35.0;
const PHOTO_SIZE: f32 = 100.0;
const LOCALE: Locale = Locale::ENGLISH;

#[derive(Debug, Default, Clone, Copy)]
pub struct BasicTheme;

fn stylesheet() -> Stylesheet {
    Stylesheet::new()
        .define("sidebar", style().padding(Margins::x(30.0)))
        .define("main", style().padding(Margins::x(40.0)))
        .define("photo", style().margin(below(20.0)).radius(PHOTO_SIZE / 2.0))
        .define(
            "sidebar-name",
            style().size(20.0).bold().color(SIDEBAR_NAME).margin(below(4.0)),
        )
        .define("sidebar-role", style().size(11.0).color(SKY).margin(below(24.0)))
        .define(
            "sidebar-label",
            style().size(10.0).bold().color(SLATE_400).uppercase().margin(below(10.0)),
        )
        .define("contact", style().size(9.0).color(SLATE_200).margin(below(8.0)))
        .define("name", style().size(28.0).bold().color(INK).margin(below(4.0)))
        .define(
            "role",
            style().size(13.0).weight(FontWeight::Numeric(600)).color(ACCENT).margin(below(20.0)),
        )
        .define(
            "section-title",
            style()
                .size(12.0)
                .bold()
                .color(INK)
                .uppercase()
                .border_bottom(2.0, ACCENT)
                .padding(below(6.0))
                .margin(around(16.0, 12.0)),
        )
        .define("summary", style().size(10.0).line_height(1.6).color(SLATE_700).margin(below(6.0)))
        .define("entry", style().margin(below(14.0)))
        .define("entry-header", style().margin(below(2.0)))
        .define("entry-title", style().size(11.0).bold().color(INK))
        .define("entry-dates", style().size(9.0).weight(FontWeight::Numeric(600)).color(ACCENT))
        .define("entry-subtitle", style().size(10.0).italic().color(SLATE_500).margin(below(4.0)))
        .define("entry-location", style().size(9.0).italic().color(SLATE_400))
        .define(
            "achievement",
            style()
                .size(9.0)
                .line_height(1.5)
                .color(SLATE_700)
                .padding(Margins::new(0.0, 0.0, 0.0, 8.0))
                .margin(below(2.0)),
        )
        .define("skill-title", style().size(8.0).uppercase().color(SLATE_500).margin(below(4.0)))
        .define(
            "tag",
            style()
                .size(7.0)
                .color(SLATE_200)
                .background(SLATE_700)
                .padding(Margins::symmetric(3.0, 6.0))
                .radius(3.0)
                .margin(below(12.0)),
        )
        .define("project-link", style().size(9.0).color(ACCENT))
        .define("project-description", style().size(9.0).color(SLATE_700).margin(around(2.0, 0.0)))
        .define("project-tech", style().size(8.0).color(SLATE_500).margin(around(2.0, 0.0)))
}

const PREVIEW_CSS: &str = "\
.cv { font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; display: flex; background: #ffffff; }
.cv .sidebar { width: 35%; background: #1e293b; padding-top: 40pt; }
.cv .main { flex: 1; padding-top: 40pt; }
.cv .photo { width: 100pt; height: 100pt; object-fit: cover; }
.cv .entry-header { display: flex; justify-content: space-between; }
.cv .tags { display: flex; flex-wrap: wrap; gap: 4pt; }
.cv .section-title { display: block; }
";

fn dates(start: &str, end: &str, current: bool) -> String {
    format_date_range(start, end, current, &LOCALE)
}

impl BasicTheme {
    fn sidebar_preview(&self, cv: &CvDocument) -> Element {
        let info = &cv.basic_info;
        el("aside")
            .class("sidebar")
            .section(BASIC_INFO)
            .child_opt(photo_src(info).map(|src| {
                el("img").class("photo").attr("src", src).attr("alt", info.name.as_str())
            }))
            .child(el("div").class("sidebar-name").text(info.name.as_str()))
            .child(el("div").class("sidebar-role").text(info.role.as_str()))
            .child(el("div").class("sidebar-label").text("Contact"))
            .children(
                contact_items(info)
                    .into_iter()
                    .map(|item| el("div").class("contact").text(item)),
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
                        el("div")
                            .class("achievement")
                            .child(PreviewNode::rich_text(a))
                    }))
            })),
            SectionKind::Education => section.children(cv.education.iter().map(|edu| {
                let location = (!edu.location.trim().is_empty())
                    .then(|| el("div").class("entry-location").text(edu.location.as_str()));
                el("div")
                    .class("entry")
                    .child(dated_row_preview(
                        &edu.degree,
                        "entry-title",
                        dates(&edu.start_date, &edu.end_date, edu.current),
                        "entry-dates",
                    ))
                    .child(el("div").class("entry-subtitle").text(edu.institute.as_str()))
                    .child_opt(location)
            })),
            SectionKind::Skills => section.children(cv.skills.iter().map(|skill| {
                el("div")
                    .class("skill")
                    .child(el("div").class("skill-title").text(skill.title.as_str()))
                    .child(
                        el("div").class("tags").children(
                            skill_tags(skill)
                                .into_iter()
                                .map(|t| el("span").class("tag").text(t)),
                        ),
                    )
            })),
            SectionKind::Projects => section.children(cv.projects.iter().map(|project| {
                el("div")
                    .class("entry")
                    .child(el("div").class("entry-title").text(project.name.as_str()))
                    .child_opt(
                        project
                            .url
                            .as_deref()
                            .map(|url| link_preview(url, url, "project-link")),
                    )
                    .child_opt(
                        project
                            .github
                            .as_deref()
                            .map(|url| link_preview(url, url, "project-link")),
                    )
                    .child_opt((!project.description.trim().is_empty()).then(|| {
                        el("div")
                            .class("project-description")
                            .text(project.description.as_str())
                    }))
                    .child_opt((!project.technologies.is_empty()).then(|| {
                        el("div")
                            .class("project-tech")
                            .text(format!("Tech: {}", project.technologies.iter().join(", ")))
                    }))
            })),
        }
    }

    fn sidebar_print(&self, cv: &CvDocument) -> Block {
        let info = &cv.basic_info;
        Block::new()
            .section(BASIC_INFO)
            .child_opt(
                photo_src(info).map(|src| Image::circle(src, PHOTO_SIZE).style_name("photo")),
            )
            .child(Paragraph::new(info.name.as_str()).style_name("sidebar-name"))
            .child(Paragraph::new(info.role.as_str()).style_name("sidebar-role"))
            .child(Paragraph::new("Contact").style_name("sidebar-label"))
            .children(
                contact_items(info)
                    .into_iter()
                    .map(|item| Paragraph::new(item).style_name("contact")),
            )
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
                        65.0,
                    ))
                    .child(Paragraph::new(exp.company.as_str()).style_name("entry-subtitle"))
                    .children(flatten_all(&exp.achievements).iter().map(|a| {
                        Paragraph::empty()
                            .multiline(&format!("\u{2022} {}", a))
                            .style_name("achievement")
                    }))
            })),
            SectionKind::Education => section.children(cv.education.iter().map(|edu| {
                let location = (!edu.location.trim().is_empty())
                    .then(|| Paragraph::new(edu.location.as_str()).style_name("entry-location"));
                Block::new()
                    .id(&edu.id)
                    .style_name("entry")
                    .keep_together()
                    .child(dated_row(
                        &edu.degree,
                        "entry-title",
                        dates(&edu.start_date, &edu.end_date, edu.current),
                        "entry-dates",
                        65.0,
                    ))
                    .child(Paragraph::new(edu.institute.as_str()).style_name("entry-subtitle"))
                    .child_opt(location)
            })),
            SectionKind::Skills => section.children(cv.skills.iter().map(|skill| {
                Block::new()
                    .id(&skill.id)
                    .keep_together()
                    .child(Paragraph::new(skill.title.as_str()).style_name("skill-title"))
                    .child(Tags::new(skill_tags(skill)).style_name("tag"))
            })),
            SectionKind::Projects => section.children(cv.projects.iter().map(|project| {
                Block::new()
                    .id(&project.id)
                    .style_name("entry")
                    .keep_together()
                    .child(Paragraph::new(project.name.as_str()).style_name("entry-title"))
                    .child_opt(
                        project
                            .url
                            .as_deref()
                            .map(|url| link_print(url, url, "project-link")),
                    )
                    .child_opt(
                        project
                            .github
                            .as_deref()
                            .map(|url| link_print(url, url, "project-link")),
                    )
                    .child_opt((!project.description.trim().is_empty()).then(|| {
                        Paragraph::new(project.description.as_str())
                            .style_name("project-description")
                    }))
                    .child_opt((!project.technologies.is_empty()).then(|| {
                        Paragraph::new(format!("Tech: {}", project.technologies.iter().join(", ")))
                            .style_name("project-tech")
                    }))
            })),
        }
    }
}

impl Theme for BasicTheme {
    fn id(&self) -> &str {
        "basic"
    }

    fn name(&self) -> &str {
        "Basic"
    }

    fn render_preview(&self, cv: &CvDocument) -> PreviewDocument {
        let info = &cv.basic_info;
        let main = el("main")
            .class("main")
            .child(el("div").class("name").text(info.name.as_str()))
            .child(el("div").class("role").text(info.role.as_str()))
            .children(plan_sections(cv).into_iter().map(|kind| self.section_preview(cv, kind)));
        let root = el("div")
            .class("cv")
            .class("basic")
            .child(self.sidebar_preview(cv))
            .child(main);
        preview_document(cv, stylesheet(), PREVIEW_CSS, root)
    }

    fn render_print(&self, cv: &CvDocument) -> PrintDocument {
        let info = &cv.basic_info;
        let main = Block::new()
            .style_name("main")
            .child(Paragraph::new(info.name.as_str()).style_name("name"))
            .child(Paragraph::new(info.role.as_str()).style_name("role"))
            .children(plan_sections(cv).into_iter().map(|kind| self.section_print(cv, kind)));
        let body = Columns::new()
            .cell_with(
                Dimension::Percent(SIDEBAR_SHARE),
                Block::new().style_name("sidebar").child(self.sidebar_print(cv)),
            )
            .cell_with(Dimension::Auto, main);

        PrintDocument {
            title: info.name.clone(),
            page_size: PageSize::A4,
            margins: Margins::y(40.0),
            background: Some(Color::WHITE),
            decorations: vec![Decoration::Rect {
                rect: Rect::new(0.0, 0.0, A4_WIDTH * SIDEBAR_SHARE / 100.0, A4_HEIGHT),
                color: SIDEBAR,
            }],
            base_style: style().font("Helvetica").size(10.0).color(SLATE_700),
            stylesheet: stylesheet(),
            children: vec![body.build()],
        }
    }
}
