//! Widgets and style shorthands shared by the built-in themes.

use vitae_idf::builders::{Block, NodeBuilder, Paragraph, Row};
use vitae_idf::{Element, PreviewDocument, PreviewNode, el};
use vitae_model::{BasicInfo, CvDocument, SectionKind};
use vitae_style::{
    Border, Dimension, ElementStyle, FontStyle, FontWeight, Margins, Stylesheet, TextAlign,
    TextTransform,
};
use vitae_text::{flatten_for_print, is_safe_href};
use vitae_traits::DataUrl;
use vitae_types::Color;

/// Section tag of the header block every theme emits first.
pub(crate) const BASIC_INFO: &str = "basicInfo";

pub(crate) const A4_WIDTH: f32 = 595.28;
pub(crate) const A4_HEIGHT: f32 = 841.89;

pub(crate) fn style() -> ElementStyle {
    ElementStyle::default()
}

/// Chainable setters for building stylesheets tersely.
pub(crate) trait StyleExt: Sized {
    fn font(self, family: &str) -> Self;
    fn size(self, points: f32) -> Self;
    fn weight(self, weight: FontWeight) -> Self;
    fn italic(self) -> Self;
    fn color(self, color: Color) -> Self;
    fn line_height(self, factor: f32) -> Self;
    fn align(self, align: TextAlign) -> Self;
    fn uppercase(self) -> Self;
    fn background(self, color: Color) -> Self;
    fn border_bottom(self, width: f32, color: Color) -> Self;
    fn border_left(self, width: f32, color: Color) -> Self;
    fn radius(self, radius: f32) -> Self;
    fn margin(self, margin: Margins) -> Self;
    fn padding(self, padding: Margins) -> Self;

    fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }
}

impl StyleExt for ElementStyle {
    fn font(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }
    fn size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }
    fn weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }
    fn italic(mut self) -> Self {
        self.font_style = Some(FontStyle::Italic);
        self
    }
    fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
    fn line_height(mut self, factor: f32) -> Self {
        self.line_height = Some(factor);
        self
    }
    fn align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }
    fn uppercase(mut self) -> Self {
        self.text_transform = Some(TextTransform::Uppercase);
        self
    }
    fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }
    fn border_bottom(mut self, width: f32, color: Color) -> Self {
        self.border_bottom = Some(Border::solid(width, color));
        self
    }
    fn border_left(mut self, width: f32, color: Color) -> Self {
        self.border_left = Some(Border::solid(width, color));
        self
    }
    fn radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }
    fn margin(mut self, margin: Margins) -> Self {
        self.margin = Some(margin);
        self
    }
    fn padding(mut self, padding: Margins) -> Self {
        self.padding = Some(padding);
        self
    }
}

/// Margin below only.
pub(crate) fn below(points: f32) -> Margins {
    Margins::new(0.0, 0.0, points, 0.0)
}

/// Margin above and below.
pub(crate) fn around(top: f32, bottom: f32) -> Margins {
    Margins::new(top, 0.0, bottom, 0.0)
}

/// Non-empty contact fields in display order.
pub(crate) fn contact_items(info: &BasicInfo) -> Vec<&str> {
    [
        &info.email,
        &info.phone,
        &info.location,
        &info.website,
        &info.github,
        &info.linkedin,
    ]
    .into_iter()
    .map(|s| s.trim())
    .filter(|s| !s.is_empty())
    .collect()
}

/// The photo, when it is something an image element can show: an
/// `image/*` data URL or an http(s) address.
pub(crate) fn photo_src(info: &BasicInfo) -> Option<&str> {
    let src = info.photo.as_deref()?.trim();
    if src.is_empty() {
        return None;
    }
    let lower = src.get(..11).unwrap_or(src).to_ascii_lowercase();
    if DataUrl::is_data_url(src) {
        if lower.starts_with("data:image/") {
            return Some(src);
        }
    } else if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(src);
    }
    log::warn!("Ignoring photo that is neither an image data URL nor an http(s) URL.");
    None
}

/// Rich text as plain paragraphs for print.
pub(crate) fn plain_paragraphs(rich: &str) -> Vec<String> {
    flatten_for_print(rich)
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// A link target that is safe to emit, or `None`.
pub(crate) fn safe_link(href: Option<&str>) -> Option<&str> {
    href.map(str::trim)
        .filter(|h| !h.is_empty() && is_safe_href(h))
}

pub(crate) fn section_title(cv: &CvDocument, kind: SectionKind) -> &str {
    cv.section_config.titles.get(kind)
}

/// A two-cell header: title on the left, dates right-aligned.
pub(crate) fn dated_row(
    title: &str,
    title_style: &str,
    dates: String,
    dates_style: &str,
    title_share: f32,
) -> Row {
    Row::new()
        .style_name("entry-header")
        .cell(
            Dimension::Percent(title_share),
            Paragraph::new(title).style_name(title_style),
        )
        .cell(
            Dimension::Auto,
            Paragraph::new(dates)
                .style_name(dates_style)
                .style(style().align(TextAlign::Right)),
        )
}

/// Preview counterpart of [`dated_row`].
pub(crate) fn dated_row_preview(
    title: &str,
    title_class: &str,
    dates: String,
    dates_class: &str,
) -> Element {
    el("div")
        .class("entry-header")
        .child(el("div").class(title_class).text(title))
        .child(el("div").class(dates_class).text(dates))
}

/// A preview `<a>` when the target is safe, plain text otherwise.
pub(crate) fn link_preview(text: &str, href: &str, class: &str) -> Element {
    let element = el("a").class(class).text(text);
    match safe_link(Some(href)) {
        Some(href) => element
            .attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer"),
        None => el("span").class(class).text(text),
    }
}

/// A print paragraph linking to `href` when safe.
pub(crate) fn link_print(text: &str, href: &str, class: &str) -> Paragraph {
    match safe_link(Some(href)) {
        Some(href) => Paragraph::empty().link(text, href).style_name(class),
        None => Paragraph::new(text).style_name(class),
    }
}

pub(crate) fn preview_document(
    cv: &CvDocument,
    stylesheet: Stylesheet,
    extra_css: &str,
    root: Element,
) -> PreviewDocument {
    PreviewDocument {
        title: cv.basic_info.name.clone(),
        stylesheet,
        extra_css: extra_css.to_string(),
        root: PreviewNode::from(root),
    }
}

/// Wraps a section body in the tagged block shared by all print themes.
pub(crate) fn print_section(kind: SectionKind, header: impl NodeBuilder) -> Block {
    Block::new()
        .section(kind.as_str())
        .style_name("section")
        .child(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(photo: Option<&str>) -> BasicInfo {
        BasicInfo {
            name: "Alex".into(),
            email: "a@b.c".into(),
            phone: " ".into(),
            github: "github.com/alex".into(),
            photo: photo.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn blank_contacts_skipped() {
        assert_eq!(contact_items(&info(None)), vec!["a@b.c", "github.com/alex"]);
    }

    #[test]
    fn photo_sources_filtered() {
        assert_eq!(
            photo_src(&info(Some("data:image/png;base64,AA"))),
            Some("data:image/png;base64,AA")
        );
        assert_eq!(
            photo_src(&info(Some("https://e.com/me.jpg"))),
            Some("https://e.com/me.jpg")
        );
        assert_eq!(photo_src(&info(Some("data:text/html,<b>"))), None);
        assert_eq!(photo_src(&info(Some("javascript:alert(1)"))), None);
        assert_eq!(photo_src(&info(Some(""))), None);
        assert_eq!(photo_src(&info(None)), None);
    }

    #[test]
    fn rich_text_split_into_paragraphs() {
        assert_eq!(
            plain_paragraphs("<p>One <b>two</b></p><p>Three</p>"),
            vec!["One two", "Three"]
        );
    }

    #[test]
    fn unsafe_links_degrade_to_text() {
        assert_eq!(safe_link(Some("javascript:alert(1)")), None);
        assert_eq!(safe_link(Some(" https://e.com ")), Some("https://e.com"));
        let node = PreviewNode::from(link_preview("x", "javascript:x", "link"));
        assert_eq!(node.to_html(), "<span class=\"link\">x</span>");
    }
}
