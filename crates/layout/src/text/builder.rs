use crate::fonts::StandardFont;
use crate::style::{ComputedStyle, TextModel};
use vitae_idf::{InlineMetadata, InlineNode};
use vitae_style::{ElementStyle, Stylesheet, TextDecoration};
use vitae_types::Color;

/// A run of text in one font and colour.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub font: StandardFont,
    pub font_size: f32,
    /// Line box height in points.
    pub line_box: f32,
    pub color: Color,
    pub href: Option<String>,
    pub underline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InlineItem {
    Run(StyledRun),
    Break,
}

/// Flattens a paragraph's inline tree into styled runs, resolving the
/// inline style cascade against the paragraph style.
pub fn collect_runs(
    inlines: &[InlineNode],
    stylesheet: &Stylesheet,
    paragraph: &ComputedStyle,
) -> Vec<InlineItem> {
    let mut out = Vec::new();
    collect(inlines, stylesheet, &paragraph.text, None, &mut out);
    out
}

fn collect(
    inlines: &[InlineNode],
    stylesheet: &Stylesheet,
    text: &TextModel,
    href: Option<&str>,
    out: &mut Vec<InlineItem>,
) {
    for inline in inlines {
        match inline {
            InlineNode::Text(content) => {
                if content.is_empty() {
                    continue;
                }
                // Text nodes may still carry hard breaks.
                for (i, line) in content.split('\n').enumerate() {
                    if i > 0 {
                        out.push(InlineItem::Break);
                    }
                    if !line.is_empty() {
                        out.push(InlineItem::Run(run(line, text, href)));
                    }
                }
            }
            InlineNode::StyledSpan { meta, children } => {
                let span_text = inline_text_model(stylesheet, meta, text);
                collect(children, stylesheet, &span_text, href, out);
            }
            InlineNode::Hyperlink {
                meta,
                href: target,
                children,
            } => {
                let link_text = inline_text_model(stylesheet, meta, text);
                collect(children, stylesheet, &link_text, Some(target), out);
            }
            InlineNode::LineBreak => out.push(InlineItem::Break),
        }
    }
}

fn inline_text_model(stylesheet: &Stylesheet, meta: &InlineMetadata, parent: &TextModel) -> TextModel {
    let mut merged = ElementStyle::default();
    for name in &meta.style_names {
        match stylesheet.get_style_by_class_name(name) {
            Some(style) => merged.merge(style),
            None => log::warn!("Inline style '{}' is not defined in the stylesheet.", name),
        }
    }
    if let Some(over) = &meta.style_override {
        merged.merge(over);
    }
    let mut text = parent.clone();
    text.apply(&merged);
    text
}

fn run(content: &str, text: &TextModel, href: Option<&str>) -> StyledRun {
    StyledRun {
        text: text.text_transform.apply(content),
        font: text.font(),
        font_size: text.font_size,
        line_box: text.line_box(),
        color: text.color,
        href: href.map(str::to_string),
        underline: text.text_decoration == TextDecoration::Underline,
    }
}
