//! The unpaginated preview tree, serialisable to an HTML document.

use crate::TextStr;
use std::fmt::Write;
use vitae_style::Stylesheet;
use vitae_text::{SafeHtml, escape_html, sanitize_html};

/// Attribute recording which CV section an element renders.
pub const SECTION_ATTR: &str = "data-section";

const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// A presentational element with a fixed tag, classes and attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: TextStr,
    pub classes: Vec<TextStr>,
    pub attrs: Vec<(TextStr, TextStr)>,
    pub section: Option<TextStr>,
    pub children: Vec<PreviewNode>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<TextStr>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    /// Tags the element as the block for one CV section.
    pub fn section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }

    pub fn child(mut self, child: impl Into<PreviewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PreviewNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a plain text child.
    pub fn text(self, text: impl Into<TextStr>) -> Self {
        self.child(PreviewNode::Text(text.into()))
    }

    /// Appends only when `child` is `Some`.
    pub fn child_opt(self, child: Option<impl Into<PreviewNode>>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }
}

/// Shorthand for [`Element::new`].
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewNode {
    Element(Element),
    /// Plain text, escaped on output.
    Text(TextStr),
    /// Allow-listed inline markup.
    RichText(SafeHtml),
}

impl PreviewNode {
    /// Sanitizes untrusted rich text into a node.
    pub fn rich_text(raw: &str) -> Self {
        PreviewNode::RichText(sanitize_html(raw))
    }

    pub fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a PreviewNode)) {
        f(self);
        if let PreviewNode::Element(element) = self {
            for child in &element.children {
                child.visit(f);
            }
        }
    }

    /// Section tags in document order.
    pub fn sections(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if let PreviewNode::Element(Element {
                section: Some(section),
                ..
            }) = node
            {
                out.push(section.as_str());
            }
        });
        out
    }

    pub fn find_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if let PreviewNode::Element(element) = node {
                if element.classes.iter().any(|c| c == class) {
                    out.push(element);
                }
            }
        });
        out
    }

    /// Visible text with markup removed, for assertions and search.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.visit(&mut |node| match node {
            PreviewNode::Text(text) => out.push_str(text),
            PreviewNode::RichText(html) => out.push_str(&vitae_text::flatten_for_print(html.as_str())),
            PreviewNode::Element(_) => {}
        });
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            PreviewNode::Text(text) => out.push_str(&escape_html(text)),
            PreviewNode::RichText(html) => out.push_str(html.as_str()),
            PreviewNode::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                if !element.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape_html(&element.classes.join(" ")));
                }
                if let Some(section) = &element.section {
                    let _ = write!(out, " {}=\"{}\"", SECTION_ATTR, escape_html(section));
                }
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag.as_str()) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl From<Element> for PreviewNode {
    fn from(element: Element) -> Self {
        PreviewNode::Element(element)
    }
}

/// A preview tree with the stylesheet its classes refer to.
#[derive(Debug, Clone)]
pub struct PreviewDocument {
    pub title: TextStr,
    pub stylesheet: Stylesheet,
    /// Rules that cannot be expressed as named element styles.
    pub extra_css: TextStr,
    pub root: PreviewNode,
}

impl PreviewDocument {
    pub fn sections(&self) -> Vec<&str> {
        self.root.sections()
    }

    /// A standalone HTML page.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_html(&self.title));
        out.push_str("<style>\n");
        out.push_str(&self.stylesheet.to_css());
        out.push_str(&self.extra_css);
        out.push_str("</style>\n</head>\n<body>\n");
        self.root.write_html(&mut out);
        out.push_str("\n</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escapes_text_and_attributes() {
        let node: PreviewNode = el("a")
            .attr("href", "https://e.com/?a=1&b=\"2\"")
            .text("<me>")
            .into();
        assert_eq!(
            node.to_html(),
            "<a href=\"https://e.com/?a=1&amp;b=&quot;2&quot;\">&lt;me&gt;</a>"
        );
    }

    #[test]
    fn rich_text_is_sanitized_once() {
        let node = PreviewNode::rich_text("<img src=x onerror=alert(1)><em>hi</em>");
        assert_eq!(node.to_html(), "<em>hi</em>");
    }

    #[test]
    fn sections_in_document_order() {
        let node: PreviewNode = el("main")
            .child(el("section").section("skills").child(el("div").section("inner")))
            .child(el("section").section("summary"))
            .into();
        assert_eq!(node.sections(), vec!["skills", "inner", "summary"]);
    }

    #[test]
    fn void_tags_have_no_closing_tag() {
        let node: PreviewNode = el("img").attr("src", "data:image/png;base64,AA").into();
        assert_eq!(node.to_html(), "<img src=\"data:image/png;base64,AA\">");
    }
}
