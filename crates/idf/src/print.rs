//! The paginated print tree handed to the layout engine.

use crate::{NodeMetadata, TextStr};
use vitae_style::{Dimension, ElementStyle, Margins, PageSize, Stylesheet};
use vitae_types::{Color, Rect};

/// A complete print document: page geometry, what is painted behind every
/// page, and the flowing content.
#[derive(Debug, Clone, Default)]
pub struct PrintDocument {
    pub title: TextStr,
    pub page_size: PageSize,
    pub margins: Margins,
    pub background: Option<Color>,
    /// Painted on every page, underneath the content.
    pub decorations: Vec<Decoration>,
    /// Root text style every node inherits from.
    pub base_style: ElementStyle,
    pub stylesheet: Stylesheet,
    pub children: Vec<PrintNode>,
}

impl PrintDocument {
    /// Section tags in document order.
    pub fn sections(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for child in &self.children {
            child.collect_sections(&mut out);
        }
        out
    }

    /// Every image source referenced by the document.
    pub fn image_sources(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for child in &self.children {
            child.visit(&mut |node| {
                if let PrintNode::Image { src, .. } = node {
                    out.push(src.as_str());
                }
            });
        }
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&PrintNode> {
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// All plain text in document order, one entry per text run.
    pub fn text_runs(&self) -> Vec<String> {
        let mut out = Vec::new();
        for child in &self.children {
            child.visit(&mut |node| match node {
                PrintNode::Paragraph { children, .. } => {
                    for inline in children {
                        inline.collect_text(&mut out);
                    }
                }
                PrintNode::Tags { tags, .. } => out.extend(tags.iter().cloned()),
                _ => {}
            });
        }
        out
    }
}

/// Fixed shapes painted at absolute page coordinates on every page.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    Rect { rect: Rect, color: Color },
    Circle { cx: f32, cy: f32, radius: f32, color: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageShape {
    #[default]
    Rectangle,
    Circle,
}

/// A horizontal slot inside a `Row` or `Columns` node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// `Auto` cells share whatever width the sized cells leave.
    pub width: Dimension,
    pub meta: NodeMetadata,
    pub children: Vec<PrintNode>,
}

/// A block-level element of the print tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintNode {
    /// A vertical container.
    Block {
        meta: NodeMetadata,
        children: Vec<PrintNode>,
    },
    /// Side-by-side cells that never split across pages.
    Row { meta: NodeMetadata, cells: Vec<Cell> },
    /// Side-by-side cells that each flow, and paginate, independently.
    Columns { meta: NodeMetadata, cells: Vec<Cell> },
    /// Wrapped inline content.
    Paragraph {
        meta: NodeMetadata,
        children: Vec<InlineNode>,
    },
    /// Wrapped chips, one per tag.
    Tags { meta: NodeMetadata, tags: Vec<TextStr> },
    Image {
        meta: NodeMetadata,
        src: TextStr,
        width: f32,
        height: f32,
        shape: ImageShape,
    },
    /// A horizontal line across the available width.
    Rule { meta: NodeMetadata },
    Spacer { height: f32 },
}

impl PrintNode {
    pub fn meta(&self) -> Option<&NodeMetadata> {
        match self {
            PrintNode::Block { meta, .. }
            | PrintNode::Row { meta, .. }
            | PrintNode::Columns { meta, .. }
            | PrintNode::Paragraph { meta, .. }
            | PrintNode::Tags { meta, .. }
            | PrintNode::Image { meta, .. }
            | PrintNode::Rule { meta } => Some(meta),
            PrintNode::Spacer { .. } => None,
        }
    }

    /// Returns a string identifier for the node type, used in layout logging.
    pub fn kind(&self) -> &'static str {
        match self {
            PrintNode::Block { .. } => "block",
            PrintNode::Row { .. } => "row",
            PrintNode::Columns { .. } => "columns",
            PrintNode::Paragraph { .. } => "paragraph",
            PrintNode::Tags { .. } => "tags",
            PrintNode::Image { .. } => "image",
            PrintNode::Rule { .. } => "rule",
            PrintNode::Spacer { .. } => "spacer",
        }
    }

    pub fn keep_together(&self) -> bool {
        self.meta().is_some_and(|m| m.keep_together)
    }

    /// Pre-order traversal over this node and its descendants.
    pub fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a PrintNode)) {
        f(self);
        match self {
            PrintNode::Block { children, .. } => {
                for child in children {
                    child.visit(f);
                }
            }
            PrintNode::Row { cells, .. } | PrintNode::Columns { cells, .. } => {
                for cell in cells {
                    for child in &cell.children {
                        child.visit(f);
                    }
                }
            }
            _ => {}
        }
    }

    fn collect_sections<'a>(&'a self, out: &mut Vec<&'a str>) {
        self.visit(&mut |node| {
            if let Some(section) = node.meta().and_then(|m| m.section.as_deref()) {
                out.push(section);
            }
        });
    }

    pub fn find_by_id(&self, id: &str) -> Option<&PrintNode> {
        let mut found = None;
        self.visit(&mut |node| {
            if found.is_none() && node.meta().and_then(|m| m.id.as_deref()) == Some(id) {
                found = Some(node);
            }
        });
        found
    }
}

/// Metadata carried by styled inline runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineMetadata {
    pub style_names: Vec<TextStr>,
    pub style_override: Option<ElementStyle>,
}

/// Represents an inline-level element within a `Paragraph`.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    /// A run of plain text.
    Text(TextStr),
    StyledSpan {
        meta: InlineMetadata,
        children: Vec<InlineNode>,
    },
    /// An external link; becomes a URI annotation in the PDF.
    Hyperlink {
        meta: InlineMetadata,
        href: TextStr,
        children: Vec<InlineNode>,
    },
    LineBreak,
}

impl InlineNode {
    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            InlineNode::Text(text) => out.push(text.clone()),
            InlineNode::StyledSpan { children, .. } | InlineNode::Hyperlink { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            InlineNode::LineBreak => {}
        }
    }
}
