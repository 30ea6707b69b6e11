//! Fluent builders for the print tree.
//!
//! Themes compose small "widget functions" that return pre-configured
//! builders, the same way they would compose components:
//!
//! ```ignore
//! use vitae_idf::builders::*;
//!
//! fn titled(title: &str, body: impl NodeBuilder) -> Block {
//!     Block::new()
//!         .style_name("section")
//!         .child(Paragraph::new(title).style_name("section-title"))
//!         .child(body)
//! }
//! ```

use crate::print::{Cell, ImageShape, InlineMetadata, InlineNode, PrintNode};
use crate::{NodeMetadata, TextStr};
use vitae_style::{Dimension, ElementStyle};

/// Anything that can become a print node.
pub trait NodeBuilder {
    fn build(self) -> PrintNode;
}

impl NodeBuilder for PrintNode {
    fn build(self) -> PrintNode {
        self
    }
}

macro_rules! impl_meta_setters {
    ($name:ident) => {
        impl $name {
            pub fn id(mut self, id: &str) -> Self {
                self.meta.id = Some(id.to_string());
                self
            }

            pub fn style_name(mut self, name: &str) -> Self {
                self.meta.style_names.push(name.to_string());
                self
            }

            pub fn style(mut self, style: ElementStyle) -> Self {
                match &mut self.meta.style_override {
                    Some(existing) => existing.merge(&style),
                    None => self.meta.style_override = Some(style),
                }
                self
            }

            /// Tags the node as the block for one CV section.
            pub fn section(mut self, section: &str) -> Self {
                self.meta.section = Some(section.to_string());
                self
            }

            /// Asks the layout engine not to split this node across pages
            /// when it fits on one.
            pub fn keep_together(mut self) -> Self {
                self.meta.keep_together = true;
                self
            }
        }
    };
}

macro_rules! define_container_builder {
    ($name:ident, $node_variant:ident) => {
        #[derive(Default)]
        pub struct $name {
            meta: NodeMetadata,
            children: Vec<PrintNode>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn child(mut self, child: impl NodeBuilder) -> Self {
                self.children.push(child.build());
                self
            }

            pub fn child_opt(self, child: Option<impl NodeBuilder>) -> Self {
                match child {
                    Some(c) => self.child(c),
                    None => self,
                }
            }

            pub fn children<I>(mut self, children: I) -> Self
            where
                I: IntoIterator,
                I::Item: NodeBuilder,
            {
                self.children.extend(children.into_iter().map(NodeBuilder::build));
                self
            }
        }

        impl_meta_setters!($name);

        impl NodeBuilder for $name {
            fn build(self) -> PrintNode {
                PrintNode::$node_variant {
                    meta: self.meta,
                    children: self.children,
                }
            }
        }
    };
}

define_container_builder!(Block, Block);

macro_rules! define_cell_container_builder {
    ($name:ident, $node_variant:ident) => {
        #[derive(Default)]
        pub struct $name {
            meta: NodeMetadata,
            cells: Vec<Cell>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Adds a cell holding a single child.
            pub fn cell(mut self, width: Dimension, child: impl NodeBuilder) -> Self {
                self.cells.push(Cell {
                    width,
                    meta: NodeMetadata::default(),
                    children: vec![child.build()],
                });
                self
            }

            /// Adds a styled cell with several children.
            pub fn cell_with(mut self, width: Dimension, cell: Block) -> Self {
                if let PrintNode::Block { meta, children } = cell.build() {
                    self.cells.push(Cell {
                        width,
                        meta,
                        children,
                    });
                }
                self
            }
        }

        impl_meta_setters!($name);

        impl NodeBuilder for $name {
            fn build(self) -> PrintNode {
                PrintNode::$node_variant {
                    meta: self.meta,
                    cells: self.cells,
                }
            }
        }
    };
}

define_cell_container_builder!(Row, Row);
define_cell_container_builder!(Columns, Columns);

/// Wrapped text built from inline runs.
#[derive(Default)]
pub struct Paragraph {
    meta: NodeMetadata,
    children: Vec<InlineNode>,
}

impl Paragraph {
    pub fn new(text: impl Into<TextStr>) -> Self {
        Self::default().text(text)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<TextStr>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(InlineNode::Text(text));
        }
        self
    }

    /// A run styled with a named style.
    pub fn span(mut self, text: impl Into<TextStr>, style_name: &str) -> Self {
        self.children.push(InlineNode::StyledSpan {
            meta: InlineMetadata {
                style_names: vec![style_name.to_string()],
                style_override: None,
            },
            children: vec![InlineNode::Text(text.into())],
        });
        self
    }

    pub fn link(mut self, text: impl Into<TextStr>, href: impl Into<TextStr>) -> Self {
        self.children.push(InlineNode::Hyperlink {
            meta: InlineMetadata::default(),
            href: href.into(),
            children: vec![InlineNode::Text(text.into())],
        });
        self
    }

    pub fn line_break(mut self) -> Self {
        self.children.push(InlineNode::LineBreak);
        self
    }

    /// Plain text with `\n` turned into line breaks.
    pub fn multiline(mut self, text: &str) -> Self {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.children.push(InlineNode::LineBreak);
            }
            if !line.is_empty() {
                self.children.push(InlineNode::Text(line.to_string()));
            }
        }
        self
    }
}

impl_meta_setters!(Paragraph);

impl NodeBuilder for Paragraph {
    fn build(self) -> PrintNode {
        PrintNode::Paragraph {
            meta: self.meta,
            children: self.children,
        }
    }
}

/// A cloud of chips.
#[derive(Default)]
pub struct Tags {
    meta: NodeMetadata,
    tags: Vec<TextStr>,
}

impl Tags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TextStr>,
    {
        Self {
            meta: NodeMetadata::default(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl_meta_setters!(Tags);

impl NodeBuilder for Tags {
    fn build(self) -> PrintNode {
        PrintNode::Tags {
            meta: self.meta,
            tags: self.tags,
        }
    }
}

pub struct Image {
    meta: NodeMetadata,
    src: TextStr,
    width: f32,
    height: f32,
    shape: ImageShape,
}

impl Image {
    pub fn new(src: impl Into<TextStr>, width: f32, height: f32) -> Self {
        Self {
            meta: NodeMetadata::default(),
            src: src.into(),
            width,
            height,
            shape: ImageShape::Rectangle,
        }
    }

    /// A square image clipped to a circle of the given diameter.
    pub fn circle(src: impl Into<TextStr>, diameter: f32) -> Self {
        Self {
            shape: ImageShape::Circle,
            ..Self::new(src, diameter, diameter)
        }
    }
}

impl_meta_setters!(Image);

impl NodeBuilder for Image {
    fn build(self) -> PrintNode {
        PrintNode::Image {
            meta: self.meta,
            src: self.src,
            width: self.width,
            height: self.height,
            shape: self.shape,
        }
    }
}

#[derive(Default)]
pub struct Rule {
    meta: NodeMetadata,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }
}

impl_meta_setters!(Rule);

impl NodeBuilder for Rule {
    fn build(self) -> PrintNode {
        PrintNode::Rule { meta: self.meta }
    }
}

pub struct Spacer(pub f32);

impl NodeBuilder for Spacer {
    fn build(self) -> PrintNode {
        PrintNode::Spacer { height: self.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_collects_meta_and_children() {
        let node = Block::new()
            .section("experiences")
            .keep_together()
            .style_name("entry")
            .child(Paragraph::new("Engineer"))
            .child_opt(None::<Paragraph>)
            .build();
        match node {
            PrintNode::Block { meta, children } => {
                assert_eq!(meta.section.as_deref(), Some("experiences"));
                assert!(meta.keep_together);
                assert_eq!(meta.style_names, vec!["entry"]);
                assert_eq!(children.len(), 1);
            }
            other => panic!("expected block, got {}", other.kind()),
        }
    }

    #[test]
    fn multiline_paragraph() {
        let node = Paragraph::empty().multiline("a\n\nb").build();
        let PrintNode::Paragraph { children, .. } = node else {
            panic!("expected paragraph");
        };
        assert_eq!(
            children,
            vec![
                InlineNode::Text("a".into()),
                InlineNode::LineBreak,
                InlineNode::LineBreak,
                InlineNode::Text("b".into()),
            ]
        );
    }

    #[test]
    fn style_overrides_merge() {
        let node = Rule::new()
            .style(ElementStyle {
                font_size: Some(9.0),
                ..Default::default()
            })
            .style(ElementStyle {
                margin: Some(vitae_style::Margins::all(2.0)),
                ..Default::default()
            })
            .build();
        let style = node.meta().and_then(|m| m.style_override.clone()).unwrap();
        assert_eq!(style.font_size, Some(9.0));
        assert!(style.margin.is_some());
    }

    #[test]
    fn row_cells_keep_widths() {
        let node = Row::new()
            .cell(Dimension::Pt(90.0), Image::circle("data:x", 90.0))
            .cell_with(Dimension::Auto, Block::new().child(Paragraph::new("Name")))
            .build();
        let PrintNode::Row { cells, .. } = node else {
            panic!("expected row");
        };
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].width, Dimension::Pt(90.0));
        assert_eq!(cells[1].children.len(), 1);
    }
}
