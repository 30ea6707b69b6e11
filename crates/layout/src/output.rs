//! Output types from the layout engine: pages of absolutely positioned,
//! drawable elements. Coordinates are in points from the top-left corner.

use crate::fonts::StandardFont;
use std::fmt;
use vitae_idf::{Decoration, ImageShape};
use vitae_types::Color;

/// A simple, geometry-aware data structure representing a single drawable item.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    /// A filled rectangle.
    Rect { color: Color },
    /// A horizontal stroke along the top edge of the box.
    Line { thickness: f32, color: Color },
    Image(ImageElement),
}

impl fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content),
            LayoutElement::Rect { .. } => write!(f, "Rect"),
            LayoutElement::Line { .. } => write!(f, "Line"),
            LayoutElement::Image(i) => write!(f, "Image({:?})", i.shape),
        }
    }
}

/// One single-line run of text. `y` is the top of its line box; the
/// baseline sits at `y + font_size * 0.8`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: StandardFont,
    pub font_size: f32,
    pub color: Color,
    /// If present, this text is a hyperlink to the given URL.
    pub href: Option<String>,
    pub underline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub src: String,
    pub shape: ImageShape,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<PositionedElement>,
}

impl Page {
    /// Text content of the page in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(|e| match &e.element {
            LayoutElement::Text(t) => Some(t),
            _ => None,
        })
    }
}

/// The result of laying out a print document.
#[derive(Debug, Clone)]
pub struct LaidOutDocument {
    pub title: String,
    pub page_width: f32,
    pub page_height: f32,
    pub background: Option<Color>,
    pub decorations: Vec<Decoration>,
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    /// Index of the first page containing a text run equal to `text`.
    pub fn page_of_text(&self, text: &str) -> Option<usize> {
        self.pages
            .iter()
            .position(|p| p.texts().any(|t| t.content == text))
    }

    pub fn image_sources(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|p| p.elements.iter())
            .filter_map(|e| match &e.element {
                LayoutElement::Image(img) => Some(img.src.as_str()),
                _ => None,
            })
            .collect()
    }
}
