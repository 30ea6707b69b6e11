//! Intermediate Document Format (IDF)
//!
//! The two output trees a theme produces from a CV document: a paginated
//! [`PrintDocument`] for the layout engine and an unpaginated
//! [`PreviewDocument`] for on-screen display. Both are plain data, so they
//! can be compared structurally; both tag section blocks the same way so the
//! sections they contain can be checked against each other.

pub mod builders;
pub mod preview;
pub mod print;

use vitae_style::ElementStyle;

pub use preview::{Element, PreviewDocument, PreviewNode, SECTION_ATTR, el};
pub use print::{Cell, Decoration, ImageShape, InlineMetadata, InlineNode, PrintDocument, PrintNode};

/// A string type for the document.
pub type TextStr = String;

/// A common metadata structure for all block-level `PrintNode`s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMetadata {
    pub id: Option<TextStr>,
    /// Set on the outermost node of a CV section.
    pub section: Option<TextStr>,
    /// Named styles from the document's stylesheet, applied in order.
    pub style_names: Vec<TextStr>,
    pub style_override: Option<ElementStyle>,
    pub keep_together: bool,
}
