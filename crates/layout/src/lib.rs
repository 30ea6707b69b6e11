//! Paginating layout for print documents.
//!
//! Turns a [`vitae_idf::PrintDocument`] into pages of absolutely positioned
//! text, rectangles, lines and images, using the metrics of the PDF
//! standard fonts.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Page margins leave no content area ({width:.2} x {height:.2} pt).")]
    InvalidPageGeometry { width: f32, height: f32 },
    #[error("Document exceeds the maximum of {0} pages.")]
    TooManyPages(usize),
}

pub(crate) mod engine;
pub use self::engine::LayoutEngine;

pub mod algorithms;
pub mod config;
pub mod fonts;
mod nodes;
pub mod output;
pub mod painting;
pub mod style;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::fonts::{FontFamily, StandardFont};
pub use self::output::{ImageElement, LaidOutDocument, LayoutElement, Page, PositionedElement, TextElement};
pub use self::style::ComputedStyle;

#[cfg(test)]
mod integration_test;
#[cfg(test)]
mod test_utils;
