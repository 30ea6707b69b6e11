//! PDF writer for laid-out pages using lopdf.
//!
//! Text is set in the standard-14 Type1 fonts with WinAnsiEncoding, so no
//! font program is embedded. Images arrive already decoded.

mod encoding;
mod error;
mod image;
mod page;
mod renderer;

pub use encoding::to_win_ansi;
pub use error::RenderError;
pub use image::{DecodedImage, ResolvedImages};
pub use renderer::LopdfRenderer;
