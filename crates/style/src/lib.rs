pub mod border;
pub mod dimension;
pub mod font;
pub mod stylesheet;
pub mod text;

pub use border::{Border, BorderStyle};
pub use dimension::{Dimension, Margins, PageSize};
pub use font::{FontStyle, FontWeight};
pub use stylesheet::{ElementStyle, Stylesheet};
pub use text::{TextAlign, TextDecoration, TextTransform};
