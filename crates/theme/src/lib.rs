//! The contract every CV theme implements, and the registry themes are
//! looked up in.
//!
//! A theme is a pair of pure functions over a [`CvDocument`]: one builds the
//! on-screen preview tree, the other the print tree the layout engine
//! paginates. Both walk the same [`plan_sections`] result so a section shown
//! in one is shown in the other.

mod plan;
mod registry;

pub use plan::{plan_sections, skill_tags};
pub use registry::ThemeRegistry;

use vitae_idf::{PreviewDocument, PrintDocument};
use vitae_model::CvDocument;

pub trait Theme: Send + Sync {
    /// Stable identifier stored in `activeTheme`.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    fn render_preview(&self, cv: &CvDocument) -> PreviewDocument;

    fn render_print(&self, cv: &CvDocument) -> PrintDocument;
}
