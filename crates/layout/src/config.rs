use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Line height as a multiple of the font size, for styles that do not
    /// set one.
    ///
    /// Defaults to `1.3`.
    pub line_height: f32,

    /// Scales every glyph advance from the built-in metrics. Raise it to wrap
    /// earlier when a viewer substitutes wider fonts.
    ///
    /// Defaults to `1.0`.
    pub metric_scale: f32,

    /// Horizontal gap between tag chips and between wrapped chip lines.
    ///
    /// Defaults to `4.0` points.
    pub chip_gap: f32,

    /// Layout stops with an error beyond this many pages.
    ///
    /// Defaults to `100`.
    pub max_pages: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_height: 1.3,
            metric_scale: 1.0,
            chip_gap: 4.0,
            max_pages: 100,
        }
    }
}
