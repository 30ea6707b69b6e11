//! Defines primitives for size, position, and spacing.
use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Pt(f32),
    Percent(f32),
    #[default]
    Auto,
}

impl Dimension {
    /// Resolves against the containing width. `Auto` yields `None`.
    pub fn resolve(&self, container: f32) -> Option<f32> {
        match self {
            Dimension::Pt(v) => Some(*v),
            Dimension::Percent(p) => Some(container * p / 100.0),
            Dimension::Auto => None,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Dimension::Pt(v) => format!("{}pt", v),
            Dimension::Percent(p) => format!("{}%", p),
            Dimension::Auto => "auto".to_string(),
        }
    }
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn x(value: f32) -> Self {
        Self::new(0.0, value, 0.0, value)
    }

    pub fn y(value: f32) -> Self {
        Self::new(value, 0.0, value, 0.0)
    }

    /// Vertical and horizontal values, CSS two-value shorthand order.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn to_css(&self) -> String {
        format!(
            "{}pt {}pt {}pt {}pt",
            self.top, self.right, self.bottom, self.left
        )
    }

    /// Parse a CSS-style length value with optional unit (e.g., "10pt", "5mm", "12")
    fn parse_length(input: &str) -> Result<f32, String> {
        let input = input.trim();
        let (number, scale) = if let Some(val) = input.strip_suffix("pt") {
            (val, 1.0)
        } else if let Some(val) = input.strip_suffix("px") {
            (val, 1.0)
        } else if let Some(val) = input.strip_suffix("in") {
            (val, 72.0)
        } else if let Some(val) = input.strip_suffix("mm") {
            (val, 2.835)
        } else {
            (input, 1.0)
        };
        number
            .trim()
            .parse::<f32>()
            .map(|v| v * scale)
            .map_err(|e| format!("Invalid number: {}", e))
    }

    /// Parse CSS-style margin shorthand (1, 2, or 4 values)
    fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(Self::parse_length)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [v, h] => Ok(Margins::symmetric(*v, *h)),
            [t, r, b, l] => Ok(Margins::new(*t, *r, *b, *l)),
            _ => Err(format!(
                "Invalid margin shorthand: expected 1, 2, or 4 values, got {}",
                values.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MarginsDef {
            Str(String),
            Num(f32),
            Map {
                #[serde(default)]
                top: f32,
                #[serde(default)]
                right: f32,
                #[serde(default)]
                bottom: f32,
                #[serde(default)]
                left: f32,
            },
        }

        match MarginsDef::deserialize(deserializer)? {
            MarginsDef::Str(s) => Margins::parse_shorthand(&s).map_err(de::Error::custom),
            MarginsDef::Num(n) => Ok(Margins::all(n)),
            MarginsDef::Map {
                top,
                right,
                bottom,
                left,
            } => Ok(Margins::new(top, right, bottom, left)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}
