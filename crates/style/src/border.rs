use serde::{Deserialize, Serialize};
use vitae_types::Color;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Border {
    pub width: f32,
    #[serde(default)]
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    pub fn solid(width: f32, color: Color) -> Self {
        Self {
            width,
            style: BorderStyle::Solid,
            color,
        }
    }

    pub fn to_css(&self) -> String {
        format!("{}pt {} {}", self.width, self.style.as_css(), self.color.to_css())
    }
}
