//! Defines the named-style table a theme hands to both renderers.

use super::border::Border;
use super::dimension::{Dimension, Margins};
use super::font::{FontStyle, FontWeight};
use super::text::{TextAlign, TextDecoration, TextTransform};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::sync::Arc;
use vitae_types::Color;

/// Named element styles, kept in definition order so generated CSS is stable.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    pub styles: IndexMap<String, Arc<ElementStyle>>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named style.
    pub fn define(mut self, name: &str, style: ElementStyle) -> Self {
        self.styles.insert(name.to_string(), Arc::new(style));
        self
    }

    /// Looks up a style by its class name.
    pub fn get_style_by_class_name(&self, class_name: &str) -> Option<&Arc<ElementStyle>> {
        self.styles.get(class_name)
    }

    /// One CSS rule per named style, selector `.{name}`.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (name, style) in &self.styles {
            let _ = writeln!(css, ".{} {{ {} }}", name, style.to_css());
        }
        css
    }
}

#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    // Font & Text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    /// Multiple of the font size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,

    // Box Model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Margins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
}

impl ElementStyle {
    /// Copies every property set on `to_apply` over `self`.
    pub fn merge(&mut self, to_apply: &ElementStyle) {
        if to_apply.font_family.is_some() { self.font_family = to_apply.font_family.clone(); }
        if to_apply.font_size.is_some() { self.font_size = to_apply.font_size; }
        if to_apply.font_weight.is_some() { self.font_weight = to_apply.font_weight; }
        if to_apply.font_style.is_some() { self.font_style = to_apply.font_style; }
        if to_apply.line_height.is_some() { self.line_height = to_apply.line_height; }
        if to_apply.text_align.is_some() { self.text_align = to_apply.text_align; }
        if to_apply.color.is_some() { self.color = to_apply.color; }
        if to_apply.text_decoration.is_some() { self.text_decoration = to_apply.text_decoration; }
        if to_apply.text_transform.is_some() { self.text_transform = to_apply.text_transform; }
        if to_apply.background_color.is_some() { self.background_color = to_apply.background_color; }
        if to_apply.border_bottom.is_some() { self.border_bottom = to_apply.border_bottom; }
        if to_apply.border_left.is_some() { self.border_left = to_apply.border_left; }
        if to_apply.border_radius.is_some() { self.border_radius = to_apply.border_radius; }
        if to_apply.margin.is_some() { self.margin = to_apply.margin; }
        if to_apply.padding.is_some() { self.padding = to_apply.padding; }
        if to_apply.width.is_some() { self.width = to_apply.width; }
    }

    pub fn is_empty(&self) -> bool {
        *self == ElementStyle::default()
    }

    /// CSS declarations for the properties that are set.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        if let Some(family) = &self.font_family {
            decls.push(format!("font-family: {}", css_font_stack(family)));
        }
        if let Some(size) = self.font_size {
            decls.push(format!("font-size: {}pt", size));
        }
        if let Some(weight) = self.font_weight {
            decls.push(format!("font-weight: {}", weight.numeric_value()));
        }
        if let Some(FontStyle::Italic) = self.font_style {
            decls.push("font-style: italic".to_string());
        }
        if let Some(lh) = self.line_height {
            decls.push(format!("line-height: {}", lh));
        }
        if let Some(align) = self.text_align {
            decls.push(format!("text-align: {}", align.as_css()));
        }
        if let Some(color) = &self.color {
            decls.push(format!("color: {}", color.to_css()));
        }
        if let Some(TextDecoration::Underline) = self.text_decoration {
            decls.push("text-decoration: underline".to_string());
        }
        if let Some(TextTransform::Uppercase) = self.text_transform {
            decls.push("text-transform: uppercase".to_string());
        }
        if let Some(bg) = &self.background_color {
            decls.push(format!("background-color: {}", bg.to_css()));
        }
        if let Some(border) = &self.border_bottom {
            decls.push(format!("border-bottom: {}", border.to_css()));
        }
        if let Some(border) = &self.border_left {
            decls.push(format!("border-left: {}", border.to_css()));
        }
        if let Some(radius) = self.border_radius {
            decls.push(format!("border-radius: {}pt", radius));
        }
        if let Some(margin) = &self.margin {
            decls.push(format!("margin: {}", margin.to_css()));
        }
        if let Some(padding) = &self.padding {
            decls.push(format!("padding: {}", padding.to_css()));
        }
        if let Some(width) = &self.width {
            decls.push(format!("width: {}", width.to_css()));
        }
        decls.join("; ")
    }
}

fn css_font_stack(family: &str) -> String {
    let generic = match family.to_ascii_lowercase().as_str() {
        "times" | "times-roman" | "serif" => "serif",
        "courier" | "monospace" => "monospace",
        _ => "sans-serif",
    };
    format!("'{}', {}", family, generic)
}
