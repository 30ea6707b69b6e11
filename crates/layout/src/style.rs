use crate::config::LayoutConfig;
use crate::fonts::StandardFont;
use std::sync::Arc;
use vitae_style::{
    Border, Dimension, ElementStyle, FontStyle, FontWeight, Margins, Stylesheet, TextAlign,
    TextDecoration, TextTransform,
};
use vitae_types::Color;

/// Inherited text properties.
#[derive(Debug, Clone, PartialEq)]
pub struct TextModel {
    pub font_family: Arc<String>,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    /// Multiple of `font_size`.
    pub line_height: f32,
    pub text_align: TextAlign,
    pub text_decoration: TextDecoration,
    pub text_transform: TextTransform,
    pub color: Color,
}

impl Default for TextModel {
    fn default() -> Self {
        Self {
            font_family: Arc::new("Helvetica".to_string()),
            font_size: 10.0,
            font_weight: FontWeight::Regular,
            font_style: FontStyle::Normal,
            line_height: LayoutConfig::default().line_height,
            text_align: TextAlign::Left,
            text_decoration: TextDecoration::None,
            text_transform: TextTransform::None,
            color: Color::BLACK,
        }
    }
}

impl TextModel {
    pub fn font(&self) -> StandardFont {
        StandardFont::resolve(&self.font_family, self.font_weight, self.font_style)
    }

    /// Line box height in points.
    pub fn line_box(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Applies the inherited properties set on `style`.
    pub fn apply(&mut self, style: &ElementStyle) {
        if let Some(family) = &style.font_family {
            self.font_family = Arc::new(family.clone());
        }
        if let Some(size) = style.font_size {
            self.font_size = size;
        }
        if let Some(weight) = style.font_weight {
            self.font_weight = weight;
        }
        if let Some(font_style) = style.font_style {
            self.font_style = font_style;
        }
        if let Some(lh) = style.line_height {
            self.line_height = lh;
        }
        if let Some(align) = style.text_align {
            self.text_align = align;
        }
        if let Some(color) = style.color {
            self.color = color;
        }
        if let Some(decoration) = style.text_decoration {
            self.text_decoration = decoration;
        }
        if let Some(transform) = style.text_transform {
            self.text_transform = transform;
        }
    }
}

/// Non-inherited box properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxModel {
    pub margin: Margins,
    pub padding: Margins,
    pub width: Option<Dimension>,
    pub background_color: Option<Color>,
    pub border_bottom: Option<Border>,
    pub border_left: Option<Border>,
}

impl BoxModel {
    pub fn paints(&self) -> bool {
        self.background_color.is_some() || self.border_bottom.is_some() || self.border_left.is_some()
    }

    pub fn border_left_width(&self) -> f32 {
        self.border_left.as_ref().map_or(0.0, |b| b.width)
    }

    pub fn border_bottom_width(&self) -> f32 {
        self.border_bottom.as_ref().map_or(0.0, |b| b.width)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputedStyle {
    pub text: TextModel,
    pub box_model: BoxModel,
}

impl ComputedStyle {
    /// The root style: `base` applied over the defaults.
    pub fn root(base: &ElementStyle, config: &LayoutConfig) -> Self {
        let mut text = TextModel {
            line_height: config.line_height,
            ..TextModel::default()
        };
        text.apply(base);
        Self {
            text,
            box_model: BoxModel::default(),
        }
    }
}

/// Computes the style for a node by inheriting text properties from its
/// parent, applying named styles from the stylesheet in order, and finally
/// the inline override. Box properties are never inherited.
pub fn compute_style(
    stylesheet: &Stylesheet,
    style_names: &[String],
    style_override: Option<&ElementStyle>,
    parent: &ComputedStyle,
) -> ComputedStyle {
    let mut merged = ElementStyle::default();
    for name in style_names {
        match stylesheet.get_style_by_class_name(name) {
            Some(style) => merged.merge(style),
            None => log::warn!("Style '{}' is not defined in the stylesheet.", name),
        }
    }
    if let Some(over) = style_override {
        merged.merge(over);
    }

    let mut text = parent.text.clone();
    text.apply(&merged);

    ComputedStyle {
        text,
        box_model: BoxModel {
            margin: merged.margin.unwrap_or_default(),
            padding: merged.padding.unwrap_or_default(),
            width: merged.width,
            background_color: merged.background_color,
            border_bottom: merged.border_bottom,
            border_left: merged.border_left,
        },
    }
}
