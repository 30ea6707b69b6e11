use crate::LayoutError;
use crate::engine::{Flow, Layouter};
use crate::nodes::paragraph::align_offset;
use crate::output::{ImageElement, LayoutElement, PositionedElement};
use crate::style::ComputedStyle;
use vitae_idf::ImageShape;

const RULE_THICKNESS: f32 = 0.75;

impl Layouter<'_> {
    /// Places an image box, scaled down to the frame width if needed and
    /// aligned with the style's text alignment.
    pub(crate) fn layout_image(
        src: &str,
        width: f32,
        height: f32,
        shape: ImageShape,
        style: &ComputedStyle,
        flow: &mut Flow<'_>,
    ) -> Result<(), LayoutError> {
        let scale = if width > flow.width && width > 0.0 {
            flow.width / width
        } else {
            1.0
        };
        let (width, height) = (width * scale, height * scale);
        flow.ensure_space(height)?;
        flow.push(PositionedElement {
            x: flow.x + align_offset(style.text.text_align, flow.width, width),
            y: flow.y,
            width,
            height,
            element: LayoutElement::Image(ImageElement {
                src: src.to_string(),
                shape,
            }),
        });
        flow.y += height;
        Ok(())
    }

    /// A hairline across the frame in the current text colour.
    pub(crate) fn layout_rule(style: &ComputedStyle, flow: &mut Flow<'_>) -> Result<(), LayoutError> {
        flow.ensure_space(RULE_THICKNESS)?;
        flow.push(PositionedElement {
            x: flow.x,
            y: flow.y,
            width: flow.width,
            height: RULE_THICKNESS,
            element: LayoutElement::Line {
                thickness: RULE_THICKNESS,
                color: style.text.color,
            },
        });
        flow.y += RULE_THICKNESS;
        Ok(())
    }
}
