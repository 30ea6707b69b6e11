use crate::output::{LayoutElement, PositionedElement};
use crate::style::BoxModel;
use vitae_types::Rect;

/// Background and left border for one page fragment of a box. They are
/// painted underneath the fragment's content.
pub fn create_background(bounds: Rect, model: &BoxModel) -> Vec<PositionedElement> {
    let mut elements = Vec::new();
    if bounds.height <= 0.0 {
        return elements;
    }
    if let Some(color) = model.background_color {
        elements.push(PositionedElement {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            element: LayoutElement::Rect { color },
        });
    }
    if let Some(border) = &model.border_left {
        elements.push(PositionedElement {
            x: bounds.x,
            y: bounds.y,
            width: border.width,
            height: bounds.height,
            element: LayoutElement::Rect {
                color: border.color,
            },
        });
    }
    elements
}

/// The bottom border. Callers draw it on the box's last fragment only.
pub fn create_bottom_border(bounds: Rect, model: &BoxModel) -> Option<PositionedElement> {
    let border = model.border_bottom.as_ref()?;
    Some(PositionedElement {
        x: bounds.x,
        y: bounds.bottom() - border.width,
        width: bounds.width,
        height: border.width,
        element: LayoutElement::Rect {
            color: border.color,
        },
    })
}
