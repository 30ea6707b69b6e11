use crate::encoding::to_win_ansi;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::HashMap;
use vitae_idf::{Decoration, ImageShape};
use vitae_layout::{LayoutElement, PositionedElement, StandardFont, TextElement};
use vitae_types::{Color, Rect};

/// Control point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// A link rectangle in PDF user space.
pub(crate) struct LinkArea {
    pub rect: [f32; 4],
    pub uri: String,
}

#[derive(Default)]
struct PageRenderState {
    font: Option<(StandardFont, f32)>,
    fill_color: Option<Color>,
}

/// Builds the content stream for one page. Layout coordinates have the
/// origin at the top-left; PDF user space has it at the bottom-left.
pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    image_names: &'a HashMap<String, String>,
    links: Vec<LinkArea>,
}

fn pdf_color(color: &Color) -> Vec<Object> {
    let color = if color.a < 1.0 {
        Color::WHITE.mix(color, color.a)
    } else {
        *color
    };
    color.to_unit_rgb().iter().map(|c| (*c).into()).collect()
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(page_height: f32, image_names: &'a HashMap<String, String>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            image_names,
            links: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> (Content, Vec<LinkArea>) {
        (self.content, self.links)
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color.as_ref() != Some(color) {
            self.op("rg", pdf_color(color));
            self.state.fill_color = Some(*color);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        self.set_fill_color(color);
        let y = self.page_height - rect.bottom();
        self.op(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
        self.op("f", vec![]);
    }

    /// Appends a closed circle path centred on (`cx`, `cy`) in PDF space.
    fn circle_path(&mut self, cx: f32, cy: f32, r: f32) {
        let k = r * KAPPA;
        self.op("m", vec![(cx + r).into(), cy.into()]);
        let quarters = [
            [cx + r, cy + k, cx + k, cy + r, cx, cy + r],
            [cx - k, cy + r, cx - r, cy + k, cx - r, cy],
            [cx - r, cy - k, cx - k, cy - r, cx, cy - r],
            [cx + k, cy - r, cx + r, cy - k, cx + r, cy],
        ];
        for q in quarters {
            self.op("c", q.iter().map(|v| (*v).into()).collect());
        }
        self.op("h", vec![]);
    }

    pub(crate) fn fill_background(&mut self, width: f32, color: &Color) {
        self.fill_rect(Rect::new(0.0, 0.0, width, self.page_height), color);
    }

    pub(crate) fn draw_decoration(&mut self, decoration: &Decoration) {
        match decoration {
            Decoration::Rect { rect, color } => self.fill_rect(*rect, color),
            Decoration::Circle {
                cx,
                cy,
                radius,
                color,
            } => {
                self.set_fill_color(color);
                self.circle_path(*cx, self.page_height - cy, *radius);
                self.op("f", vec![]);
            }
        }
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) {
        let bounds = Rect::new(el.x, el.y, el.width, el.height);
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rect { color } => self.fill_rect(bounds, color),
            LayoutElement::Line { thickness, color } => {
                self.fill_rect(Rect::new(el.x, el.y, el.width, *thickness), color)
            }
            LayoutElement::Image(image) => self.draw_image(&image.src, image.shape, bounds),
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        let baseline = self.page_height - (el.y + text.font_size * 0.8);
        self.op("BT", vec![]);
        if self.state.font != Some((text.font, text.font_size)) {
            self.op(
                "Tf",
                vec![
                    Object::Name(text.font.resource_name().into_bytes()),
                    text.font_size.into(),
                ],
            );
            self.state.font = Some((text.font, text.font_size));
        }
        self.set_fill_color(&text.color);
        self.op("Td", vec![el.x.into(), baseline.into()]);
        self.op(
            "Tj",
            vec![Object::String(
                to_win_ansi(&text.content),
                StringFormat::Literal,
            )],
        );
        self.op("ET", vec![]);

        if text.underline {
            let thickness = (text.font_size * 0.05).max(0.5);
            let top = el.y + text.font_size * 0.8 + text.font_size * 0.1;
            self.fill_rect(Rect::new(el.x, top, el.width, thickness), &text.color);
        }
        if let Some(href) = &text.href {
            self.links.push(LinkArea {
                rect: [
                    el.x,
                    self.page_height - el.bottom(),
                    el.x + el.width,
                    self.page_height - el.y,
                ],
                uri: href.clone(),
            });
        }
    }

    fn draw_image(&mut self, src: &str, shape: ImageShape, bounds: Rect) {
        let Some(name) = self.image_names.get(src).cloned() else {
            log::warn!("Image was not resolved before rendering, skipping it.");
            return;
        };
        let y = self.page_height - bounds.bottom();
        self.op("q", vec![]);
        if shape == ImageShape::Circle {
            let radius = bounds.width.min(bounds.height) / 2.0;
            self.circle_path(bounds.x + bounds.width / 2.0, y + bounds.height / 2.0, radius);
            self.op("W", vec![]);
            self.op("n", vec![]);
        }
        self.op(
            "cm",
            vec![
                bounds.width.into(),
                Object::Integer(0),
                Object::Integer(0),
                bounds.height.into(),
                bounds.x.into(),
                y.into(),
            ],
        );
        self.op("Do", vec![Object::Name(name.into_bytes())]);
        self.op("Q", vec![]);
        // `Q` restores the colour the image was drawn with.
        self.state.fill_color = None;
    }
}
