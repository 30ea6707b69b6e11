use crate::LayoutError;
use crate::engine::{Flow, Layouter};
use crate::nodes::paragraph::align_offset;
use crate::output::{LayoutElement, PositionedElement, TextElement};
use crate::style::{ComputedStyle, compute_style};
use vitae_idf::NodeMetadata;
use vitae_style::TextDecoration;

struct Chip {
    text: String,
    width: f32,
}

impl Layouter<'_> {
    /// Chips wrap like words. The node's background and padding style each
    /// chip rather than the whole cloud; its margin applies to the cloud.
    pub(crate) fn layout_tags(
        &self,
        meta: &NodeMetadata,
        tags: &[String],
        parent: &ComputedStyle,
        flow: &mut Flow<'_>,
    ) -> Result<(), LayoutError> {
        let style = compute_style(
            self.stylesheet,
            &meta.style_names,
            meta.style_override.as_ref(),
            parent,
        );
        if tags.is_empty() {
            return Ok(());
        }
        let text = &style.text;
        let model = &style.box_model;
        let font = text.font();
        let gap = self.config.chip_gap;
        let chip_height = text.line_box() + model.padding.vertical();

        let frame_x = flow.x + model.margin.left;
        let frame_width = (flow.width - model.margin.horizontal()).max(0.0);

        let mut rows: Vec<Vec<Chip>> = vec![Vec::new()];
        let mut row_width = 0.0;
        for tag in tags {
            let label = text.text_transform.apply(tag);
            let width = font.text_width(&label, text.font_size) * self.config.metric_scale
                + model.padding.horizontal();
            let needed = if row_width > 0.0 { gap + width } else { width };
            if row_width > 0.0 && row_width + needed > frame_width {
                rows.push(Vec::new());
                row_width = 0.0;
            }
            row_width += if row_width > 0.0 { gap + width } else { width };
            if let Some(row) = rows.last_mut() {
                row.push(Chip { text: label, width });
            }
        }

        flow.y += model.margin.top;
        for (i, row) in rows.into_iter().enumerate() {
            if i > 0 {
                flow.y += gap;
            }
            flow.ensure_space(chip_height)?;
            let used: f32 =
                row.iter().map(|c| c.width).sum::<f32>() + gap * (row.len().saturating_sub(1)) as f32;
            let mut x = frame_x + align_offset(text.text_align, frame_width, used);
            for chip in row {
                if let Some(color) = model.background_color {
                    flow.push(PositionedElement {
                        x,
                        y: flow.y,
                        width: chip.width,
                        height: chip_height,
                        element: LayoutElement::Rect { color },
                    });
                }
                flow.push(PositionedElement {
                    x: x + model.padding.left,
                    y: flow.y + model.padding.top + (text.line_box() - text.font_size) / 2.0,
                    width: chip.width - model.padding.horizontal(),
                    height: text.font_size,
                    element: LayoutElement::Text(TextElement {
                        content: chip.text,
                        font,
                        font_size: text.font_size,
                        color: text.color,
                        href: None,
                        underline: text.text_decoration == TextDecoration::Underline,
                    }),
                });
                x += chip.width + gap;
            }
            flow.y += chip_height;
        }
        flow.y += model.margin.bottom;
        Ok(())
    }
}
