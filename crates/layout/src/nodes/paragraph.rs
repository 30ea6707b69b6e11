use crate::LayoutError;
use crate::engine::{Flow, Layouter};
use crate::output::{LayoutElement, PositionedElement, TextElement};
use crate::style::ComputedStyle;
use crate::text::{InlineItem, break_lines, collect_runs};
use vitae_idf::InlineNode;
use vitae_style::TextAlign;

/// Horizontal offset of a line of `line_width` inside `frame_width`.
pub(crate) fn align_offset(align: TextAlign, frame_width: f32, line_width: f32) -> f32 {
    let slack = (frame_width - line_width).max(0.0);
    match align {
        TextAlign::Left => 0.0,
        TextAlign::Right => slack,
        TextAlign::Center => slack / 2.0,
    }
}

impl Layouter<'_> {
    /// Wraps the inline content and places it line by line, so a long
    /// paragraph continues on the next page.
    pub(crate) fn layout_paragraph(
        &self,
        inlines: &[InlineNode],
        style: &ComputedStyle,
        flow: &mut Flow<'_>,
    ) -> Result<(), LayoutError> {
        let items = collect_runs(inlines, self.stylesheet, style);
        if items.is_empty() {
            return Ok(());
        }
        let lines = break_lines(
            &items,
            flow.width,
            self.config.metric_scale,
            (style.text.font_size, style.text.line_box()),
        );

        for line in lines {
            flow.ensure_space(line.height)?;
            let offset = align_offset(style.text.text_align, flow.width, line.width);
            let half_leading = (line.height - line.max_font_size) / 2.0;
            for segment in line.segments {
                let Some(InlineItem::Run(run)) = items.get(segment.run_index) else {
                    continue;
                };
                flow.push(PositionedElement {
                    x: flow.x + offset + segment.x,
                    y: flow.y + half_leading + (line.max_font_size - run.font_size) * 0.8,
                    width: segment.width,
                    height: run.font_size,
                    element: LayoutElement::Text(TextElement {
                        content: segment.text,
                        font: run.font,
                        font_size: run.font_size,
                        color: run.color,
                        href: run.href.clone(),
                        underline: run.underline,
                    }),
                });
            }
            flow.y += line.height;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_offsets() {
        assert_eq!(align_offset(TextAlign::Left, 100.0, 40.0), 0.0);
        assert_eq!(align_offset(TextAlign::Right, 100.0, 40.0), 60.0);
        assert_eq!(align_offset(TextAlign::Center, 100.0, 40.0), 30.0);
        assert_eq!(align_offset(TextAlign::Center, 100.0, 140.0), 0.0);
    }
}
