use crate::LayoutError;
use crate::engine::{Flow, Layouter};
use crate::painting::box_painter::{create_background, create_bottom_border};
use crate::style::{ComputedStyle, compute_style};
use vitae_idf::NodeMetadata;
use vitae_types::Rect;

impl Layouter<'_> {
    /// Lays out `content` inside the box described by `meta`: margins,
    /// optional fixed width, border and padding, then paints the box's
    /// background and borders behind every page fragment it produced.
    pub(crate) fn layout_boxed<F>(
        &self,
        meta: &NodeMetadata,
        parent: &ComputedStyle,
        flow: &mut Flow<'_>,
        content: F,
    ) -> Result<(), LayoutError>
    where
        F: FnOnce(&Self, &ComputedStyle, &mut Flow<'_>) -> Result<(), LayoutError>,
    {
        let style = compute_style(
            self.stylesheet,
            &meta.style_names,
            meta.style_override.as_ref(),
            parent,
        );
        let model = &style.box_model;

        flow.y += model.margin.top;
        let available = (flow.width - model.margin.horizontal()).max(0.0);
        let box_width = model
            .width
            .and_then(|w| w.resolve(available))
            .map_or(available, |w| w.min(available));
        let box_x = flow.x + model.margin.left;

        let start = flow.position();
        let start_index = flow.element_count(start.0);

        let inner_x = box_x + model.border_left_width() + model.padding.left;
        let inner_width = box_width - model.border_left_width() - model.padding.horizontal();
        let end = {
            let mut inner = flow.sub(inner_x, inner_width);
            inner.y += model.padding.top;
            content(self, &style, &mut inner)?;
            inner.y += model.padding.bottom + model.border_bottom_width();
            inner.position()
        };

        if model.paints() {
            for page in start.0..=end.0 {
                let top = if page == start.0 { start.1 } else { flow.top() };
                let bottom = if page == end.0 { end.1 } else { flow.bottom() };
                let bounds = Rect::new(box_x, top, box_width, (bottom - top).max(0.0));
                // Later fragments go underneath whatever else is on that page.
                let index = if page == start.0 { start_index } else { 0 };
                flow.insert_at(page, index, create_background(bounds, model));
                if page == end.0 {
                    if let Some(border) = create_bottom_border(bounds, model) {
                        flow.push_to(page, border);
                    }
                }
            }
        }

        flow.set_position(end);
        flow.y += model.margin.bottom;
        Ok(())
    }
}
