use crate::LayoutError;
use crate::engine::{Flow, Layouter};
use crate::style::ComputedStyle;
use vitae_idf::Cell;

/// Resolves cell widths against `available`. Sized cells take what they
/// ask for (clamped to what is left); `Auto` cells share the remainder.
pub(crate) fn resolve_cell_widths(cells: &[Cell], available: f32) -> Vec<f32> {
    let mut remaining = available;
    let mut widths: Vec<Option<f32>> = cells
        .iter()
        .map(|cell| {
            cell.width.resolve(available).map(|w| {
                let w = w.min(remaining).max(0.0);
                remaining -= w;
                w
            })
        })
        .collect();
    let auto_count = widths.iter().filter(|w| w.is_none()).count();
    if auto_count > 0 {
        let share = remaining.max(0.0) / auto_count as f32;
        for w in widths.iter_mut().filter(|w| w.is_none()) {
            *w = Some(share);
        }
    }
    widths.into_iter().map(|w| w.unwrap_or_default()).collect()
}

impl Layouter<'_> {
    fn layout_cell(
        &self,
        cell: &Cell,
        parent: &ComputedStyle,
        flow: &mut Flow<'_>,
    ) -> Result<(), LayoutError> {
        self.layout_boxed(&cell.meta, parent, flow, |this, style, inner| {
            for child in &cell.children {
                this.layout_node(child, style, inner)?;
            }
            Ok(())
        })
    }

    /// Cells side by side, placed as one unit: the row moves to the next
    /// page when it does not fit, and is never split.
    pub(crate) fn layout_row(
        &self,
        cells: &[Cell],
        style: &ComputedStyle,
        flow: &mut Flow<'_>,
    ) -> Result<(), LayoutError> {
        let widths = resolve_cell_widths(cells, flow.width);
        let mut placed = Vec::new();
        let mut row_height: f32 = 0.0;
        let mut x = flow.x;
        for (cell, width) in cells.iter().zip(widths) {
            let mut pages = Vec::new();
            let height = {
                let mut scratch = Flow::scratch(&mut pages, x, width);
                self.layout_cell(cell, style, &mut scratch)?;
                scratch.y
            };
            row_height = row_height.max(height);
            placed.extend(pages.into_iter().flat_map(|p| p.elements));
            x += width;
        }

        flow.ensure_space(row_height)?;
        let top = flow.y;
        for mut element in placed {
            element.y += top;
            flow.push(element);
        }
        flow.y += row_height;
        Ok(())
    }

    /// Cells side by side that each flow on their own, possibly over several
    /// pages. The cursor continues below the cell that ended last.
    pub(crate) fn layout_columns(
        &self,
        cells: &[Cell],
        style: &ComputedStyle,
        flow: &mut Flow<'_>,
    ) -> Result<(), LayoutError> {
        let widths = resolve_cell_widths(cells, flow.width);
        let start = flow.position();
        let mut end = start;
        let mut x = flow.x;
        for (cell, width) in cells.iter().zip(widths) {
            let cell_end = {
                let mut column = flow.sub(x, width);
                column.set_position(start);
                self.layout_cell(cell, style, &mut column)?;
                column.position()
            };
            if cell_end.0 > end.0 || (cell_end.0 == end.0 && cell_end.1 > end.1) {
                end = cell_end;
            }
            x += width;
        }
        flow.set_position(end);
        Ok(())
    }
}
