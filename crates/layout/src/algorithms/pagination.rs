/// Tolerance for floating point comparisons against page bounds.
pub const EPSILON: f32 = 0.01;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a child of `child_height` fits below `cursor_y`.
///
/// A child never breaks at the top of a page, even when it is taller than
/// the page; it is placed and allowed to overflow instead.
pub fn check_child_fit(cursor_y: f32, child_height: f32, top: f32, bottom: f32) -> BreakAnalysis {
    let available = (bottom - cursor_y).max(0.0);
    let at_top = cursor_y <= top + EPSILON;
    BreakAnalysis {
        should_break: !at_top && child_height > available + EPSILON,
        remaining_height: available,
    }
}

/// Whether a keep-together block of `block_height` should move to the next
/// page: it does not fit in what is left, but it would fit on an empty page.
pub fn should_move_to_next_page(cursor_y: f32, block_height: f32, top: f32, bottom: f32) -> bool {
    check_child_fit(cursor_y, block_height, top, bottom).should_break
        && block_height <= (bottom - top) + EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_only_when_not_at_top() {
        assert!(check_child_fit(700.0, 200.0, 40.0, 800.0).should_break);
        assert!(!check_child_fit(40.0, 2000.0, 40.0, 800.0).should_break);
        assert!(!check_child_fit(700.0, 100.0, 40.0, 800.0).should_break);
    }

    #[test]
    fn oversized_keep_together_blocks_flow() {
        assert!(should_move_to_next_page(700.0, 200.0, 40.0, 800.0));
        assert!(!should_move_to_next_page(700.0, 900.0, 40.0, 800.0));
    }
}
