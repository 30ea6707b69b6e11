//! Inline text: flattening styled inline trees into runs and breaking runs
//! into lines.

pub mod builder;
pub mod wrapper;

pub use builder::{InlineItem, StyledRun, collect_runs};
pub use wrapper::{Line, LineSegment, break_lines};
