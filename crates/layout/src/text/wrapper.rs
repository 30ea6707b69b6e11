//! Greedy line breaking over styled runs.
//!
//! Whitespace collapses to a single space between words and is dropped at
//! line edges. A word wider than the line is split between characters.

use super::builder::{InlineItem, StyledRun};

/// A piece of one run placed on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub run_index: usize,
    pub text: String,
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub segments: Vec<LineSegment>,
    pub width: f32,
    pub height: f32,
    /// Largest font size on the line; places the shared baseline.
    pub max_font_size: f32,
}

/// Breaks `items` into lines of at most `max_width`. A segment's
/// `run_index` is the position of its run in `items`. `empty_line` gives
/// (font size, height) for lines with no text.
pub fn break_lines(
    items: &[InlineItem],
    max_width: f32,
    metric_scale: f32,
    empty_line: (f32, f32),
) -> Vec<Line> {
    let mut breaker = LineBreaker {
        lines: Vec::new(),
        current: Vec::new(),
        width: 0.0,
        pending_space: None,
        max_width: max_width.max(1.0),
        metric_scale,
        items,
        empty_line,
    };

    for (idx, item) in items.iter().enumerate() {
        match item {
            InlineItem::Break => breaker.finish_line(true),
            InlineItem::Run(run) => breaker.push_run(idx, run),
        }
    }
    if !breaker.current.is_empty() {
        breaker.finish_line(false);
    }
    breaker.lines
}

struct LineBreaker<'a> {
    lines: Vec<Line>,
    current: Vec<LineSegment>,
    width: f32,
    /// A collapsed space waiting for the next word on this line.
    pending_space: Option<(usize, f32)>,
    max_width: f32,
    metric_scale: f32,
    items: &'a [InlineItem],
    empty_line: (f32, f32),
}

impl LineBreaker<'_> {
    fn measure(&self, run: &StyledRun, text: &str) -> f32 {
        run.font.text_width(text, run.font_size) * self.metric_scale
    }

    fn push_run(&mut self, idx: usize, run: &StyledRun) {
        let mut rest = run.text.as_str();
        while !rest.is_empty() {
            let ws_len = rest.len() - rest.trim_start().len();
            if ws_len > 0 {
                if !self.current.is_empty() || self.pending_space.is_some() {
                    self.pending_space = Some((idx, self.measure(run, " ")));
                }
                rest = &rest[ws_len..];
                continue;
            }
            let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_len];
            self.push_word(idx, run, word);
            rest = &rest[word_len..];
        }
    }

    fn push_word(&mut self, idx: usize, run: &StyledRun, word: &str) {
        let word_width = self.measure(run, word);
        let space_width = self.pending_space.map_or(0.0, |(_, w)| w);

        if !self.current.is_empty() && self.width + space_width + word_width > self.max_width {
            self.finish_line(false);
        }

        if self.current.is_empty() && word_width > self.max_width {
            self.push_split_word(idx, run, word);
            return;
        }

        if let Some((space_idx, w)) = self.pending_space.take() {
            if !self.current.is_empty() {
                self.append(space_idx, " ", w);
            }
        }
        self.append(idx, word, word_width);
    }

    fn push_split_word(&mut self, idx: usize, run: &StyledRun, word: &str) {
        let mut chunk = String::new();
        let mut chunk_width = 0.0;
        for c in word.chars() {
            let w = run.font.char_width(c) * run.font_size * self.metric_scale;
            if !chunk.is_empty() && self.width + chunk_width + w > self.max_width {
                self.append(idx, &chunk, chunk_width);
                self.finish_line(false);
                chunk.clear();
                chunk_width = 0.0;
            }
            chunk.push(c);
            chunk_width += w;
        }
        if !chunk.is_empty() {
            self.append(idx, &chunk, chunk_width);
        }
    }

    fn append(&mut self, idx: usize, text: &str, width: f32) {
        match self.current.last_mut() {
            Some(last) if last.run_index == idx => {
                last.text.push_str(text);
                last.width += width;
            }
            _ => self.current.push(LineSegment {
                run_index: idx,
                text: text.to_string(),
                x: self.width,
                width,
            }),
        }
        self.width += width;
    }

    fn finish_line(&mut self, hard: bool) {
        self.pending_space = None;
        if self.current.is_empty() && !hard {
            return;
        }
        let mut height: f32 = 0.0;
        let mut max_font_size: f32 = 0.0;
        for segment in &self.current {
            if let Some(InlineItem::Run(run)) = self.items.get(segment.run_index) {
                height = height.max(run.line_box);
                max_font_size = max_font_size.max(run.font_size);
            }
        }
        if self.current.is_empty() {
            (max_font_size, height) = self.empty_line;
        }
        self.lines.push(Line {
            segments: std::mem::take(&mut self.current),
            width: self.width,
            height,
            max_font_size,
        });
        self.width = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::StandardFont;
    use vitae_types::Color;

    fn run(text: &str, font: StandardFont) -> InlineItem {
        InlineItem::Run(StyledRun {
            text: text.to_string(),
            font,
            font_size: 10.0,
            line_box: 13.0,
            color: Color::BLACK,
            href: None,
            underline: false,
        })
    }

    fn line_texts(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.segments.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect()
    }

    #[test]
    fn wraps_on_word_boundaries() {
        // Courier at 10pt: 6pt per character.
        let items = vec![run("aaa bbb ccc", StandardFont::Courier)];
        let lines = break_lines(&items, 45.0, 1.0, (10.0, 13.0));
        assert_eq!(line_texts(&lines), vec!["aaa bbb", "ccc"]);
        assert!((lines[0].width - 42.0).abs() < 0.01);
    }

    #[test]
    fn whitespace_collapses_and_is_trimmed() {
        let items = vec![run("  a   b  ", StandardFont::Courier)];
        let lines = break_lines(&items, 500.0, 1.0, (10.0, 13.0));
        assert_eq!(line_texts(&lines), vec!["a b"]);
    }

    #[test]
    fn runs_keep_separate_segments() {
        let items = vec![
            run("Stack: ", StandardFont::CourierBold),
            run("Rust", StandardFont::Courier),
        ];
        let lines = break_lines(&items, 500.0, 1.0, (10.0, 13.0));
        assert_eq!(lines.len(), 1);
        let segs = &lines[0].segments;
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].text, "Stack: ");
        assert_eq!(segs[1].text, "Rust");
        assert!((segs[1].x - 42.0).abs() < 0.01);
    }

    #[test]
    fn hard_breaks_make_empty_lines() {
        let items = vec![
            run("a", StandardFont::Courier),
            InlineItem::Break,
            InlineItem::Break,
            run("b", StandardFont::Courier),
        ];
        let lines = break_lines(&items, 500.0, 1.0, (10.0, 13.0));
        assert_eq!(line_texts(&lines), vec!["a", "", "b"]);
        assert_eq!(lines[1].height, 13.0);
    }

    #[test]
    fn long_words_split() {
        let items = vec![run("abcdefghij", StandardFont::Courier)];
        let lines = break_lines(&items, 25.0, 1.0, (10.0, 13.0));
        assert_eq!(line_texts(&lines), vec!["abcd", "efgh", "ij"]);
    }
}
