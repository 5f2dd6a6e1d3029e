//! Node content: anything that can wrap itself into styled lines.

use std::fmt;

use crate::segment::Segment;
use crate::style::Style;
use crate::unicode::{WidthMethod, display_width_with_method, graphemes, width_method};

/// Capability required of a node's content.
///
/// The render engine hands each node a width budget (the remaining cells
/// after its guide prefix) and expects back fully wrapped lines of styled
/// segments. The budget may be zero when guides have consumed the entire
/// width; implementations must still return deterministic output.
pub trait Content: fmt::Debug {
    /// Wrap into lines of styled segments for the given width budget.
    fn render_lines(&self, max_width: usize) -> Vec<Vec<Segment>>;
}

/// Styled text content with word wrapping.
///
/// Accumulates styled spans and wraps them to a width budget at render
/// time. Hard line breaks (`\n`, `\r\n`) split source lines; overlong
/// source lines wrap at whitespace, falling back to a mid-word break when
/// a single word exceeds the budget.
///
/// # Examples
///
/// ```
/// use treeguide::{Content, Style, Text};
///
/// let mut label = Text::new("deploy ");
/// label.push("prod", Style::bold());
///
/// let lines = label.render_lines(40);
/// assert_eq!(lines.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Text {
    spans: Vec<Segment>,
}

impl Text {
    /// Create unstyled text content.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::styled(text, Style::NONE)
    }

    /// Create text content with one uniform style.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Segment::new(text, style)],
        }
    }

    /// Append a styled span.
    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        self.spans.push(Segment::new(text, style));
    }

    /// The accumulated spans.
    #[must_use]
    pub fn spans(&self) -> &[Segment] {
        &self.spans
    }

    /// Check if the text holds no spans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(Segment::is_empty)
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl Content for Text {
    fn render_lines(&self, max_width: usize) -> Vec<Vec<Segment>> {
        let chunks: Vec<(&str, Style)> = self
            .spans
            .iter()
            .map(|span| (span.text.as_str(), span.style))
            .collect();
        wrap_chunks(&chunks, max_width)
    }
}

impl Content for String {
    fn render_lines(&self, max_width: usize) -> Vec<Vec<Segment>> {
        wrap_chunks(&[(self.as_str(), Style::NONE)], max_width)
    }
}

impl Content for &'static str {
    fn render_lines(&self, max_width: usize) -> Vec<Vec<Segment>> {
        wrap_chunks(&[(*self, Style::NONE)], max_width)
    }
}

/// Word-wrap styled chunks into lines of at most `max_width` cells.
///
/// A zero budget is floored to one cell so a degenerate layout still makes
/// forward progress one grapheme at a time.
fn wrap_chunks(chunks: &[(&str, Style)], max_width: usize) -> Vec<Vec<Segment>> {
    let width = max_width.max(1);
    let method = width_method();

    // Split into source lines of (grapheme, style) pairs.
    let mut source_lines: Vec<Vec<(&str, Style)>> = vec![Vec::new()];
    for &(text, style) in chunks {
        for grapheme in graphemes(text) {
            if grapheme == "\n" || grapheme == "\r\n" {
                source_lines.push(Vec::new());
            } else {
                source_lines
                    .last_mut()
                    .expect("source lines start non-empty")
                    .push((grapheme, style));
            }
        }
    }

    let mut lines = Vec::new();
    for source in &source_lines {
        wrap_line(source, width, method, &mut lines);
    }
    lines
}

/// Wrap one source line, appending output lines to `out`.
fn wrap_line(
    source: &[(&str, Style)],
    width: usize,
    method: WidthMethod,
    out: &mut Vec<Vec<Segment>>,
) {
    if source.is_empty() {
        out.push(Vec::new());
        return;
    }

    let emitted_before = out.len();
    let mut start = 0usize;
    let mut current_width = 0usize;
    let mut last_break: Option<usize> = None; // index just past a whitespace grapheme
    let mut i = 0usize;

    while i < source.len() {
        let (grapheme, _) = source[i];
        let g_width = display_width_with_method(grapheme, method);

        if is_whitespace(grapheme) {
            last_break = Some(i + 1);
        }

        if current_width + g_width > width && current_width > 0 {
            let break_at = last_break.unwrap_or(i);
            out.push(coalesce(&source[start..break_at]));

            current_width = 0;
            last_break = None;
            i = break_at;
            while i < source.len() && is_whitespace(source[i].0) {
                i += 1;
            }
            start = i;
            continue;
        }

        current_width += g_width;
        i += 1;
    }

    if start < source.len() || out.len() == emitted_before {
        out.push(coalesce(&source[start..]));
    }
}

fn is_whitespace(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

/// Merge same-style graphemes into segments, trimming trailing whitespace.
fn coalesce(graphemes: &[(&str, Style)]) -> Vec<Segment> {
    let end = graphemes
        .iter()
        .rposition(|(g, _)| !is_whitespace(g))
        .map_or(0, |pos| pos + 1);

    let mut segments: Vec<Segment> = Vec::new();
    for &(grapheme, style) in &graphemes[..end] {
        match segments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(grapheme),
            _ => segments.push(Segment::new(grapheme, style)),
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segments_width;

    fn plain_lines(lines: &[Vec<Segment>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.iter().map(|seg| seg.text.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_no_wrap_needed() {
        let lines = Text::new("hello world").render_lines(20);
        assert_eq!(plain_lines(&lines), vec!["hello world"]);
    }

    #[test]
    fn test_word_wrap() {
        let lines = Text::new("the quick brown fox").render_lines(9);
        assert_eq!(plain_lines(&lines), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_word_wrap_skips_break_whitespace() {
        let lines = Text::new("alpha      beta").render_lines(6);
        assert_eq!(plain_lines(&lines), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_long_word_breaks_mid_word() {
        let lines = Text::new("abcdefghij").render_lines(4);
        assert_eq!(plain_lines(&lines), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_hard_line_breaks() {
        let lines = Text::new("one\ntwo\r\nthree").render_lines(20);
        assert_eq!(plain_lines(&lines), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_source_line_kept() {
        let lines = Text::new("a\n\nb").render_lines(20);
        assert_eq!(plain_lines(&lines), vec!["a", "", "b"]);
    }

    #[test]
    fn test_zero_budget_floors_to_one_cell() {
        let lines = Text::new("abc").render_lines(0);
        assert_eq!(plain_lines(&lines), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_wide_graphemes_wrap_by_cells() {
        // Each ideograph is two cells; budget of 4 fits two per line.
        let lines = Text::new("漢字漢字漢").render_lines(4);
        assert_eq!(plain_lines(&lines), vec!["漢字", "漢字", "漢"]);
        for line in &lines {
            assert!(segments_width(line) <= 4);
        }
    }

    #[test]
    fn test_styles_preserved_across_wrap() {
        let mut text = Text::new("plain ");
        text.push("bold words here", Style::bold());
        let lines = text.render_lines(11);

        assert_eq!(plain_lines(&lines), vec!["plain bold", "words here"]);
        // First line carries both styles, continuation only the bold one.
        assert_eq!(lines[0].len(), 2);
        assert_eq!(lines[0][1].style, Style::bold());
        assert_eq!(lines[1].len(), 1);
        assert_eq!(lines[1][0].style, Style::bold());
    }

    #[test]
    fn test_coalesce_merges_same_style() {
        let mut text = Text::new("ab");
        text.push("cd", Style::NONE);
        let lines = text.render_lines(20);
        assert_eq!(lines[0].len(), 1);
        assert_eq!(lines[0][0].text, "abcd");
    }

    #[test]
    fn test_string_and_str_content() {
        let owned: String = "x y".to_string();
        assert_eq!(plain_lines(&owned.render_lines(1)), vec!["x", "y"]);
        assert_eq!(plain_lines(&"x".render_lines(10)), vec!["x"]);
    }
}
