#![forbid(unsafe_code)]

//! Plain text window.

use std::collections::VecDeque;
use std::io::{self, Write};

use btui_core::ansi;
use btui_core::text_width::{replace_controls, visible_width};
use btui_layout::{Direction, LayoutError, Rect, Split, SplitDirective};
use btui_text::{Justify, fit_to_width, justify, truncate_to_width, wrap_text};

use crate::error::WindowError;

/// A rectangle of text at a fixed terminal position.
///
/// The buffer always holds `height` lines. Lines written through the
/// content operations are padded to exactly `width` visible columns, and
/// any control character in them (tab, carriage return, ...) is stored as a
/// space so the width on screen matches the width counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    area: Rect,
    lines: VecDeque<String>,
}

impl Window {
    /// Create a blank window with its top-left corner at `(x, y)`.
    #[must_use]
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self::from_rect(Rect::new(x, y, width, height))
    }

    /// Create a blank window covering `area`.
    #[must_use]
    pub fn from_rect(area: Rect) -> Self {
        let blank = blank_line(area.width);
        Self {
            area,
            lines: std::iter::repeat_n(blank, usize::from(area.height)).collect(),
        }
    }

    /// The window's rectangle.
    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Left column.
    #[inline]
    pub fn x(&self) -> u16 {
        self.area.x
    }

    /// Top row.
    #[inline]
    pub fn y(&self) -> u16 {
        self.area.y
    }

    /// Width in columns.
    #[inline]
    pub fn width(&self) -> u16 {
        self.area.width
    }

    /// Height in rows.
    #[inline]
    pub fn height(&self) -> u16 {
        self.area.height
    }

    /// Current lines, top first.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// One line by row, if present.
    pub fn line(&self, row: u16) -> Option<&str> {
        self.lines.get(usize::from(row)).map(String::as_str)
    }

    /// Blank every line.
    pub fn clear(&mut self) {
        let blank = blank_line(self.area.width);
        for line in &mut self.lines {
            line.clone_from(&blank);
        }
    }

    fn check_width(&self, text: &str) -> Result<(), WindowError> {
        let width = visible_width(text);
        if width > usize::from(self.area.width) {
            return Err(WindowError::LineTooLong {
                width,
                max: self.area.width,
            });
        }
        Ok(())
    }

    fn push_bottom(&mut self, line: String) {
        if self.area.height == 0 {
            return;
        }
        if self.lines.len() >= usize::from(self.area.height) {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    fn push_top(&mut self, line: String) {
        if self.area.height == 0 {
            return;
        }
        if self.lines.len() >= usize::from(self.area.height) {
            self.lines.pop_back();
        }
        self.lines.push_front(line);
    }

    /// Add a line at the bottom, scrolling the top line out.
    ///
    /// Fails if `text` is wider than the window.
    pub fn append_line(&mut self, text: &str, how: Justify) -> Result<(), WindowError> {
        let text = replace_controls(text);
        self.check_width(&text)?;
        self.push_bottom(justify(&text, usize::from(self.area.width), how));
        Ok(())
    }

    /// Add a line at the top, scrolling the bottom line out.
    ///
    /// Fails if `text` is wider than the window.
    pub fn prepend_line(&mut self, text: &str, how: Justify) -> Result<(), WindowError> {
        let text = replace_controls(text);
        self.check_width(&text)?;
        self.push_top(justify(&text, usize::from(self.area.width), how));
        Ok(())
    }

    /// Wrap `text` to the window width; each piece is one justified line.
    fn wrapped(&self, text: &str, how: Justify) -> Vec<String> {
        let width = usize::from(self.area.width);
        text.split('\n')
            .map(|raw| replace_controls(raw.strip_suffix('\r').unwrap_or(raw)))
            .flat_map(|paragraph| wrap_text(&paragraph, width))
            // A glyph wider than the whole window cannot be placed.
            .map(|line| justify(&truncate_to_width(&line, width), width, how))
            .collect()
    }

    /// Append arbitrary text, wrapping it into as many lines as needed.
    pub fn append_text(&mut self, text: &str, how: Justify) {
        for line in self.wrapped(text, how) {
            self.push_bottom(line);
        }
    }

    /// Prepend arbitrary text, wrapping it into as many lines as needed.
    ///
    /// The wrapped lines keep their reading order above the old content.
    pub fn prepend_text(&mut self, text: &str, how: Justify) {
        for line in self.wrapped(text, how).into_iter().rev() {
            self.push_top(line);
        }
    }

    /// Replace the whole buffer from multi-line text.
    ///
    /// Each line is fitted to the width; missing rows are blank and rows
    /// beyond the height are dropped.
    pub fn update_content(&mut self, text: &str) {
        let width = usize::from(self.area.width);
        let height = usize::from(self.area.height);
        let mut lines: VecDeque<String> = text
            .lines()
            .take(height)
            .map(|line| fit_to_width(&replace_controls(line), width))
            .collect();
        lines.resize(height, blank_line(self.area.width));
        self.lines = lines;
    }

    /// Replace the buffer as-is. The caller is responsible for providing
    /// `height` lines of the right width.
    pub fn update_buffer(&mut self, lines: Vec<String>) {
        self.lines = lines.into();
    }

    /// Write the window: for each row, a cursor move then the line.
    ///
    /// Missing rows are drawn blank. Nothing is flushed.
    pub fn draw_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.draw_rows(out, |out, line| out.write_all(line.as_bytes()))
    }

    pub(crate) fn draw_rows<W, F>(&self, out: &mut W, mut draw_line: F) -> io::Result<()>
    where
        W: Write + ?Sized,
        F: FnMut(&mut W, &str) -> io::Result<()>,
    {
        tracing::trace!(
            x = self.area.x,
            y = self.area.y,
            width = self.area.width,
            height = self.area.height,
            "window draw"
        );
        let blank = blank_line(self.area.width);
        for row in 0..self.area.height {
            ansi::cup(out, self.area.y.saturating_add(row), self.area.x)?;
            let line = self.lines.get(usize::from(row)).unwrap_or(&blank);
            draw_line(out, line)?;
        }
        Ok(())
    }

    /// The exact bytes [`draw_to`](Self::draw_to) would write.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writes into a Vec cannot fail.
        let _ = self.draw_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the window to stdout without flushing.
    pub fn draw(&self) -> io::Result<()> {
        self.draw_to(&mut io::stdout().lock())
    }

    pub(crate) fn split_rects(
        &self,
        direction: Direction,
        directives: impl IntoIterator<Item = SplitDirective>,
    ) -> Result<Vec<Rect>, LayoutError> {
        let rects = Split::vertical()
            .direction(direction)
            .directives(directives)
            .split(self.area)?;
        tracing::debug!(
            parent = ?self.area,
            children = rects.len(),
            "window split"
        );
        Ok(rects)
    }

    /// Split into windows stacked top to bottom, one per resolved segment.
    ///
    /// The new windows are blank; this window's content is not carried.
    pub fn hsplit(
        &self,
        directives: impl IntoIterator<Item = SplitDirective>,
    ) -> Result<Vec<Window>, LayoutError> {
        Ok(self
            .split_rects(Direction::Vertical, directives)?
            .into_iter()
            .map(Window::from_rect)
            .collect())
    }

    /// Split into windows side by side, left to right.
    ///
    /// The new windows are blank; this window's content is not carried.
    pub fn vsplit(
        &self,
        directives: impl IntoIterator<Item = SplitDirective>,
    ) -> Result<Vec<Window>, LayoutError> {
        Ok(self
            .split_rects(Direction::Horizontal, directives)?
            .into_iter()
            .map(Window::from_rect)
            .collect())
    }
}

fn blank_line(width: u16) -> String {
    " ".repeat(usize::from(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use btui_layout::SplitDirective::{Cells, Ratio, Remaining};
    use tracing_test::traced_test;

    fn rows(window: &Window) -> Vec<&str> {
        window.lines().collect()
    }

    #[test]
    fn new_window_is_blank() {
        let window = Window::new(2, 3, 4, 2);
        assert_eq!(rows(&window), vec!["    ", "    "]);
        assert_eq!(window.area(), Rect::new(2, 3, 4, 2));
    }

    #[test]
    fn append_scrolls_up() {
        let mut window = Window::new(0, 0, 3, 2);
        window.append_line("a", Justify::Left).unwrap();
        window.append_line("b", Justify::Left).unwrap();
        window.append_line("c", Justify::Left).unwrap();
        assert_eq!(rows(&window), vec!["b  ", "c  "]);
    }

    #[test]
    fn prepend_scrolls_down() {
        let mut window = Window::new(0, 0, 3, 2);
        window.prepend_line("a", Justify::Left).unwrap();
        window.prepend_line("b", Justify::Right).unwrap();
        assert_eq!(rows(&window), vec!["  b", "a  "]);
    }

    #[test]
    fn justification_pads_to_width() {
        let mut window = Window::new(0, 0, 5, 3);
        window.append_line("ab", Justify::Left).unwrap();
        window.append_line("ab", Justify::Center).unwrap();
        window.append_line("ab", Justify::Right).unwrap();
        assert_eq!(rows(&window), vec!["ab   ", " ab  ", "   ab"]);
    }

    #[test]
    fn too_long_line_rejected() {
        let mut window = Window::new(0, 0, 5, 2);
        let before = window.clone();
        let err = window.append_line("abcdef", Justify::Left).unwrap_err();
        assert_eq!(err, WindowError::LineTooLong { width: 6, max: 5 });
        assert_eq!(err.to_string(), "line (6) too wide, max (5)");
        assert!(window.prepend_line("abcdef", Justify::Left).is_err());
        assert_eq!(window, before);
    }

    #[test]
    fn control_characters_take_a_column() {
        let mut window = Window::new(0, 0, 3, 1);
        let err = window.append_line("\t\t\tabc", Justify::Left).unwrap_err();
        assert_eq!(err, WindowError::LineTooLong { width: 6, max: 3 });
        assert!(window.prepend_line("\r\r\r\r", Justify::Left).is_err());

        window.append_line("a\tb", Justify::Left).unwrap();
        assert_eq!(window.line(0), Some("a b"));
    }

    #[test]
    fn text_ops_replace_control_characters() {
        let mut window = Window::new(0, 0, 4, 2);
        window.append_text("\tab\r\tcd", Justify::Left);
        assert_eq!(rows(&window), vec!["ab  ", "cd  "]);
        assert!(rows(&window).iter().all(|l| visible_width(l) == 4));

        window.update_content("x\ty\x07z\nlong\tline");
        assert_eq!(rows(&window), vec!["x y ", "long"]);
    }

    #[test]
    fn styled_line_measured_without_escapes() {
        let mut window = Window::new(0, 0, 4, 1);
        window
            .append_line("\x1b[1mabcd\x1b[0m", Justify::Left)
            .unwrap();
        assert_eq!(window.line(0), Some("\x1b[1mabcd\x1b[0m"));
    }

    #[test]
    fn append_text_wraps() {
        let mut window = Window::new(0, 0, 5, 4);
        window.append_text("abcdef", Justify::Left);
        assert_eq!(rows(&window), vec!["     ", "     ", "abcde", "f    "]);
    }

    #[test]
    fn append_text_splits_on_newlines() {
        let mut window = Window::new(0, 0, 6, 3);
        window.append_text("one\ntwo", Justify::Right);
        assert_eq!(rows(&window), vec!["      ", "   one", "   two"]);
    }

    #[test]
    fn prepend_text_keeps_reading_order() {
        let mut window = Window::new(0, 0, 5, 3);
        window.append_line("old", Justify::Left).unwrap();
        window.prepend_text("hello world", Justify::Left);
        assert_eq!(rows(&window), vec!["hello", "world", "     "]);
    }

    #[test]
    fn update_content_fits_lines() {
        let mut window = Window::new(0, 0, 4, 3);
        window.update_content("ab\nabcdef");
        assert_eq!(rows(&window), vec!["ab  ", "abcd", "    "]);

        window.update_content("1\n2\n3\n4\n5");
        assert_eq!(rows(&window), vec!["1   ", "2   ", "3   "]);

        window.update_content("");
        assert_eq!(rows(&window), vec!["    "; 3]);
    }

    #[test]
    fn clear_blanks_lines() {
        let mut window = Window::new(0, 0, 2, 2);
        window.append_text("abcd", Justify::Left);
        window.clear();
        assert_eq!(rows(&window), vec!["  ", "  "]);
    }

    #[test]
    fn update_buffer_is_unchecked() {
        let mut window = Window::new(0, 0, 2, 2);
        window.update_buffer(vec!["way too long".to_string()]);
        assert_eq!(rows(&window), vec!["way too long"]);
        // Missing rows still draw blank.
        assert_eq!(window.render(), "\x1b[1;1Hway too long\x1b[2;1H  ");
    }

    #[test]
    fn render_positions_each_row() {
        let mut window = Window::new(3, 1, 2, 2);
        window.append_line("hi", Justify::Left).unwrap();
        assert_eq!(window.render(), "\x1b[2;4H  \x1b[3;4Hhi");
    }

    #[test]
    fn render_is_stable() {
        let mut window = Window::new(0, 0, 8, 3);
        window.append_text("some text that wraps", Justify::Center);
        assert_eq!(window.render(), window.render());
    }

    #[test]
    fn zero_height_window_ignores_content() {
        let mut window = Window::new(0, 0, 5, 0);
        window.append_line("a", Justify::Left).unwrap();
        window.append_text("abc", Justify::Left);
        assert_eq!(window.lines().len(), 0);
        assert_eq!(window.render(), "");
    }

    #[test]
    fn zero_width_window_holds_empty_lines() {
        let mut window = Window::new(0, 0, 0, 2);
        window.append_text("abc", Justify::Left);
        assert_eq!(rows(&window), vec!["", ""]);
        assert!(window.append_line("a", Justify::Left).is_err());
        window.append_line("", Justify::Left).unwrap();
    }

    #[test]
    fn hsplit_header_body_footer() {
        let window = Window::new(0, 0, 50, 25);
        let panes = window.hsplit([Cells(1), Remaining, Cells(1)]).unwrap();
        let areas: Vec<Rect> = panes.iter().map(Window::area).collect();
        assert_eq!(
            areas,
            vec![
                Rect::new(0, 0, 50, 1),
                Rect::new(0, 1, 50, 23),
                Rect::new(0, 24, 50, 1),
            ]
        );
        assert_eq!(panes[1].lines().len(), 23);
    }

    #[test]
    fn vsplit_ratio() {
        let window = Window::new(0, 0, 50, 25);
        let panes = window.vsplit([Ratio(0.2), Remaining]).unwrap();
        let widths: Vec<u16> = panes.iter().map(Window::width).collect();
        assert_eq!(widths, vec![10, 40]);
        assert_eq!(panes[1].x(), 10);
    }

    #[test]
    fn hsplit_ratio_remaining_cells() {
        let window = Window::new(0, 0, 50, 25);
        let heights: Vec<u16> = window
            .hsplit([Ratio(0.2), Remaining, Cells(1)])
            .unwrap()
            .iter()
            .map(Window::height)
            .collect();
        assert_eq!(heights, vec![5, 19, 1]);
    }

    #[test]
    fn split_children_are_blank() {
        let mut window = Window::new(0, 0, 4, 4);
        window.append_text("content", Justify::Left);
        for child in window.hsplit([Remaining, Remaining]).unwrap() {
            assert!(child.lines().all(|line| line == "    "));
        }
    }

    #[test]
    fn over_allocated_split_fails() {
        let window = Window::new(0, 0, 10, 10);
        assert!(matches!(
            window.vsplit([Cells(6), Cells(6)]),
            Err(LayoutError::OverAllocatedSplit { .. })
        ));
    }

    #[traced_test]
    #[test]
    fn split_is_logged() {
        let window = Window::new(0, 0, 10, 10);
        let _ = window.hsplit([Cells(3)]);
        assert!(logs_contain("window split"));
    }
}
