#![forbid(unsafe_code)]

//! Windows with a persistent style.

use std::io::{self, Write};

use btui_core::ansi::SGR_RESET_STR;
use btui_layout::{Direction, LayoutError, Rect, SplitDirective};
use btui_style::Style;
use btui_text::Justify;

use crate::error::WindowError;
use crate::window::Window;

/// A [`Window`] whose every row is drawn with a [`Style`].
///
/// Lines may carry their own escape sequences. Any reset inside a line is
/// followed by the window style again, so the style survives inline
/// formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledWindow {
    window: Window,
    style: Style,
}

impl StyledWindow {
    /// Create a blank styled window.
    #[must_use]
    pub fn new(x: u16, y: u16, width: u16, height: u16, style: Style) -> Self {
        Self::from_window(Window::new(x, y, width, height), style)
    }

    /// Wrap an existing window, keeping its content.
    #[must_use]
    pub fn from_window(window: Window, style: Style) -> Self {
        Self { window, style }
    }

    /// The style applied to every row.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Replace the style. Content is unchanged.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// The underlying plain window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Mutable access to the underlying window.
    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Drop the style, keeping the content.
    pub fn into_window(self) -> Window {
        self.window
    }

    /// The window's rectangle.
    pub fn area(&self) -> Rect {
        self.window.area()
    }

    /// See [`Window::append_line`].
    pub fn append_line(&mut self, text: &str, how: Justify) -> Result<(), WindowError> {
        self.window.append_line(text, how)
    }

    /// See [`Window::prepend_line`].
    pub fn prepend_line(&mut self, text: &str, how: Justify) -> Result<(), WindowError> {
        self.window.prepend_line(text, how)
    }

    /// See [`Window::append_text`].
    pub fn append_text(&mut self, text: &str, how: Justify) {
        self.window.append_text(text, how);
    }

    /// See [`Window::prepend_text`].
    pub fn prepend_text(&mut self, text: &str, how: Justify) {
        self.window.prepend_text(text, how);
    }

    /// See [`Window::update_content`].
    pub fn update_content(&mut self, text: &str) {
        self.window.update_content(text);
    }

    /// See [`Window::update_buffer`].
    pub fn update_buffer(&mut self, lines: Vec<String>) {
        self.window.update_buffer(lines);
    }

    /// Blank every line. The style is kept.
    pub fn clear(&mut self) {
        self.window.clear();
    }

    /// Write the window with its style.
    ///
    /// Each row is a cursor move, the style prefix, the line with every
    /// reset followed by the prefix again, then a final reset.
    pub fn draw_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let prefix = self.style.sgr();
        let reapplied = format!("{SGR_RESET_STR}{prefix}");
        self.window.draw_rows(out, |out, line| {
            out.write_all(prefix.as_bytes())?;
            if prefix.is_empty() {
                out.write_all(line.as_bytes())?;
            } else {
                out.write_all(line.replace(SGR_RESET_STR, &reapplied).as_bytes())?;
            }
            out.write_all(SGR_RESET_STR.as_bytes())
        })
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

    fn split(
        &self,
        direction: Direction,
        directives: impl IntoIterator<Item = SplitDirective>,
    ) -> Result<Vec<StyledWindow>, LayoutError> {
        Ok(self
            .window
            .split_rects(direction, directives)?
            .into_iter()
            .map(|rect| StyledWindow::from_window(Window::from_rect(rect), self.style))
            .collect())
    }

    /// Split top to bottom. Every child inherits this window's style.
    pub fn hsplit(
        &self,
        directives: impl IntoIterator<Item = SplitDirective>,
    ) -> Result<Vec<StyledWindow>, LayoutError> {
        self.split(Direction::Vertical, directives)
    }

    /// Split left to right. Every child inherits this window's style.
    pub fn vsplit(
        &self,
        directives: impl IntoIterator<Item = SplitDirective>,
    ) -> Result<Vec<StyledWindow>, LayoutError> {
        self.split(Direction::Horizontal, directives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btui_layout::SplitDirective::{Cells, Remaining};
    use btui_style::Rgb;

    fn white_on_blue() -> Style {
        Style::new().fg(Rgb::WHITE).bg(Rgb::from_hex(0x0000ff))
    }

    #[test]
    fn render_wraps_each_row_in_style() {
        let mut window = StyledWindow::new(0, 0, 3, 1, white_on_blue());
        window.append_line("hi", Justify::Left).unwrap();
        assert_eq!(
            window.render(),
            "\x1b[1;1H\x1b[38;2;255;255;255m\x1b[48;2;0;0;255mhi \x1b[0m"
        );
    }

    #[test]
    fn inline_reset_reapplies_style() {
        let style = Style::new().bold();
        let mut window = StyledWindow::new(0, 0, 4, 1, style);
        window
            .append_line("\x1b[3ma\x1b[0mb", Justify::Left)
            .unwrap();
        assert_eq!(
            window.render(),
            "\x1b[1;1H\x1b[1m\x1b[3ma\x1b[0m\x1b[1mb  \x1b[0m"
        );
    }

    #[test]
    fn empty_style_still_resets() {
        let mut window = StyledWindow::new(1, 1, 2, 1, Style::new());
        window.append_line("ok", Justify::Left).unwrap();
        assert_eq!(window.render(), "\x1b[2;2Hok\x1b[0m");
    }

    #[test]
    fn blank_rows_are_styled() {
        let window = StyledWindow::new(0, 0, 2, 2, Style::new().underline());
        assert_eq!(
            window.render(),
            "\x1b[1;1H\x1b[4m  \x1b[0m\x1b[2;1H\x1b[4m  \x1b[0m"
        );
    }

    #[test]
    fn render_is_stable() {
        let mut window = StyledWindow::new(0, 0, 10, 4, white_on_blue());
        window.append_text("the quick brown fox", Justify::Center);
        assert_eq!(window.render(), window.render());
    }

    #[test]
    fn split_children_inherit_style() {
        let style = white_on_blue().bold();
        let window = StyledWindow::new(0, 0, 20, 10, style);
        let children = window.hsplit([Cells(1), Remaining]).unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.style() == style));
        assert_eq!(children[1].area(), Rect::new(0, 1, 20, 9));

        let columns = window.vsplit([Remaining, Remaining]).unwrap();
        assert_eq!(columns[0].area().width, 10);
        assert!(columns.iter().all(|c| c.style() == style));
    }

    #[test]
    fn restyling_child_leaves_siblings() {
        let window = StyledWindow::new(0, 0, 10, 4, Style::new().bold());
        let mut children = window.hsplit([Remaining, Remaining]).unwrap();
        children[0].set_style(Style::new().italic());
        assert_eq!(children[1].style(), Style::new().bold());
        assert_eq!(window.style(), Style::new().bold());
    }

    #[test]
    fn delegated_content_ops() {
        let mut window = StyledWindow::new(0, 0, 5, 2, Style::new());
        window.append_line("a", Justify::Right).unwrap();
        let lines: Vec<&str> = window.window().lines().collect();
        assert_eq!(lines, vec!["     ", "    a"]);
        window.prepend_text("top", Justify::Left);
        let lines: Vec<&str> = window.window().lines().collect();
        assert_eq!(lines, vec!["top  ", "     "]);
        assert!(window.append_line("toolong", Justify::Left).is_err());
        window.update_content("x");
        let lines: Vec<&str> = window.window().lines().collect();
        assert_eq!(lines, vec!["x    ", "     "]);
    }

    #[test]
    fn set_style_changes_output() {
        let mut window = StyledWindow::new(0, 0, 1, 1, Style::new());
        let before = window.render();
        window.set_style(Style::new().italic());
        assert_ne!(window.render(), before);
        assert!(window.render().contains("\x1b[3m"));
    }
}
