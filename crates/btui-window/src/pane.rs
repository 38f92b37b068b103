#![forbid(unsafe_code)]

use std::io::{self, Write};

use btui_layout::Rect;

use crate::styled::StyledWindow;
use crate::window::Window;

/// Anything that draws itself into a fixed terminal rectangle.
///
/// Lets callers keep plain and styled windows in one collection and redraw
/// them together.
pub trait Pane {
    /// The rectangle this pane occupies.
    fn area(&self) -> Rect;

    /// Write the pane's bytes to `out`.
    fn draw_to(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl Pane for Window {
    fn area(&self) -> Rect {
        Window::area(self)
    }

    fn draw_to(&self, out: &mut dyn Write) -> io::Result<()> {
        Window::draw_to(self, out)
    }
}

impl Pane for StyledWindow {
    fn area(&self) -> Rect {
        self.window().area()
    }

    fn draw_to(&self, out: &mut dyn Write) -> io::Result<()> {
        StyledWindow::draw_to(self, out)
    }
}
