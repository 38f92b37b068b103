#![forbid(unsafe_code)]

//! Output-side terminal control.

use std::io::{self, Stdout, Write};

use btui_core::ansi;

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    pub columns: u16,
    pub lines: u16,
}

impl TerminalSize {
    /// Used when neither the terminal nor the environment knows better.
    pub const DEFAULT: Self = Self {
        columns: 80,
        lines: 24,
    };

    /// Query the controlling terminal, then `COLUMNS`/`LINES`, then
    /// [`DEFAULT`](Self::DEFAULT).
    #[must_use]
    pub fn query() -> Self {
        Self::from_tty()
            .or_else(Self::from_env)
            .unwrap_or(Self::DEFAULT)
    }

    /// Window size of `/dev/tty`, if there is one with a non-zero size.
    #[cfg(unix)]
    pub fn from_tty() -> Option<Self> {
        let tty = std::fs::File::open("/dev/tty").ok()?;
        let ws = rustix::termios::tcgetwinsize(&tty).ok()?;
        (ws.ws_col > 0 && ws.ws_row > 0).then_some(Self {
            columns: ws.ws_col,
            lines: ws.ws_row,
        })
    }

    #[cfg(not(unix))]
    pub fn from_tty() -> Option<Self> {
        None
    }

    /// Size from `COLUMNS` and `LINES`. Both must be set to positive numbers.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_env_with<F>(get_env: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str| {
            get_env(key)
                .and_then(|v| v.trim().parse::<u16>().ok())
                .filter(|&n| n > 0)
        };
        Some(Self {
            columns: parse("COLUMNS")?,
            lines: parse("LINES")?,
        })
    }
}

/// Cursor, screen, and color control over a byte sink.
///
/// Nothing is flushed implicitly; call [`flush`](Self::flush) once a frame
/// is complete.
#[derive(Debug)]
pub struct Terminal<W: Write = Stdout> {
    out: W,
}

impl Terminal<Stdout> {
    /// A terminal writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for Terminal<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Terminal<W> {
    /// A terminal writing to `out`.
    #[must_use]
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Erase the whole screen. The cursor does not move.
    pub fn clear(&mut self) -> io::Result<()> {
        ansi::erase_display(&mut self.out)
    }

    /// Move the cursor to column `x`, row `y` (0-indexed).
    pub fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        ansi::cup(&mut self.out, y, x)
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        ansi::cursor_hide(&mut self.out)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        ansi::cursor_show(&mut self.out)
    }

    pub fn reset_colors(&mut self) -> io::Result<()> {
        ansi::sgr_reset(&mut self.out)
    }

    /// Clear the screen, hide the cursor and move it to the top left.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        self.clear()?;
        self.hide_cursor()?;
        self.set_cursor(0, 0)
    }

    /// Reset colors and show the cursor.
    pub fn reset(&mut self) -> io::Result<()> {
        self.reset_colors()?;
        self.show_cursor()
    }

    /// Current terminal size. See [`TerminalSize::query`].
    pub fn size(&self) -> TerminalSize {
        TerminalSize::query()
    }

    pub fn columns(&self) -> u16 {
        self.size().columns
    }

    pub fn lines(&self) -> u16 {
        self.size().lines
    }
}
