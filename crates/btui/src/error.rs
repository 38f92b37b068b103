#![forbid(unsafe_code)]

//! Unified error type.
//!
//! Each domain crate owns its error enum so callers can match on what
//! matters. [`Error`] wraps them all for applications that just want `?`.

use std::fmt;

use btui_canvas::PlotError;
use btui_layout::LayoutError;
use btui_window::WindowError;

/// Top-level error type for btui apps.
#[derive(Debug)]
pub enum Error {
    /// Split directives could not be resolved.
    Layout(LayoutError),
    /// A window content operation was rejected.
    Window(WindowError),
    /// Plot bounds were degenerate.
    Plot(PlotError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for btui APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout: {err}"),
            Self::Window(err) => write!(f, "window: {err}"),
            Self::Plot(err) => write!(f, "plot: {err}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Plot(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<WindowError> for Error {
    fn from(err: WindowError) -> Self {
        Self::Window(err)
    }
}

impl From<PlotError> for Error {
    fn from(err: PlotError) -> Self {
        Self::Plot(err)
    }
}
