#![forbid(unsafe_code)]

//! Window errors.

use std::fmt;

/// Errors from window content operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// A single line is wider than the window. Lines are never truncated
    /// silently; use the text operations to wrap instead.
    LineTooLong {
        /// Visible width of the rejected line.
        width: usize,
        /// Width of the window.
        max: u16,
    },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineTooLong { width, max } => {
                write!(f, "line ({width}) too wide, max ({max})")
            }
        }
    }
}

impl std::error::Error for WindowError {}
