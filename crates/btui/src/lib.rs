#![forbid(unsafe_code)]

//! btui public facade crate.
//!
//! Re-exports the drawing, layout, and window types from the internal crates
//! and offers a small prelude.
//!
//! ```
//! use btui::prelude::*;
//!
//! let screen = Window::new(0, 0, 40, 12);
//! let panes = screen.hsplit([1u16.into(), SplitDirective::Remaining, 1u16.into()])?;
//! assert_eq!(panes[1].height(), 10);
//!
//! let mut plot = Plot::new(20, 5, 0.0, -1.0, 1.0, 1.0)?;
//! plot.line(0.0, -1.0, 1.0, 1.0);
//! assert_eq!(plot.draw().lines().count(), 5);
//! # Ok::<(), btui::Error>(())
//! ```

pub mod error;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use btui_core::geometry::Rect;
pub use btui_core::text_width::{WidthPolicy, display_width, strip_ansi, visible_width};

// --- Style re-exports ------------------------------------------------------

pub use btui_style::{Rgb, Style, StyleFlags};

// --- Text re-exports -------------------------------------------------------

pub use btui_text::{Justify, fit_to_width, justify, truncate_to_width, wrap_text};

// --- Layout re-exports -----------------------------------------------------

pub use btui_layout::{Direction, LayoutError, Split, SplitDirective};

// --- Drawing re-exports ----------------------------------------------------

pub use btui_canvas::{Canvas, Plot, PlotError};

// --- Window re-exports -----------------------------------------------------

pub use btui_window::{Pane, StyledWindow, Window, WindowError};

// --- Terminal re-exports ---------------------------------------------------

#[cfg(feature = "tty")]
pub use btui_tty::{Key, Keyboard, Terminal, TerminalSize, on_interrupt, shutdown};

pub use btui_canvas as canvas;
pub use btui_core as core;
pub use btui_layout as layout;
pub use btui_style as style;
pub use btui_text as text;
#[cfg(feature = "tty")]
pub use btui_tty as tty;
pub use btui_window as window;

/// Common imports for day-to-day use.
pub mod prelude {
    pub use crate::{
        Canvas, Error, Justify, Pane, Plot, Rect, Result, Rgb, SplitDirective, Style, StyledWindow,
        Window,
    };

    #[cfg(feature = "tty")]
    pub use crate::{Key, Keyboard, Terminal};
}
