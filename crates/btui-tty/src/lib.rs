#![forbid(unsafe_code)]

//! Terminal services for btui.
//!
//! - [`Terminal`]: cursor, screen, and color control written to any sink,
//!   plus size queries.
//! - [`Keyboard`]: single-key events delivered to listeners from a reader
//!   thread, with the terminal in cbreak mode while listening.
//! - [`on_interrupt`] and [`shutdown`]: restore the terminal when the
//!   process is asked to stop.
//!
//! Unix only for the termios and signal parts; elsewhere those degrade to
//! no-ops or `Unsupported` errors.

pub mod keyboard;
pub mod signal;
pub mod terminal;

pub use keyboard::{Key, KeyDecoder, Keyboard, decode_keys};
pub use signal::{InterruptGuard, on_interrupt, restore_terminal, shutdown};
pub use terminal::{Terminal, TerminalSize};
