#![forbid(unsafe_code)]

//! Text shaping for fixed-width panes.
//!
//! Everything here measures *visible* width: inline CSI sequences are carried
//! through untouched and count as zero columns, so styled text can be
//! wrapped, padded, and truncated like plain text.

pub mod justify;
pub mod wrap;

pub use justify::{Justify, fit_to_width, justify};
pub use wrap::{truncate_to_width, wrap_text};
