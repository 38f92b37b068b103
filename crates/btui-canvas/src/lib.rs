#![forbid(unsafe_code)]

//! Sub-cell drawing for btui.
//!
//! [`Canvas`] packs a 2×4 grid of dots into each terminal cell and renders
//! every cell as one Braille pattern glyph. [`Plot`] maps a floating-point
//! coordinate rectangle onto a canvas so data can be drawn in its own units.

pub mod canvas;
pub mod plot;

pub use canvas::Canvas;
pub use plot::{Plot, PlotError};
