#![forbid(unsafe_code)]

//! Core: geometry, ANSI byte helpers, and display-width accounting.
//!
//! # Role in btui
//! `btui-core` is the leaf crate every other crate builds on. It owns the
//! [`geometry::Rect`] used by the split solver and window panes, the pure
//! escape-sequence writers used by styling and drawing, and the width rules
//! that decide how many terminal columns a string occupies.
//!
//! # Primary responsibilities
//! - **Rect**: absolute terminal rectangles (0-indexed, origin top-left).
//! - **ansi**: CUP/SGR/erase byte generation with no state tracking.
//! - **text_width**: grapheme-aware display width, ANSI stripping, and the
//!   ambiguous-width policy (`BTUI_CJK_WIDTH`).

pub mod ansi;
pub mod geometry;
pub mod text_width;
