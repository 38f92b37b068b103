#![forbid(unsafe_code)]

//! Styling primitives for btui.
//!
//! # Role in btui
//! `btui-style` turns a small set of style options (foreground, background,
//! text attributes) into SGR-decorated strings. Styled windows and canvases
//! apply a [`Style`] once per draw; nothing here tracks terminal state.
//!
//! # This crate provides
//! - [`Rgb`] for 24-bit colors, constructible from packed `0xRRGGBB` values.
//! - [`StyleFlags`] for the text attributes btui emits.
//! - [`Style`] with builder setters, [`Style::sgr`] and [`Style::paint`].

/// 24-bit color type.
pub mod color;
/// Style values and SGR generation.
pub mod style;

pub use color::Rgb;
pub use style::{Style, StyleFlags};
