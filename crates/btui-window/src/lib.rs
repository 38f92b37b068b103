#![forbid(unsafe_code)]

//! Text panes for btui.
//!
//! # Role in btui
//! A [`Window`] is a rectangle of the terminal holding exactly one line of
//! text per row. Content scrolls when lines are appended or prepended, and
//! a window can be split into independent child windows that tile it.
//! [`StyledWindow`] adds a [`Style`](btui_style::Style) applied on every
//! draw and inherited by its split children.
//!
//! Nothing here writes to the terminal unless asked: [`Window::render`]
//! builds the exact bytes, [`Window::draw_to`] writes them to any sink, and
//! [`Window::draw`] writes them to stdout without flushing.

pub mod error;
pub mod pane;
pub mod styled;
pub mod window;

pub use btui_layout::{LayoutError, Rect, SplitDirective};
pub use btui_text::Justify;
pub use error::WindowError;
pub use pane::Pane;
pub use styled::StyledWindow;
pub use window::Window;
