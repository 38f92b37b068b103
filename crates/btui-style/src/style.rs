#![forbid(unsafe_code)]

//! Style values and SGR generation.
//!
//! A [`Style`] is a plain `Copy` value. Handing it to a split child copies
//! it; later changes to the parent never reach the child.
//!
//! # Example
//!
//! ```
//! use btui_style::{Rgb, Style};
//!
//! let style = Style::new().fg(Rgb::from_hex(0xa9b1d6)).bold();
//! assert_eq!(style.paint("hi"), "\x1b[38;2;169;177;214m\x1b[1mhi\x1b[0m");
//! ```

use std::io::{self, Write};

use btui_core::ansi;

use crate::color::Rgb;

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD      = 0b0000_0001;
        /// Faint / decreased intensity.
        const FAINT     = 0b0000_0010;
        /// Italic text.
        const ITALIC    = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
        /// Blinking text.
        const BLINK     = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const NEGATIVE  = 0b0010_0000;
        /// Crossed-out text.
        const CROSSED   = 0b0100_0000;
    }
}

/// Flag to SGR code, in emission order.
const FLAG_CODES: [(StyleFlags, u8); 7] = [
    (StyleFlags::BOLD, ansi::SGR_BOLD),
    (StyleFlags::FAINT, ansi::SGR_FAINT),
    (StyleFlags::ITALIC, ansi::SGR_ITALIC),
    (StyleFlags::UNDERLINE, ansi::SGR_UNDERLINE),
    (StyleFlags::BLINK, ansi::SGR_BLINK),
    (StyleFlags::NEGATIVE, ansi::SGR_NEGATIVE),
    (StyleFlags::CROSSED, ansi::SGR_CROSSED),
];

/// A set of style options applied to a whole string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Rgb>,
    /// Background color.
    pub bg: Option<Rgb>,
    /// Text attributes.
    pub flags: StyleFlags,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg(mut self, color: impl Into<Rgb>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, color: impl Into<Rgb>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Add attribute flags.
    #[must_use]
    pub fn add(mut self, flags: StyleFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Add [`StyleFlags::BOLD`].
    #[must_use]
    pub fn bold(self) -> Self {
        self.add(StyleFlags::BOLD)
    }

    /// Add [`StyleFlags::FAINT`].
    #[must_use]
    pub fn faint(self) -> Self {
        self.add(StyleFlags::FAINT)
    }

    /// Add [`StyleFlags::ITALIC`].
    #[must_use]
    pub fn italic(self) -> Self {
        self.add(StyleFlags::ITALIC)
    }

    /// Add [`StyleFlags::UNDERLINE`].
    #[must_use]
    pub fn underline(self) -> Self {
        self.add(StyleFlags::UNDERLINE)
    }

    /// Add [`StyleFlags::BLINK`].
    #[must_use]
    pub fn blink(self) -> Self {
        self.add(StyleFlags::BLINK)
    }

    /// Add [`StyleFlags::NEGATIVE`].
    #[must_use]
    pub fn negative(self) -> Self {
        self.add(StyleFlags::NEGATIVE)
    }

    /// Add [`StyleFlags::CROSSED`].
    #[must_use]
    pub fn crossed(self) -> Self {
        self.add(StyleFlags::CROSSED)
    }

    /// Overlay `other` on top of `self`: colors set in `other` win and
    /// flags are unioned.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            flags: self.flags | other.flags,
        }
    }

    /// True when no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.flags.is_empty()
    }

    /// Write the SGR prefix for this style.
    ///
    /// Foreground and background are separate true-color sequences; flags
    /// share one trailing sequence. An empty style writes nothing.
    pub fn write_sgr<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        if let Some(Rgb { r, g, b }) = self.fg {
            ansi::sgr_fg_rgb(w, r, g, b)?;
        }
        if let Some(Rgb { r, g, b }) = self.bg {
            ansi::sgr_bg_rgb(w, r, g, b)?;
        }
        let mut codes = [0u8; FLAG_CODES.len()];
        let mut n = 0;
        for (flag, code) in FLAG_CODES {
            if self.flags.contains(flag) {
                codes[n] = code;
                n += 1;
            }
        }
        ansi::sgr_codes(w, &codes[..n])
    }

    /// The SGR prefix as a string.
    #[must_use]
    pub fn sgr(&self) -> String {
        let mut buf = Vec::with_capacity(40);
        // Writes into a Vec cannot fail.
        let _ = self.write_sgr(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Decorate `text`: prefix, text, then an SGR reset.
    ///
    /// The reset is appended even for an empty style.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        let prefix = self.sgr();
        let mut out = String::with_capacity(prefix.len() + text.len() + ansi::SGR_RESET_STR.len());
        out.push_str(&prefix);
        out.push_str(text);
        out.push_str(ansi::SGR_RESET_STR);
        out
    }
}

impl From<StyleFlags> for Style {
    fn from(flags: StyleFlags) -> Self {
        Self::new().add(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_has_no_prefix() {
        let style = Style::new();
        assert!(style.is_empty());
        assert_eq!(style.sgr(), "");
        assert_eq!(style.paint("x"), "x\x1b[0m");
    }

    #[test]
    fn colors_emit_truecolor_sequences() {
        let style = Style::new().fg(Rgb::from_hex(0xa9b1d6)).bg(Rgb::from_hex(0x1a1b26));
        assert_eq!(
            style.sgr(),
            "\x1b[38;2;169;177;214m\x1b[48;2;26;27;38m"
        );
    }

    #[test]
    fn flags_share_one_sequence_in_code_order() {
        let style = Style::new().crossed().bold().underline();
        assert_eq!(style.sgr(), "\x1b[1;4;9m");
    }

    #[test]
    fn all_flags() {
        let style = Style::from(StyleFlags::all());
        assert_eq!(style.sgr(), "\x1b[1;2;3;4;5;7;9m");
    }

    #[test]
    fn paint_wraps_with_reset() {
        let style = Style::new().fg(Rgb::new(1, 2, 3)).italic();
        assert_eq!(style.paint("ok"), "\x1b[38;2;1;2;3m\x1b[3mok\x1b[0m");
    }

    #[test]
    fn patch_prefers_overlay_colors() {
        let base = Style::new().fg(Rgb::WHITE).bg(Rgb::BLACK).bold();
        let over = Style::new().fg(Rgb::new(9, 9, 9)).italic();
        let merged = base.patch(over);
        assert_eq!(merged.fg, Some(Rgb::new(9, 9, 9)));
        assert_eq!(merged.bg, Some(Rgb::BLACK));
        assert_eq!(merged.flags, StyleFlags::BOLD | StyleFlags::ITALIC);
    }

    #[test]
    fn copy_is_a_snapshot() {
        let mut parent = Style::new().fg(Rgb::WHITE);
        let child = parent;
        parent = parent.bg(Rgb::BLACK);
        assert_eq!(child.bg, None);
        assert_eq!(parent.bg, Some(Rgb::BLACK));
    }
}
