#![forbid(unsafe_code)]

//! Horizontal justification within a fixed width.

use std::fmt;
use std::str::FromStr;

use btui_core::text_width::visible_width;

use crate::wrap::truncate_to_width;

/// Horizontal alignment of a line inside its pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justify {
    /// Flush left, padded on the right.
    #[default]
    Left,
    /// Centered; an odd leftover column goes to the right.
    Center,
    /// Flush right, padded on the left.
    Right,
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

/// Error returned when parsing an unknown justification name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseJustifyError(String);

impl fmt::Display for ParseJustifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown justification: {:?}", self.0)
    }
}

impl std::error::Error for ParseJustifyError {}

impl FromStr for Justify {
    type Err = ParseJustifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(ParseJustifyError(s.to_string())),
        }
    }
}

/// Pad `line` with spaces to `width` visible columns.
///
/// Embedded escape sequences are kept and not counted. A line already at or
/// beyond `width` is returned unchanged; callers that need a hard limit check
/// the width first or use [`fit_to_width`].
#[must_use]
pub fn justify(line: &str, width: usize, justify: Justify) -> String {
    let visible = visible_width(line);
    let pad = width.saturating_sub(visible);
    if pad == 0 {
        return line.to_string();
    }

    let (left, right) = match justify {
        Justify::Left => (0, pad),
        Justify::Right => (pad, 0),
        Justify::Center => (pad / 2, pad - pad / 2),
    };

    let mut out = String::with_capacity(line.len() + pad);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(line);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

/// Truncate then left-justify `line` so it occupies exactly `width` columns.
#[must_use]
pub fn fit_to_width(line: &str, width: usize) -> String {
    if visible_width(line) > width {
        justify(&truncate_to_width(line, width), width, Justify::Left)
    } else {
        justify(line, width, Justify::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_pads_right() {
        assert_eq!(justify("ab", 5, Justify::Left), "ab   ");
    }

    #[test]
    fn right_pads_left() {
        assert_eq!(justify("ab", 5, Justify::Right), "   ab");
    }

    #[test]
    fn center_odd_leftover_goes_right() {
        assert_eq!(justify("ab", 5, Justify::Center), " ab  ");
        assert_eq!(justify("ab", 6, Justify::Center), "  ab  ");
    }

    #[test]
    fn exact_and_overlong_unchanged() {
        assert_eq!(justify("abc", 3, Justify::Center), "abc");
        assert_eq!(justify("abcd", 3, Justify::Right), "abcd");
    }

    #[test]
    fn padding_ignores_escapes() {
        let styled = "\x1b[1mab\x1b[0m";
        let out = justify(styled, 4, Justify::Left);
        assert_eq!(out, "\x1b[1mab\x1b[0m  ");
        assert_eq!(visible_width(&out), 4);
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(justify("\u{4F60}", 4, Justify::Right), "  \u{4F60}");
    }

    #[test]
    fn fit_truncates_and_pads() {
        assert_eq!(fit_to_width("hello world", 5), "hello");
        assert_eq!(fit_to_width("hi", 5), "hi   ");
        assert_eq!(fit_to_width("a\u{4F60}", 2), "a ");
    }

    #[test]
    fn parse_names() {
        assert_eq!("left".parse::<Justify>(), Ok(Justify::Left));
        assert_eq!(" Center ".parse::<Justify>(), Ok(Justify::Center));
        assert_eq!("right".parse::<Justify>(), Ok(Justify::Right));
        assert!("middle".parse::<Justify>().is_err());
        assert_eq!(Justify::Center.to_string(), "center");
    }
}
