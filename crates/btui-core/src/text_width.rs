#![forbid(unsafe_code)]

//! Display-width accounting.
//!
//! Every width decision in btui (does a line fit a pane, how much padding
//! does justification need, where does wrapping break) goes through this
//! module so that wide characters and embedded escape sequences are counted
//! the same way everywhere.
//!
//! Widths are measured per extended grapheme cluster. East-Asian
//! ambiguous-width characters count as one column unless `BTUI_CJK_WIDTH`
//! is set to `1`/`true`.

use std::borrow::Cow;
use std::sync::OnceLock;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Environment variable forcing ambiguous-width glyphs to two columns.
const ENV_CJK_WIDTH: &str = "BTUI_CJK_WIDTH";

/// How ambiguous-width characters are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidthPolicy {
    /// Treat East-Asian ambiguous-width characters as double-width.
    pub cjk: bool,
}

impl WidthPolicy {
    /// Narrow ambiguous characters (the usual western terminal behavior).
    pub const STANDARD: Self = Self { cjk: false };

    /// Wide ambiguous characters.
    pub const CJK: Self = Self { cjk: true };

    /// Read the policy from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read the policy using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cjk = get_env(ENV_CJK_WIDTH)
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(false);
        Self { cjk }
    }

    /// Process-wide policy, read from the environment once.
    #[must_use]
    pub fn current() -> Self {
        static POLICY: OnceLock<WidthPolicy> = OnceLock::new();
        *POLICY.get_or_init(Self::from_env)
    }

    /// Width of a single grapheme cluster.
    #[must_use]
    pub fn grapheme_width(self, grapheme: &str) -> usize {
        if grapheme.is_ascii() {
            return grapheme.bytes().filter(|b| is_printable_ascii(*b)).count().min(1);
        }
        if grapheme.chars().all(char::is_control) {
            return 0;
        }
        if self.cjk {
            grapheme.width_cjk()
        } else {
            grapheme.width()
        }
    }

    /// Width of `text` in terminal columns. Escape sequences are not
    /// recognized here; see [`visible_width`].
    #[must_use]
    pub fn display_width(self, text: &str) -> usize {
        if text.bytes().all(is_printable_ascii) {
            return text.len();
        }
        text.graphemes(true).map(|g| self.grapheme_width(g)).sum()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[inline]
fn is_printable_ascii(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

/// Width of a single grapheme cluster under the process-wide policy.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    WidthPolicy::current().grapheme_width(grapheme)
}

/// Width of `text` in terminal columns under the process-wide policy.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    WidthPolicy::current().display_width(text)
}

/// Width of `text` once CSI escape sequences are removed.
///
/// This is the width a pane cares about: inline SGR codes take no columns.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    let policy = WidthPolicy::current();
    ansi_segments(text)
        .map(|segment| match segment {
            AnsiSegment::Text(chunk) => policy.display_width(chunk),
            AnsiSegment::Escape(_) => 0,
        })
        .sum()
}

/// Remove CSI escape sequences (`ESC [ ... final` or the 8-bit `0x9B`
/// introducer) from `text`.
///
/// Incomplete sequences are left in place.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in ansi_segments(text) {
        if let AnsiSegment::Text(chunk) = segment {
            out.push_str(chunk);
        }
    }
    out
}

/// Replace every control character outside CSI sequences with a space.
///
/// Terminals move the cursor on tabs, newlines and the like, so a pane
/// cannot hold them and still know its width. After replacement every
/// column is accounted for by [`visible_width`].
///
/// ```
/// use btui_core::text_width::replace_controls;
///
/// assert_eq!(replace_controls("a\tb\x1b[1mc"), "a b\x1b[1mc");
/// ```
#[must_use]
pub fn replace_controls(text: &str) -> Cow<'_, str> {
    let has_control = ansi_segments(text).any(|segment| match segment {
        AnsiSegment::Text(chunk) => chunk.chars().any(char::is_control),
        AnsiSegment::Escape(_) => false,
    });
    if !has_control {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for segment in ansi_segments(text) {
        match segment {
            AnsiSegment::Text(chunk) => out.extend(
                chunk
                    .chars()
                    .map(|c| if c.is_control() { ' ' } else { c }),
            ),
            AnsiSegment::Escape(seq) => out.push_str(seq),
        }
    }
    Cow::Owned(out)
}

/// One run of a string split at CSI boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiSegment<'a> {
    /// Printable text (may still contain control characters).
    Text(&'a str),
    /// A complete CSI sequence, introducer through final byte.
    Escape(&'a str),
}

/// Iterate over text and escape runs of `text`.
///
/// ```
/// use btui_core::text_width::{AnsiSegment, ansi_segments};
///
/// let parts: Vec<_> = ansi_segments("a\x1b[1mb").collect();
/// assert_eq!(
///     parts,
///     vec![
///         AnsiSegment::Text("a"),
///         AnsiSegment::Escape("\x1b[1m"),
///         AnsiSegment::Text("b"),
///     ]
/// );
/// ```
#[must_use]
pub fn ansi_segments(text: &str) -> AnsiSegments<'_> {
    AnsiSegments { text, pos: 0 }
}

/// Iterator returned by [`ansi_segments`].
#[derive(Debug, Clone)]
pub struct AnsiSegments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for AnsiSegments<'a> {
    type Item = AnsiSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        if rest.is_empty() {
            return None;
        }

        if let Some(len) = csi_len(rest) {
            self.pos += len;
            return Some(AnsiSegment::Escape(&rest[..len]));
        }

        let mut end = rest.len();
        for (idx, ch) in rest.char_indices().skip(1) {
            if (ch == '\x1b' || ch == '\u{9b}') && csi_len(&rest[idx..]).is_some() {
                end = idx;
                break;
            }
        }
        self.pos += end;
        Some(AnsiSegment::Text(&rest[..end]))
    }
}

/// Byte length of the CSI sequence starting at the front of `s`, if any.
fn csi_len(s: &str) -> Option<usize> {
    const C1_CSI: &[u8] = "\u{9b}".as_bytes();

    let bytes = s.as_bytes();
    let mut i = if bytes.starts_with(b"\x1b[") || bytes.starts_with(C1_CSI) {
        2
    } else {
        return None;
    };

    // Parameter bytes, then intermediate bytes, then one final byte.
    while i < bytes.len() && (0x30..=0x3F).contains(&bytes[i]) {
        i += 1;
    }
    while i < bytes.len() && (0x20..=0x2F).contains(&bytes[i]) {
        i += 1;
    }
    if i < bytes.len() && (0x40..=0x7E).contains(&bytes[i]) {
        Some(i + 1)
    } else {
        None
    }
}
