#![forbid(unsafe_code)]

//! Word wrapping for fixed-width panes.
//!
//! Lines break at whitespace when they can. A word wider than the pane is
//! broken between graphemes. Inline CSI sequences stay whole and count as
//! zero columns, so styled text wraps like plain text.
//!
//! ```
//! use btui_text::wrap::wrap_text;
//!
//! assert_eq!(wrap_text("Hello world foo bar", 10), vec!["Hello", "world foo", "bar"]);
//! assert_eq!(wrap_text("Supercalifragilistic", 10), vec!["Supercalif", "ragilistic"]);
//! ```

use btui_core::text_width::{AnsiSegment, ansi_segments, grapheme_width};
use unicode_segmentation::UnicodeSegmentation;

/// Wrap `text` to `width` visible columns.
///
/// `\n` and `\r\n` always break. Leading and trailing whitespace is
/// dropped from every produced line. Always returns at least one line; a
/// zero width returns the text unchanged.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    text.split('\n')
        .flat_map(|raw| {
            let paragraph = raw.strip_suffix('\r').unwrap_or(raw);
            LineBuilder::new(width).wrap(paragraph)
        })
        .collect()
}

/// An indivisible piece of text: one grapheme, or one escape sequence.
#[derive(Debug, Clone, Copy)]
struct Unit<'a> {
    text: &'a str,
    width: usize,
    escape: bool,
}

impl Unit<'_> {
    fn is_whitespace(&self) -> bool {
        !self.escape && self.text.chars().all(char::is_whitespace)
    }
}

fn units(text: &str) -> Vec<Unit<'_>> {
    let mut out = Vec::with_capacity(text.len());
    for segment in ansi_segments(text) {
        match segment {
            AnsiSegment::Escape(seq) => out.push(Unit {
                text: seq,
                width: 0,
                escape: true,
            }),
            AnsiSegment::Text(chunk) => {
                out.extend(chunk.graphemes(true).map(|g| Unit {
                    text: g,
                    width: grapheme_width(g),
                    escape: false,
                }));
            }
        }
    }
    out
}

/// Group units into runs of whitespace and runs of everything else.
/// Escapes join the run they sit in.
fn words<'a>(units: &[Unit<'a>]) -> Vec<Vec<Unit<'a>>> {
    let mut runs: Vec<Vec<Unit<'a>>> = Vec::new();
    let mut blank = false;
    for &unit in units {
        if !unit.escape {
            let is_ws = unit.is_whitespace();
            if is_ws != blank || runs.is_empty() {
                runs.push(Vec::new());
                blank = is_ws;
            }
        } else if runs.is_empty() {
            runs.push(Vec::new());
        }
        if let Some(run) = runs.last_mut() {
            run.push(unit);
        }
    }
    runs
}

/// Accumulates one paragraph into finished lines.
struct LineBuilder {
    width: usize,
    lines: Vec<String>,
    line: String,
    used: usize,
}

impl LineBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            line: String::new(),
            used: 0,
        }
    }

    fn wrap(mut self, paragraph: &str) -> Vec<String> {
        for word in words(&units(paragraph)) {
            let word_width: usize = word.iter().map(|u| u.width).sum();
            if self.used + word_width <= self.width {
                self.push_all(&word);
                continue;
            }
            if !self.line.is_empty() {
                self.finish_line();
            }
            if word.iter().all(|u| u.escape || u.is_whitespace()) {
                // The break swallows the whitespace; escapes carry over.
                self.push_escapes(&word);
            } else if word_width <= self.width {
                self.push_all(&word);
            } else {
                self.push_hard(&word);
            }
        }
        if self.used > 0 || self.lines.is_empty() {
            self.finish_line();
        } else if let Some(last) = self.lines.last_mut() {
            // Escapes after the last break stay on the last line.
            last.push_str(&self.line);
        }
        self.lines
    }

    fn push_all(&mut self, word: &[Unit<'_>]) {
        for unit in word {
            self.line.push_str(unit.text);
            self.used += unit.width;
        }
    }

    fn push_escapes(&mut self, word: &[Unit<'_>]) {
        for unit in word.iter().filter(|u| u.escape) {
            self.line.push_str(unit.text);
        }
    }

    /// Break a word wider than the line between graphemes.
    fn push_hard(&mut self, word: &[Unit<'_>]) {
        for unit in word {
            if self.used + unit.width > self.width && self.used > 0 {
                self.finish_line();
            }
            self.line.push_str(unit.text);
            self.used += unit.width;
        }
    }

    fn finish_line(&mut self) {
        self.lines.push(self.line.trim().to_string());
        self.line.clear();
        self.used = 0;
    }
}

/// Truncate text to fit within `max_width` visible columns.
///
/// Respects grapheme boundaries. Escape sequences are kept even past the
/// cut, so a trailing SGR reset survives truncation.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut current_width = 0;
    let mut full = false;

    for unit in units(text) {
        if unit.escape {
            result.push_str(unit.text);
            continue;
        }
        if full {
            continue;
        }
        if current_width + unit.width > max_width {
            full = true;
            continue;
        }
        result.push_str(unit.text);
        current_width += unit.width;
    }

    result
}
