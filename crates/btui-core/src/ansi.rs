#![forbid(unsafe_code)]

//! ANSI escape sequence generation helpers.
//!
//! Pure byte-generation functions for the handful of control sequences btui
//! emits. No state is tracked here; callers decide when to emit what.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ n m` | SGR (Select Graphic Rendition) |
//! | CSI | `ESC [ row ; col H` | CUP (Cursor Position, 1-indexed) |
//! | CSI | `ESC [ 2 J` | ED (Erase Display) |
//! | CSI | `ESC [ ? 25 h/l` | Cursor show/hide |

use std::io::{self, Write};

// =============================================================================
// SGR (Select Graphic Rendition)
// =============================================================================

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// [`SGR_RESET`] as a string, for callers splicing text.
pub const SGR_RESET_STR: &str = "\x1b[0m";

/// SGR code for bold.
pub const SGR_BOLD: u8 = 1;
/// SGR code for faint (dim).
pub const SGR_FAINT: u8 = 2;
/// SGR code for italic.
pub const SGR_ITALIC: u8 = 3;
/// SGR code for underline.
pub const SGR_UNDERLINE: u8 = 4;
/// SGR code for slow blink.
pub const SGR_BLINK: u8 = 5;
/// SGR code for negative (reverse video).
pub const SGR_NEGATIVE: u8 = 7;
/// SGR code for crossed-out.
pub const SGR_CROSSED: u8 = 9;

/// Write SGR reset sequence.
#[inline]
pub fn sgr_reset<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_RESET)
}

/// Write a single SGR code: `CSI code m`.
pub fn sgr_code<W: Write + ?Sized>(w: &mut W, code: u8) -> io::Result<()> {
    write!(w, "\x1b[{code}m")
}

/// Write several SGR codes as one sequence: `CSI a ; b ; ... m`.
///
/// Emits nothing for an empty slice.
pub fn sgr_codes<W: Write + ?Sized>(w: &mut W, codes: &[u8]) -> io::Result<()> {
    let Some((first, rest)) = codes.split_first() else {
        return Ok(());
    };
    write!(w, "\x1b[{first}")?;
    for code in rest {
        write!(w, ";{code}")?;
    }
    w.write_all(b"m")
}

/// Write SGR sequence for true color foreground: `CSI 38;2;r;g;b m`
pub fn sgr_fg_rgb<W: Write + ?Sized>(w: &mut W, r: u8, g: u8, b: u8) -> io::Result<()> {
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Write SGR sequence for true color background: `CSI 48;2;r;g;b m`
pub fn sgr_bg_rgb<W: Write + ?Sized>(w: &mut W, r: u8, g: u8, b: u8) -> io::Result<()> {
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

// =============================================================================
// Cursor Positioning
// =============================================================================

/// CUP (Cursor Position): `CSI row ; col H` (1-indexed)
///
/// Row and col are 0-indexed input, converted to 1-indexed for ANSI.
pub fn cup<W: Write + ?Sized>(w: &mut W, row: u16, col: u16) -> io::Result<()> {
    write!(
        w,
        "\x1b[{};{}H",
        row.saturating_add(1),
        col.saturating_add(1)
    )
}

/// Hide cursor: `CSI ? 25 l`
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";

/// Show cursor: `CSI ? 25 h`
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";

/// Write hide cursor.
#[inline]
pub fn cursor_hide<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(CURSOR_HIDE)
}

/// Write show cursor.
#[inline]
pub fn cursor_show<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(CURSOR_SHOW)
}

// =============================================================================
// Erase Operations
// =============================================================================

/// ED (Erase Display), whole screen: `CSI 2 J`
pub const ERASE_DISPLAY: &[u8] = b"\x1b[2J";

/// Write erase of the entire display. The cursor does not move.
#[inline]
pub fn erase_display<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(ERASE_DISPLAY)
}
