#![forbid(unsafe_code)]

//! Braille dot canvas.
//!
//! Each terminal cell holds a 2×4 block of dots:
//!
//! | Column 0 | Column 1 |
//! |----------|----------|
//! | dot 1    | dot 4    |
//! | dot 2    | dot 5    |
//! | dot 3    | dot 6    |
//! | dot 7    | dot 8    |
//!
//! A cell is stored as the 8-bit dot mask of its Braille pattern, so
//! rendering is `U+2800 + mask`. Coordinates are in dots with the origin
//! at the top left; anything off the grid is ignored.
//!
//! # Example
//!
//! ```
//! use btui_canvas::Canvas;
//!
//! let mut canvas = Canvas::new(2, 1);
//! canvas.line(0, 0, 3, 0);
//! assert_eq!(canvas.draw(), "\u{2809}\u{2809}");
//! ```

use btui_style::Style;

/// Bit index of each dot, as `DOT_BITS[column][row]` within a cell.
const DOT_BITS: [[u8; 4]; 2] = [
    [0, 1, 2, 6], // column 0: dots 1,2,3,7
    [3, 4, 5, 7], // column 1: dots 4,5,6,8
];

/// First code point of the Braille Patterns block.
const BRAILLE_BASE: u32 = 0x2800;

/// Dots per cell horizontally.
pub const DOTS_PER_COL: u32 = 2;
/// Dots per cell vertically.
pub const DOTS_PER_ROW: u32 = 4;

/// A drawing surface at 2× horizontal and 4× vertical cell resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    /// One dot mask per cell, row-major.
    cells: Vec<u8>,
    style: Option<Style>,
}

impl Canvas {
    /// Create a blank canvas `cols` cells wide and `rows` cells tall.
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![0; usize::from(cols) * usize::from(rows)],
            style: None,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Height in cells.
    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Width in dots.
    #[inline]
    pub fn width(&self) -> u32 {
        u32::from(self.cols) * DOTS_PER_COL
    }

    /// Height in dots.
    #[inline]
    pub fn height(&self) -> u32 {
        u32::from(self.rows) * DOTS_PER_ROW
    }

    /// Cell index and dot mask for a dot, or `None` when off the grid.
    #[inline]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let col = (x / DOTS_PER_COL) as usize;
        let row = (y / DOTS_PER_ROW) as usize;
        let bit = DOT_BITS[(x % DOTS_PER_COL) as usize][(y % DOTS_PER_ROW) as usize];
        Some((row * usize::from(self.cols) + col, 1 << bit))
    }

    /// Turn a dot on.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32) {
        if let Some((idx, mask)) = self.locate(x, y) {
            self.cells[idx] |= mask;
        }
    }

    /// Turn a dot off.
    #[inline]
    pub fn unset(&mut self, x: i32, y: i32) {
        if let Some((idx, mask)) = self.locate(x, y) {
            self.cells[idx] &= !mask;
        }
    }

    /// Flip a dot.
    #[inline]
    pub fn toggle(&mut self, x: i32, y: i32) {
        if let Some((idx, mask)) = self.locate(x, y) {
            self.cells[idx] ^= mask;
        }
    }

    /// Whether a dot is on. Off-grid dots read as off.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .is_some_and(|(idx, mask)| self.cells[idx] & mask != 0)
    }

    /// Turn every dot off. Dimensions and style are kept.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Dot mask of one cell, or `None` when off the grid.
    pub fn cell_mask(&self, col: u16, row: u16) -> Option<u8> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[usize::from(row) * usize::from(self.cols) + usize::from(col)])
    }

    /// Draw a line between two dots.
    ///
    /// Steps one dot at a time along the longer axis and rounds the other
    /// coordinate half up, which gives Bresenham's 8-connected line with
    /// both endpoints included. The segment is clipped to the grid first,
    /// so far-off endpoints cost no more than on-grid ones.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (x0, y0, x1, y1) = (i128::from(x0), i128::from(y0), i128::from(x1), i128::from(y1));
        let (w, h) = (i128::from(self.width()), i128::from(self.height()));

        // (major, minor) axes: the major axis advances every step.
        let x_major = (x1 - x0).abs() >= (y1 - y0).abs();
        let ((m0, m1, m_len), (n0, n1, n_len)) = if x_major {
            ((x0, x1, w), (y0, y1, h))
        } else {
            ((y0, y1, h), (x0, x1, w))
        };
        let (dm, dn) = ((m1 - m0).abs(), (n1 - n0).abs());
        let (sm, sn) = ((m1 - m0).signum(), (n1 - n0).signum());

        // Steps whose major coordinate is on the grid.
        let (mut lo, mut hi) = offset_range(m0, sm, m_len);
        lo = lo.max(0);
        hi = hi.min(dm);

        // Steps whose minor offset k(i) = round(i * dn / dm) is on the grid.
        let (k_lo, k_hi) = offset_range(n0, sn, n_len);
        if k_hi < 0 || (k_lo > 0 && dn == 0) {
            return;
        }
        if dn > 0 {
            if k_lo > 0 {
                lo = lo.max(div_ceil(2 * dm * k_lo - dm, 2 * dn));
            }
            hi = hi.min(div_ceil(2 * dm * k_hi + dm, 2 * dn) - 1);
        }

        let mut i = lo;
        while i <= hi {
            let k = if dm == 0 { 0 } else { (2 * i * dn + dm) / (2 * dm) };
            let (m, n) = (m0 + sm * i, n0 + sn * k);
            let (x, y) = if x_major { (m, n) } else { (n, m) };
            // Both lie inside the grid, which is at most u16::MAX * 4 dots.
            self.set(x as i32, y as i32);
            i += 1;
        }
    }

    /// Draw an axis-aligned rectangle outline.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.line(x, y, x + w - 1, y);
        self.line(x + w - 1, y, x + w - 1, y + h - 1);
        self.line(x + w - 1, y + h - 1, x, y + h - 1);
        self.line(x, y + h - 1, x, y);
    }

    /// Draw a circle outline using the midpoint algorithm.
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32) {
        if radius <= 0 {
            self.set(cx, cy);
            return;
        }

        let mut x = radius;
        let mut y = 0;
        let mut d = 1 - radius;

        while x >= y {
            self.plot_circle_octants(cx, cy, x, y);
            y += 1;
            if d < 0 {
                d += 2 * y + 1;
            } else {
                x -= 1;
                d += 2 * (y - x) + 1;
            }
        }
    }

    fn plot_circle_octants(&mut self, cx: i32, cy: i32, x: i32, y: i32) {
        self.set(cx + x, cy + y);
        self.set(cx - x, cy + y);
        self.set(cx + x, cy - y);
        self.set(cx - x, cy - y);
        self.set(cx + y, cy + x);
        self.set(cx - y, cy + x);
        self.set(cx + y, cy - x);
        self.set(cx - y, cy - x);
    }

    /// Style applied to the whole drawing, if any.
    pub fn style(&self) -> Option<Style> {
        self.style
    }

    /// Set or clear the whole-canvas style.
    pub fn set_style(&mut self, style: Option<Style>) {
        self.style = style;
    }

    /// Render one cell row. Empty cells are spaces.
    pub fn draw_row(&self, row: u16) -> String {
        let mut out = String::with_capacity(usize::from(self.cols) * 3);
        self.push_row(&mut out, row);
        out
    }

    fn push_row(&self, out: &mut String, row: u16) {
        if row >= self.rows {
            return;
        }
        let start = usize::from(row) * usize::from(self.cols);
        for &mask in &self.cells[start..start + usize::from(self.cols)] {
            out.push(glyph(mask));
        }
    }

    /// Render the canvas: one line per cell row, joined by `\n`.
    ///
    /// With a style set, the whole string is wrapped once.
    pub fn draw(&self) -> String {
        let rows = usize::from(self.rows);
        let mut out = String::with_capacity(rows * (usize::from(self.cols) * 3 + 1));
        for row in 0..self.rows {
            if row > 0 {
                out.push('\n');
            }
            self.push_row(&mut out, row);
        }
        match self.style {
            Some(style) => style.paint(&out),
            None => out,
        }
    }
}

/// The glyph for a dot mask. An empty mask is a space.
#[inline]
pub fn glyph(mask: u8) -> char {
    if mask == 0 {
        return ' ';
    }
    char::from_u32(BRAILLE_BASE + u32::from(mask)).unwrap_or(' ')
}

/// Offsets `o` for which `start + step * o` lies in `0..len`, as an
/// inclusive range. A zero step counts as forward.
fn offset_range(start: i128, step: i128, len: i128) -> (i128, i128) {
    if step < 0 {
        (start - (len - 1), start)
    } else {
        (-start, len - 1 - start)
    }
}

fn div_ceil(num: i128, den: i128) -> i128 {
    -(-num).div_euclid(den)
}
