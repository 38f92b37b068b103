#![forbid(unsafe_code)]

//! Cartesian plotting on a [`Canvas`].
//!
//! A [`Plot`] owns a canvas and a logical rectangle `minx..=maxx`,
//! `miny..=maxy`. Logical points are scaled onto the dot grid with the
//! Y axis flipped, so larger `y` values are drawn higher up. `minx` maps to
//! the first dot column and `maxx` to the last; likewise `maxy` to the top
//! dot row and `miny` to the bottom one.

use std::fmt;

use crate::canvas::Canvas;

/// Errors from constructing a [`Plot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotError {
    /// The logical rectangle is empty, inverted, or not finite.
    InvalidRange {
        minx: f64,
        miny: f64,
        maxx: f64,
        maxy: f64,
    },
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange {
                minx,
                miny,
                maxx,
                maxy,
            } => write!(
                f,
                "invalid plot range: x {minx}..{maxx}, y {miny}..{maxy}"
            ),
        }
    }
}

impl std::error::Error for PlotError {}

/// A canvas addressed in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    canvas: Canvas,
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl Plot {
    /// Create a plot `cols` × `rows` cells covering the given range.
    ///
    /// Requires finite bounds with `minx < maxx` and `miny < maxy`.
    pub fn new(
        cols: u16,
        rows: u16,
        minx: f64,
        miny: f64,
        maxx: f64,
        maxy: f64,
    ) -> Result<Self, PlotError> {
        let finite = [minx, miny, maxx, maxy].iter().all(|v| v.is_finite());
        if !finite || minx >= maxx || miny >= maxy {
            return Err(PlotError::InvalidRange {
                minx,
                miny,
                maxx,
                maxy,
            });
        }
        Ok(Self {
            canvas: Canvas::new(cols, rows),
            minx,
            miny,
            maxx,
            maxy,
        })
    }

    /// Logical bounds as `(minx, miny, maxx, maxy)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.minx, self.miny, self.maxx, self.maxy)
    }

    /// The underlying canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access to the underlying canvas, e.g. to set a style.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Map a logical point to a dot, rounding to the nearest one.
    ///
    /// Returns `None` for non-finite input. Points outside the range map
    /// outside the grid.
    pub fn to_pixel(&self, x: f64, y: f64) -> Option<(i32, i32)> {
        let px = scale(x, self.minx, self.maxx, self.canvas.width());
        let py = scale(y, self.maxy, self.miny, self.canvas.height());
        Some((px?, py?))
    }

    /// Draw a point.
    pub fn point(&mut self, x: f64, y: f64) {
        if let Some((px, py)) = self.to_pixel(x, y) {
            self.canvas.set(px, py);
        }
    }

    /// Draw a line between two logical points.
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        if let (Some((px0, py0)), Some((px1, py1))) = (self.to_pixel(x0, y0), self.to_pixel(x1, y1))
        {
            self.canvas.line(px0, py0, px1, py1);
        }
    }

    /// Erase everything drawn so far.
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Render the plot. See [`Canvas::draw`].
    pub fn draw(&self) -> String {
        self.canvas.draw()
    }
}

/// Scale `v` from `from..to` onto `0..=dots - 1`.
///
/// `from > to` is allowed and flips the axis.
fn scale(v: f64, from: f64, to: f64, dots: u32) -> Option<i32> {
    let span = f64::from(dots.saturating_sub(1));
    let scaled = ((v - from) / (to - from) * span).round();
    // Clamp far-off points to just beyond the grid instead of saturating
    // onto its edge.
    scaled
        .is_finite()
        .then(|| scaled.clamp(-f64::from(dots) - 1.0, 2.0 * f64::from(dots) + 1.0) as i32)
}
