#![forbid(unsafe_code)]

//! Split geometry solver.
//!
//! A [`Split`] divides one extent of a parent rectangle into consecutive
//! segments described by [`SplitDirective`]s: absolute cell counts, ratios
//! of the parent, or a share of whatever is left. The result always tiles
//! the parent exactly, with no gap and no overlap.
//!
//! # Example
//!
//! ```
//! use btui_layout::{Rect, Split, SplitDirective};
//!
//! // Header, body, footer.
//! let rects = Split::vertical()
//!     .directives([
//!         SplitDirective::Cells(1),
//!         SplitDirective::Remaining,
//!         SplitDirective::Cells(1),
//!     ])
//!     .split(Rect::from_size(50, 25))
//!     .unwrap();
//! assert_eq!(rects[1], Rect::new(0, 1, 50, 23));
//! ```

use std::fmt;

pub use btui_core::geometry::Rect;

/// One size directive along the split axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitDirective {
    /// An exact size in cells. Zero is allowed.
    Cells(u16),
    /// A fraction of the parent extent, strictly between 0 and 1.
    Ratio(f32),
    /// An equal share of the space left after cells and ratios.
    Remaining,
}

impl From<u16> for SplitDirective {
    fn from(cells: u16) -> Self {
        Self::Cells(cells)
    }
}

impl From<f32> for SplitDirective {
    fn from(ratio: f32) -> Self {
        Self::Ratio(ratio)
    }
}

impl<T: Into<SplitDirective>> From<Option<T>> for SplitDirective {
    /// `None` means [`SplitDirective::Remaining`].
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Remaining, Into::into)
    }
}

/// The direction segments are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top to bottom: segments are rows, each spanning the full width.
    #[default]
    Vertical,
    /// Left to right: segments are columns, each spanning the full height.
    Horizontal,
}

/// Errors from resolving a split.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Cells plus floored ratios exceed the parent extent.
    OverAllocatedSplit {
        /// Cells requested by absolute and ratio directives.
        requested: u32,
        /// Parent extent along the split axis.
        available: u16,
    },
    /// A ratio outside `(0, 1)` or not finite.
    InvalidRatio(f32),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverAllocatedSplit {
                requested,
                available,
            } => write!(
                f,
                "not enough room to split: {requested} cells requested, {available} available"
            ),
            Self::InvalidRatio(ratio) => {
                write!(f, "split ratio {ratio} is not strictly between 0 and 1")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A split of one rectangle into consecutive segments.
#[derive(Debug, Clone, Default)]
pub struct Split {
    direction: Direction,
    directives: Vec<SplitDirective>,
}

impl Split {
    /// Create a new top-to-bottom split.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    /// Create a new left-to-right split.
    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    /// Set the layout direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the directives.
    #[must_use]
    pub fn directives(mut self, directives: impl IntoIterator<Item = SplitDirective>) -> Self {
        self.directives = directives.into_iter().collect();
        self
    }

    /// Resolve segment sizes for a parent extent.
    ///
    /// The result may have one more entry than there are directives: when
    /// no [`SplitDirective::Remaining`] is given and space is left over, a
    /// final segment absorbs it.
    pub fn solve(&self, extent: u16) -> Result<Vec<u16>, LayoutError> {
        solve_sizes(&self.directives, extent)
    }

    /// Split `area` into rectangles, in declaration order.
    pub fn split(&self, area: Rect) -> Result<Vec<Rect>, LayoutError> {
        let extent = match self.direction {
            Direction::Horizontal => area.width,
            Direction::Vertical => area.height,
        };
        let sizes = self.solve(extent)?;
        tracing::debug!(
            direction = ?self.direction,
            extent,
            sizes = ?sizes,
            "split resolved"
        );
        Ok(self.sizes_to_rects(area, &sizes))
    }

    fn sizes_to_rects(&self, area: Rect, sizes: &[u16]) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(sizes.len());
        let mut current_pos = match self.direction {
            Direction::Horizontal => area.x,
            Direction::Vertical => area.y,
        };

        for &size in sizes {
            let rect = match self.direction {
                Direction::Horizontal => Rect::new(current_pos, area.y, size, area.height),
                Direction::Vertical => Rect::new(area.x, current_pos, area.width, size),
            };
            rects.push(rect);
            current_pos = current_pos.saturating_add(size);
        }

        rects
    }
}

/// Round `ratio * extent` half up.
fn ratio_cells(ratio: f32, extent: u16) -> u32 {
    (f64::from(ratio) * f64::from(extent) + 0.5).floor() as u32
}

/// Resolve `directives` against `extent`.
///
/// 1. Cells are taken as given. Each ratio is rounded half up, then
///    clamped so that it never eats room reserved by later cells.
/// 2. Cells plus floored ratios above `extent` is an error.
/// 3. The leftover is shared by the `Remaining` directives; the first
///    `leftover % k` of them get one extra cell. Without any `Remaining`,
///    a nonzero leftover becomes one trailing segment.
pub fn solve_sizes(directives: &[SplitDirective], extent: u16) -> Result<Vec<u16>, LayoutError> {
    let available = u32::from(extent);

    let mut requested = 0u32;
    for directive in directives {
        match *directive {
            SplitDirective::Cells(n) => requested = requested.saturating_add(u32::from(n)),
            SplitDirective::Ratio(r) => {
                if !r.is_finite() || r <= 0.0 || r >= 1.0 {
                    return Err(LayoutError::InvalidRatio(r));
                }
                requested = requested.saturating_add((f64::from(r) * f64::from(extent)).floor() as u32);
            }
            SplitDirective::Remaining => {}
        }
    }
    if requested > available {
        tracing::warn!(requested, available, "split over-allocated");
        return Err(LayoutError::OverAllocatedSplit {
            requested,
            available: extent,
        });
    }

    // Cells still to come after each position.
    let mut cells_after = vec![0u32; directives.len()];
    let mut acc = 0u32;
    for (i, directive) in directives.iter().enumerate().rev() {
        cells_after[i] = acc;
        if let SplitDirective::Cells(n) = *directive {
            acc += u32::from(n);
        }
    }

    let mut sizes = Vec::with_capacity(directives.len() + 1);
    let mut remaining_slots = Vec::new();
    let mut used = 0u32;
    for (i, directive) in directives.iter().enumerate() {
        let size = match *directive {
            SplitDirective::Cells(n) => u32::from(n),
            SplitDirective::Ratio(r) => {
                let room = available.saturating_sub(used + cells_after[i]);
                ratio_cells(r, extent).min(room)
            }
            SplitDirective::Remaining => {
                remaining_slots.push(i);
                0
            }
        };
        used += size;
        sizes.push(size);
    }

    let leftover = available - used;
    if remaining_slots.is_empty() {
        if leftover > 0 {
            sizes.push(leftover);
        }
    } else {
        let k = remaining_slots.len() as u32;
        let share = leftover / k;
        let extra = (leftover % k) as usize;
        for (n, &slot) in remaining_slots.iter().enumerate() {
            sizes[slot] = share + u32::from(n < extra);
        }
    }

    // Every size is bounded by `extent`, which fits in u16.
    Ok(sizes
        .into_iter()
        .map(|s| u16::try_from(s).unwrap_or(u16::MAX))
        .collect())
}
