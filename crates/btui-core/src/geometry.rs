#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle of terminal cells.
///
/// Uses terminal coordinates (0-indexed, origin at top-left). Zero-sized
/// rectangles are legal: a split may produce an empty pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether two rectangles share at least one cell.
    #[inline]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
    }

    #[test]
    fn rect_edges_saturate() {
        let rect = Rect::new(u16::MAX - 1, 0, 10, 1);
        assert_eq!(rect.right(), u16::MAX);
    }

    #[test]
    fn empty_rect() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, 0).is_empty());
        assert!(!Rect::from_size(1, 1).is_empty());
        assert_eq!(Rect::from_size(50, 25).area(), 1250);
    }

    #[test]
    fn adjacent_rects_do_not_overlap() {
        let header = Rect::new(0, 0, 50, 1);
        let body = Rect::new(0, 1, 50, 23);
        assert!(!header.overlaps(&body));
        assert!(body.overlaps(&Rect::new(10, 10, 2, 2)));
    }

    #[test]
    fn empty_rect_never_overlaps() {
        let empty = Rect::new(5, 5, 0, 3);
        assert!(!empty.overlaps(&Rect::from_size(20, 20)));
    }
}
