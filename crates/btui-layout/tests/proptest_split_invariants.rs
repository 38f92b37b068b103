//! Property-based invariant tests for the split solver.
//!
//! 1. Successful splits sum exactly to the parent extent.
//! 2. Segments are contiguous, non-overlapping, and in declaration order.
//! 3. Cells directives are honored exactly.
//! 4. Remaining shares differ by at most one cell, larger shares first.
//! 5. Over-allocation is reported instead of producing panes.

use btui_layout::{Direction, LayoutError, Rect, Split, SplitDirective, solve_sizes};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_directive() -> impl Strategy<Value = SplitDirective> {
    prop_oneof![
        (0u16..20).prop_map(SplitDirective::Cells),
        (1u32..100).prop_map(|pct| SplitDirective::Ratio(pct as f32 / 100.0)),
        Just(SplitDirective::Remaining),
    ]
}

fn arb_directives() -> impl Strategy<Value = Vec<SplitDirective>> {
    prop::collection::vec(arb_directive(), 0..6)
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Vertical), Just(Direction::Horizontal)]
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sizes_sum_to_extent(directives in arb_directives(), extent in 0u16..200) {
        if let Ok(sizes) = solve_sizes(&directives, extent) {
            let total: u32 = sizes.iter().map(|&s| u32::from(s)).sum();
            prop_assert_eq!(total, u32::from(extent));
            prop_assert!(sizes.len() == directives.len() || sizes.len() == directives.len() + 1);
        }
    }

    #[test]
    fn cells_are_exact(directives in arb_directives(), extent in 0u16..200) {
        if let Ok(sizes) = solve_sizes(&directives, extent) {
            for (directive, size) in directives.iter().zip(&sizes) {
                if let SplitDirective::Cells(n) = *directive {
                    prop_assert_eq!(*size, n);
                }
            }
        }
    }

    #[test]
    fn remaining_shares_are_balanced(directives in arb_directives(), extent in 0u16..200) {
        if let Ok(sizes) = solve_sizes(&directives, extent) {
            let shares: Vec<u16> = directives
                .iter()
                .zip(&sizes)
                .filter(|(d, _)| matches!(d, SplitDirective::Remaining))
                .map(|(_, &s)| s)
                .collect();
            for pair in shares.windows(2) {
                prop_assert!(pair[0] >= pair[1]);
                prop_assert!(pair[0] - pair[1] <= 1);
            }
        }
    }

    #[test]
    fn rects_tile_parent(
        directives in arb_directives(),
        direction in arb_direction(),
        x in 0u16..50,
        y in 0u16..50,
        width in 0u16..120,
        height in 0u16..120,
    ) {
        let area = Rect::new(x, y, width, height);
        let split = Split::vertical().direction(direction).directives(directives);
        if let Ok(rects) = split.split(area) {
            let mut cursor = match direction {
                Direction::Vertical => area.y,
                Direction::Horizontal => area.x,
            };
            for rect in &rects {
                match direction {
                    Direction::Vertical => {
                        prop_assert_eq!(rect.y, cursor);
                        prop_assert_eq!((rect.x, rect.width), (area.x, area.width));
                        cursor += rect.height;
                    }
                    Direction::Horizontal => {
                        prop_assert_eq!(rect.x, cursor);
                        prop_assert_eq!((rect.y, rect.height), (area.y, area.height));
                        cursor += rect.width;
                    }
                }
            }
            let end = match direction {
                Direction::Vertical => area.bottom(),
                Direction::Horizontal => area.right(),
            };
            prop_assert_eq!(cursor, end);
            for (i, a) in rects.iter().enumerate() {
                for b in &rects[i + 1..] {
                    prop_assert!(!a.overlaps(b));
                }
            }
        }
    }

    #[test]
    fn overflowing_cells_are_rejected(extent in 0u16..100, extra in 1u16..50) {
        let result = solve_sizes(&[SplitDirective::Cells(extent + extra)], extent);
        let is_over_allocated = matches!(result, Err(LayoutError::OverAllocatedSplit { .. }));
        prop_assert!(is_over_allocated);
    }
}
