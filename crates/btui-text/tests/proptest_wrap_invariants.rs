//! Property-based invariant tests for wrapping and justification.
//!
//! 1. Wrapping never produces a line wider than the target.
//! 2. Wrapping keeps every non-whitespace grapheme, in order.
//! 3. Justified lines are exactly the target width.
//! 4. `fit_to_width` always lands on the target width.

use btui_core::text_width::{strip_ansi, visible_width};
use btui_text::{Justify, fit_to_width, justify, wrap_text};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_justify() -> impl Strategy<Value = Justify> {
    prop_oneof![
        Just(Justify::Left),
        Just(Justify::Center),
        Just(Justify::Right),
    ]
}

fn arb_styled_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,12}",
            Just(" ".to_string()),
            Just("\x1b[1m".to_string()),
            Just("\x1b[0m".to_string()),
        ],
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wrapping_respects_width(text in arb_styled_text(), width in 1usize..30) {
        for line in wrap_text(&text, width) {
            prop_assert!(
                visible_width(&line) <= width,
                "line {:?} exceeds width {}", line, width
            );
        }
    }

    #[test]
    fn wrapping_preserves_content(text in arb_styled_text(), width in 1usize..30) {
        let lines = wrap_text(&text, width);
        let rejoined: String = lines.concat();
        prop_assert_eq!(
            strip_ansi(&rejoined).replace(' ', ""),
            strip_ansi(&text).replace(' ', "")
        );
    }

    #[test]
    fn justified_lines_fill_width(
        line in "[a-z]{0,20}",
        width in 20usize..40,
        how in arb_justify(),
    ) {
        prop_assert_eq!(visible_width(&justify(&line, width, how)), width);
    }

    #[test]
    fn fit_lands_on_width(line in arb_styled_text(), width in 0usize..30) {
        prop_assert_eq!(visible_width(&fit_to_width(&line, width)), width);
    }
}
