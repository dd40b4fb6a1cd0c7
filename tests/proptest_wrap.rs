//! Property-based tests for paragraph wrapping.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use optiwrap::knuth_plass::{self, fragment};
use optiwrap::{KnuthPlassOptions, Line, TerminalMeasure, Text, WrapOptions};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Paragraphs of ASCII words separated by runs of spaces.
fn paragraph() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{1,12}", " {1,3}"), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .flat_map(|(word, gap)| [word, gap])
            .collect::<String>()
    })
}

/// Paragraphs with exactly one space between words.
fn single_spaced() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,12}", 0..40).prop_map(|words| words.join(" "))
}

/// Paragraphs that may also start with spaces.
fn padded_paragraph() -> impl Strategy<Value = String> {
    (" {0,3}", paragraph()).prop_map(|(lead, body)| lead + &body)
}

fn non_space(s: &str) -> String {
    s.chars().filter(|&c| c != ' ').collect()
}

fn assert_offsets(text: &str, lines: &[Line]) -> Result<(), TestCaseError> {
    let chars: Vec<char> = text.chars().collect();
    for line in lines {
        prop_assert!(line.start < line.end);
        prop_assert!(line.end <= chars.len());
        let slice: String = chars[line.start..line.end].iter().collect();
        prop_assert_eq!(&slice, &line.content);
        prop_assert_eq!(line.char_len(), line.content.chars().count());
    }
    for pair in lines.windows(2) {
        prop_assert!(pair[0].end <= pair[1].start, "lines overlap");
    }
    Ok(())
}

// ============================================================================
// Knuth–Plass Properties
// ============================================================================

proptest! {
    /// Every non-space character appears exactly once, in order.
    #[test]
    fn knuth_plass_covers_text(text in padded_paragraph(), width in 1.0f64..60.0) {
        let lines = Text::terminal().wrap_knuth_plass(&text, &KnuthPlassOptions::new(width));
        let rejoined: String = lines.iter().map(|l| non_space(&l.content)).collect();
        prop_assert_eq!(rejoined, non_space(&text));
    }

    /// Line offsets locate each line's content in the original text.
    #[test]
    fn knuth_plass_offsets_slice_content(text in padded_paragraph(), width in 1.0f64..60.0) {
        let lines = Text::terminal().wrap_knuth_plass(&text, &KnuthPlassOptions::new(width));
        assert_offsets(&text, &lines)?;
    }

    /// Lines stay within the width limit unless they hold a single word.
    /// Space runs measure wider in the output than the one glue the search
    /// counts, so the bound is checked on single-spaced text.
    #[test]
    fn knuth_plass_soft_width_bound(
        text in single_spaced(),
        width in 4.0f64..60.0,
        tolerance in 0.0f64..3.0,
    ) {
        let options = KnuthPlassOptions::new(width).tolerance(tolerance);
        let limit = options.line_width_limit();
        prop_assert!(limit >= 2.0 * width);
        if tolerance >= 1.0 {
            prop_assert_eq!(limit, width * (1.0 + tolerance));
        }
        let lines = Text::terminal().wrap_knuth_plass(&text, &options);
        for line in &lines {
            prop_assert!(
                line.width <= limit || !line.content.contains(' '),
                "line {:?} is {} wide", line.content, line.width
            );
        }
    }

    /// Break positions strictly increase, start above zero and follow boxes.
    #[test]
    fn search_positions_are_monotonic(text in paragraph(), width in 1.0f64..60.0) {
        let fragments = fragment::build(&text, &TerminalMeasure::new(), false);
        if let Some(positions) = knuth_plass::search(&fragments, &KnuthPlassOptions::new(width)) {
            prop_assert!(!positions.is_empty());
            prop_assert!(positions[0] > 0);
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for &p in &positions {
                prop_assert!(p <= fragments.len());
                prop_assert!(!fragments[p - 1].is_glue);
            }
        }
    }

    /// Text that fits the width comes back as one trimmed line.
    #[test]
    fn short_text_is_one_line(text in "[a-z]{1,8}( [a-z]{1,8}){0,2}") {
        let width = text.chars().count() as f64 + 2.0;
        let lines = Text::terminal().wrap_knuth_plass(&text, &KnuthPlassOptions::new(width));
        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(&lines[0].content, &text);
    }

    /// Wrapping never panics, even for any Unicode text and odd widths.
    #[test]
    fn knuth_plass_never_panics(text in "\\PC{0,80}", width in -5.0f64..40.0) {
        let text_api = Text::terminal();
        let _ = text_api.wrap_knuth_plass(&text, &KnuthPlassOptions::new(width).hyphenate(true));
        let _ = text_api.wrap(&text, &WrapOptions::new(width).break_words(true));
    }
}

// ============================================================================
// First-fit Properties
// ============================================================================

proptest! {
    /// No line exceeds the width unless it is a single overlong word.
    #[test]
    fn first_fit_width_bound(text in padded_paragraph(), width in 1.0f64..60.0) {
        let lines = Text::terminal().wrap(&text, &WrapOptions::new(width));
        for line in &lines {
            prop_assert!(line.width <= width || !line.content.contains(' '));
        }
        let rejoined: String = lines.iter().map(|l| non_space(&l.content)).collect();
        prop_assert_eq!(rejoined, non_space(&text));
        assert_offsets(&text, &lines)?;
    }

    /// With `break_words`, only a single grapheme may exceed the width.
    #[test]
    fn first_fit_break_words_bound(text in paragraph(), width in 1.0f64..20.0) {
        let lines = Text::terminal().wrap(&text, &WrapOptions::new(width).break_words(true));
        for line in &lines {
            prop_assert!(line.width <= width || line.content.chars().count() == 1);
        }
        let rejoined: String = lines.iter().map(|l| non_space(&l.content)).collect();
        prop_assert_eq!(rejoined, non_space(&text));
    }
}
