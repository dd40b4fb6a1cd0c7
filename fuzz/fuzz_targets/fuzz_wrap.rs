//! Fuzz target for paragraph wrapping.
//!
//! Feeds arbitrary text and options to both line breakers. Neither may
//! panic, and every emitted line must be a slice of the input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use optiwrap::{KnuthPlassOptions, Line, PruneStrategy, Text, WrapOptions};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    width: f64,
    tolerance: f64,
    hyphenate: bool,
    line_and_fitness: bool,
    break_words: bool,
}

fn check_offsets(text: &str, lines: &[Line]) {
    let chars: Vec<char> = text.chars().collect();
    for line in lines {
        assert!(line.start <= line.end && line.end <= chars.len());
        let slice: String = chars[line.start..line.end].iter().collect();
        assert_eq!(slice, line.content);
    }
}

fuzz_target!(|input: Input<'_>| {
    // Keep the search bounded
    if input.text.len() > 4096 {
        return;
    }

    let prune = if input.line_and_fitness {
        PruneStrategy::LineAndFitness
    } else {
        PruneStrategy::LineNumber
    };
    let options = KnuthPlassOptions::new(input.width)
        .tolerance(input.tolerance)
        .hyphenate(input.hyphenate)
        .prune(prune);

    let text = Text::terminal();
    let lines = text.wrap_knuth_plass(input.text, &options);
    if options.validate().is_ok() {
        check_offsets(input.text, &lines);
    }

    let lines = text.wrap(input.text, &WrapOptions::new(input.width).break_words(input.break_words));
    if input.width.is_finite() && input.width > 0.0 {
        check_offsets(input.text, &lines);
    }
});
