//! High-level text facade.
//!
//! [`Text`] bundles a [`Measure`] with every wrapping entry point so callers
//! configure the unit once.
//!
//! ```
//! use optiwrap::{KnuthPlassOptions, Text, WrapAlgorithm, WrapOptions};
//!
//! let text = Text::terminal();
//! assert_eq!(text.width("Hello 世界"), 10.0);
//!
//! let paragraph = "The quick brown fox jumps over the lazy dog";
//! let greedy = text.wrap_with(paragraph, &WrapAlgorithm::FirstFit(WrapOptions::new(20.0)));
//! let optimal = text.wrap_with(
//!     paragraph,
//!     &WrapAlgorithm::KnuthPlass(KnuthPlassOptions::new(20.0)),
//! );
//! assert_eq!(greedy.len(), 3);
//! assert_eq!(optimal.len(), 2);
//! ```

use crate::error::Result;
use crate::knuth_plass::{self, KnuthPlassOptions};
use crate::line::Line;
use crate::measure::{Measure, TerminalMeasure};
use crate::unicode;
use crate::wrap::{WrapOptions, wrap_first_fit};

/// Which line breaker to run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WrapAlgorithm {
    /// Greedy, no look-ahead.
    FirstFit(WrapOptions),
    /// Whole-paragraph optimization.
    KnuthPlass(KnuthPlassOptions),
}

impl WrapAlgorithm {
    /// Target line width of either algorithm.
    #[must_use]
    pub const fn max_width(&self) -> f64 {
        match self {
            Self::FirstFit(options) => options.max_width,
            Self::KnuthPlass(options) => options.max_width,
        }
    }
}

/// Text measurement and wrapping with a fixed measure.
///
/// Holds no mutable state; a shared `Text` may wrap independent paragraphs
/// from many threads at once when `M` is `Sync`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Text<M = TerminalMeasure> {
    measure: M,
}

impl Text {
    /// Terminal cells, ambiguous-width characters narrow.
    #[must_use]
    pub const fn terminal() -> Self {
        Self::new(TerminalMeasure::new())
    }

    /// Terminal cells, ambiguous-width characters wide.
    #[must_use]
    pub const fn terminal_east_asian() -> Self {
        Self::new(TerminalMeasure::east_asian())
    }
}

impl<M> Text<M> {
    #[must_use]
    pub const fn new(measure: M) -> Self {
        Self { measure }
    }

    #[must_use]
    pub const fn measure(&self) -> &M {
        &self.measure
    }

    /// Extended grapheme clusters of `s`, the units a cursor or a forced
    /// word break moves by.
    #[must_use = "iterators are lazy"]
    pub fn graphemes<'s>(&self, s: &'s str) -> impl Iterator<Item = &'s str> + use<'s, M> {
        unicode::graphemes(s)
    }

    /// Number of extended grapheme clusters in `s`.
    #[must_use]
    pub fn grapheme_count(&self, s: &str) -> usize {
        unicode::graphemes(s).count()
    }
}

impl<M: Measure> Text<M> {
    /// Display width of `s`.
    #[must_use]
    pub fn width(&self, s: &str) -> f64 {
        self.measure.width(s)
    }

    /// Display width of the characters `start..end` of `s`. Indices are
    /// character positions and are clamped to the string.
    #[must_use]
    pub fn width_range(&self, s: &str, start: usize, end: usize) -> f64 {
        if start >= end {
            return 0.0;
        }
        let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(b, _)| b);
        self.measure.width(&s[byte_at(start)..byte_at(end)])
    }

    /// Greedy first-fit wrapping.
    #[must_use]
    pub fn wrap(&self, text: &str, options: &WrapOptions) -> Vec<Line> {
        wrap_first_fit(text, options, &self.measure)
    }

    /// Knuth–Plass wrapping with first-fit fallback.
    #[must_use]
    pub fn wrap_knuth_plass(&self, text: &str, options: &KnuthPlassOptions) -> Vec<Line> {
        knuth_plass::wrap_knuth_plass(text, options, &self.measure)
    }

    /// Knuth–Plass wrapping after validating `options`.
    pub fn try_wrap_knuth_plass(
        &self,
        text: &str,
        options: &KnuthPlassOptions,
    ) -> Result<Vec<Line>> {
        knuth_plass::try_wrap_knuth_plass(text, options, &self.measure)
    }

    /// Wrap with whichever algorithm `algorithm` names.
    #[must_use]
    pub fn wrap_with(&self, text: &str, algorithm: &WrapAlgorithm) -> Vec<Line> {
        match algorithm {
            WrapAlgorithm::FirstFit(options) => self.wrap(text, options),
            WrapAlgorithm::KnuthPlass(options) => self.wrap_knuth_plass(text, options),
        }
    }
}
