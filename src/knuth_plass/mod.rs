//! Knuth–Plass optimal line breaking.
//!
//! Implements the paragraph breaker from TeX ("Breaking Paragraphs into
//! Lines", Knuth & Plass, 1981) in a simplified form: the only adjustment
//! is a scalar ratio of unused to available width, and the active set is
//! pruned to a bounded number of candidates.
//!
//! The pipeline is:
//!
//! 1. [`fragment::build`] splits the paragraph into boxes and glue.
//! 2. [`evaluate`] scores each candidate line (badness, fitness, demerits).
//! 3. [`search()`] finds the cheapest set of break positions.
//! 4. [`materialize()`] slices the paragraph at those positions.
//!
//! [`wrap_knuth_plass`] runs all four and falls back to
//! [`crate::wrap::wrap_first_fit`] when no feasible paragraph exists.
//!
//! ```
//! use optiwrap::knuth_plass::{KnuthPlassOptions, wrap_knuth_plass};
//! use optiwrap::TerminalMeasure;
//!
//! let lines = wrap_knuth_plass(
//!     "The quick brown fox jumps over the lazy dog",
//!     &KnuthPlassOptions::new(20.0),
//!     &TerminalMeasure::new(),
//! );
//! assert_eq!(lines[0].content, "The quick brown fox");
//! assert_eq!(lines[1].content, "jumps over the lazy dog");
//! ```

pub mod evaluate;
pub mod fragment;
mod materialize;
mod search;

pub use evaluate::{
    FITNESS_MISMATCH_DEMERITS, FitnessClass, INFEASIBLE_BADNESS, badness, demerits,
};
pub use fragment::Fragment;
pub use materialize::materialize;
pub use search::{Breakpoint, find_breakpoints, search};

use tracing::debug;

use crate::error::{Error, Result};
use crate::line::Line;
use crate::measure::Measure;
use crate::wrap::{WrapOptions, wrap_first_fit};

/// How the active set is thinned after each break position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PruneStrategy {
    /// Keep the cheapest candidate per line count.
    #[default]
    LineNumber,
    /// Keep the cheapest candidate per line count and fitness class. Closer
    /// to TeX; the active set grows by up to four times.
    LineAndFitness,
}

/// Knuth–Plass configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnuthPlassOptions {
    /// Target line width in measure units.
    pub max_width: f64,
    /// Largest acceptable adjustment ratio for an underfull line.
    ///
    /// Only looseness is bounded by this; any line may shrink to a ratio of
    /// `-1`, twice `max_width`. See [`KnuthPlassOptions::line_width_limit`].
    #[cfg_attr(feature = "serde", serde(default = "defaults::tolerance"))]
    pub tolerance: f64,
    /// Penalize adjacent lines whose fitness classes are more than one apart.
    #[cfg_attr(feature = "serde", serde(default = "defaults::enabled"))]
    pub fitness_class: bool,
    /// Allow breaks right after explicit hyphens inside words.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hyphenate: bool,
    /// Break penalty for a fragment ending in `-`.
    #[cfg_attr(feature = "serde", serde(default = "defaults::hyphen_penalty"))]
    pub hyphen_penalty: f64,
    /// Flat cost of every line; higher values favor fewer, fuller lines.
    #[cfg_attr(feature = "serde", serde(default = "defaults::line_penalty"))]
    pub line_penalty: f64,
    /// Which candidates survive each pruning step.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prune: PruneStrategy,
}

mod defaults {
    pub(super) const TOLERANCE: f64 = 1.0;
    pub(super) const HYPHEN_PENALTY: f64 = 50.0;
    pub(super) const LINE_PENALTY: f64 = 10.0;

    #[cfg(feature = "serde")]
    pub(super) const fn tolerance() -> f64 {
        TOLERANCE
    }

    #[cfg(feature = "serde")]
    pub(super) const fn enabled() -> bool {
        true
    }

    #[cfg(feature = "serde")]
    pub(super) const fn hyphen_penalty() -> f64 {
        HYPHEN_PENALTY
    }

    #[cfg(feature = "serde")]
    pub(super) const fn line_penalty() -> f64 {
        LINE_PENALTY
    }
}

impl KnuthPlassOptions {
    /// Options with TeX-like defaults for the given width.
    #[must_use]
    pub const fn new(max_width: f64) -> Self {
        Self {
            max_width,
            tolerance: defaults::TOLERANCE,
            fitness_class: true,
            hyphenate: false,
            hyphen_penalty: defaults::HYPHEN_PENALTY,
            line_penalty: defaults::LINE_PENALTY,
            prune: PruneStrategy::LineNumber,
        }
    }

    /// Set [`KnuthPlassOptions::tolerance`]. Values below `1` reject loose
    /// lines sooner but do not tighten the overfull limit.
    #[must_use]
    pub const fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub const fn fitness_class(mut self, enabled: bool) -> Self {
        self.fitness_class = enabled;
        self
    }

    #[must_use]
    pub const fn hyphenate(mut self, enabled: bool) -> Self {
        self.hyphenate = enabled;
        self
    }

    #[must_use]
    pub const fn hyphen_penalty(mut self, penalty: f64) -> Self {
        self.hyphen_penalty = penalty;
        self
    }

    #[must_use]
    pub const fn line_penalty(mut self, penalty: f64) -> Self {
        self.line_penalty = penalty;
        self
    }

    #[must_use]
    pub const fn prune(mut self, strategy: PruneStrategy) -> Self {
        self.prune = strategy;
        self
    }

    /// Widest line the search can produce from more than one fragment:
    /// `max_width * (1 + tolerance)` when `tolerance >= 1`, otherwise
    /// `2 * max_width`, the full-shrink limit.
    ///
    /// Widths are measured on the emitted content, so a line holding a run
    /// of several spaces (counted as one glue) may exceed it by the extra
    /// spaces. A single fragment wider than `2 * max_width` makes the
    /// paragraph infeasible and the first-fit fallback sets it alone.
    #[must_use]
    pub fn line_width_limit(&self) -> f64 {
        self.max_width * (1.0 + self.tolerance.max(1.0))
    }

    /// Check the preconditions the search relies on.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_width.is_finite() && self.max_width > 0.0) {
            return Err(Error::InvalidMaxWidth(self.max_width));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        for (name, value) in [
            ("hyphen_penalty", self.hyphen_penalty),
            ("line_penalty", self.line_penalty),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidPenalty { name, value });
            }
        }
        Ok(())
    }
}

/// Wrap `text` with the Knuth–Plass algorithm.
///
/// Never fails: empty (or all-space) input gives no lines, a non-positive
/// `max_width` gives the whole text as one line, and an infeasible search
/// falls back to first-fit wrapping at the same width.
#[must_use]
pub fn wrap_knuth_plass<M: Measure + ?Sized>(
    text: &str,
    options: &KnuthPlassOptions,
    measure: &M,
) -> Vec<Line> {
    let fragments = fragment::build(text, measure, options.hyphenate);
    if fragments.iter().all(|f| f.is_glue) {
        return Vec::new();
    }

    if options.max_width.is_nan() || options.max_width <= 0.0 {
        return vec![Line::unbroken(text, measure)];
    }

    match search(&fragments, options) {
        Some(breaks) => materialize(text, &fragments, &breaks, measure),
        None => {
            debug!(
                max_width = options.max_width,
                tolerance = options.tolerance,
                "no feasible paragraph, falling back to first-fit"
            );
            wrap_first_fit(text, &WrapOptions::new(options.max_width), measure)
        }
    }
}

/// [`wrap_knuth_plass`] after [`KnuthPlassOptions::validate`].
pub fn try_wrap_knuth_plass<M: Measure + ?Sized>(
    text: &str,
    options: &KnuthPlassOptions,
    measure: &M,
) -> Result<Vec<Line>> {
    options.validate()?;
    Ok(wrap_knuth_plass(text, options, measure))
}
