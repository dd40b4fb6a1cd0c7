//! Width measurement seam.
//!
//! Every wrapping routine takes a [`Measure`] so the line breaker stays
//! unit-agnostic: terminal cells, pixels from font metrics, or anything else
//! that adds up consistently.
//!
//! ```
//! use optiwrap::{Measure, TerminalMeasure};
//!
//! assert_eq!(TerminalMeasure::new().width("Hello 世界"), 10.0);
//!
//! // Any `Fn(&str) -> f64` is a measure, e.g. a fixed-advance font.
//! let pixels = |s: &str| s.chars().count() as f64 * 7.5;
//! assert_eq!(pixels.width("abcd"), 30.0);
//! ```

use crate::unicode::{WidthMethod, display_width_with_method};

/// Measures the display width of a string in abstract units.
pub trait Measure {
    /// Width of `text`. Must be non-negative and additive over concatenation
    /// for the line breaker's width sums to match measured line widths.
    fn width(&self, text: &str) -> f64;
}

impl<F> Measure for F
where
    F: Fn(&str) -> f64,
{
    fn width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Terminal column measurement backed by `unicode-width`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TerminalMeasure {
    method: WidthMethod,
}

impl TerminalMeasure {
    /// Ambiguous-width characters count as one column.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_method(WidthMethod::WcWidth)
    }

    /// Ambiguous-width characters count as two columns (CJK locales).
    #[must_use]
    pub const fn east_asian() -> Self {
        Self::with_method(WidthMethod::Unicode)
    }

    #[must_use]
    pub const fn with_method(method: WidthMethod) -> Self {
        Self { method }
    }

    #[must_use]
    pub const fn method(self) -> WidthMethod {
        self.method
    }
}

impl Measure for TerminalMeasure {
    fn width(&self, text: &str) -> f64 {
        display_width_with_method(text, self.method) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_measure_cells() {
        let m = TerminalMeasure::new();
        assert_eq!(m.width(""), 0.0);
        assert_eq!(m.width("hello"), 5.0);
        assert_eq!(m.width("世界"), 4.0);
        assert_eq!(m.method(), WidthMethod::WcWidth);
    }

    #[test]
    fn test_east_asian_ambiguous() {
        assert_eq!(TerminalMeasure::new().width("①"), 1.0);
        assert_eq!(TerminalMeasure::east_asian().width("①"), 2.0);
    }

    #[test]
    fn test_closure_measure() {
        let doubled = |s: &str| 2.0 * s.len() as f64;
        assert_eq!(doubled.width("abc"), 6.0);
    }

    #[test]
    fn test_fn_item_measure() {
        fn bytes(s: &str) -> f64 {
            s.len() as f64
        }
        assert_eq!(bytes.width("héllo"), 6.0);
    }
}
