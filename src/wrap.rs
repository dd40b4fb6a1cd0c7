//! Greedy first-fit wrapping.
//!
//! Words are taken from the same ASCII-space split the Knuth–Plass breaker
//! uses and added to the current line while they fit. This is the fallback
//! for paragraphs the optimal search cannot set, and it produces the same
//! [`Line`] records so callers can switch between the two freely.

use crate::error::{Error, Result};
use crate::knuth_plass::fragment;
use crate::line::{Line, LineSlicer};
use crate::measure::Measure;
use crate::unicode::split_at_width;

/// First-fit configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrapOptions {
    /// Maximum line width in measure units.
    pub max_width: f64,
    /// Split words wider than `max_width` at grapheme boundaries instead of
    /// letting them overflow.
    #[cfg_attr(feature = "serde", serde(default))]
    pub break_words: bool,
}

impl WrapOptions {
    #[must_use]
    pub const fn new(max_width: f64) -> Self {
        Self {
            max_width,
            break_words: false,
        }
    }

    #[must_use]
    pub const fn break_words(mut self, enabled: bool) -> Self {
        self.break_words = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_width.is_finite() && self.max_width > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidMaxWidth(self.max_width))
        }
    }
}

/// Current line under construction: byte span and accumulated width.
#[derive(Clone, Copy)]
struct Pending {
    start: usize,
    end: usize,
    width: f64,
}

/// Wrap `text` greedily to `options.max_width`.
///
/// A non-positive `max_width` returns the whole text as one untrimmed line.
/// Without `break_words`, a word wider than the limit sits alone on its own
/// overflowing line.
#[must_use]
pub fn wrap_first_fit<M: Measure + ?Sized>(
    text: &str,
    options: &WrapOptions,
    measure: &M,
) -> Vec<Line> {
    let max_width = options.max_width;
    if max_width.is_nan() || max_width <= 0.0 {
        return vec![Line::unbroken(text, measure)];
    }

    let mut slicer = LineSlicer::new(text, measure);
    let mut lines = Vec::new();
    let mut current: Option<Pending> = None;

    let fragments = fragment::build(text, measure, false);
    for word in fragments.iter().filter(|f| !f.is_glue) {
        if let Some(line) = current.take() {
            let gap = measure.width(&text[line.end..word.byte_offset]);
            let width = line.width + gap + word.width;
            if width <= max_width {
                current = Some(Pending {
                    start: line.start,
                    end: word.byte_end(),
                    width,
                });
                continue;
            }
            lines.extend(slicer.line(line.start..line.end));
        }

        if options.break_words && word.width > max_width {
            let mut chunks = split_at_width(word.content, max_width, |g| measure.width(g));
            let tail = chunks.pop();
            for chunk in chunks {
                let start = word.byte_offset + chunk.range.start;
                let end = word.byte_offset + chunk.range.end;
                lines.extend(slicer.line(start..end));
            }
            current = tail.map(|chunk| Pending {
                start: word.byte_offset + chunk.range.start,
                end: word.byte_offset + chunk.range.end,
                width: chunk.width,
            });
        } else {
            current = Some(Pending {
                start: word.byte_offset,
                end: word.byte_end(),
                width: word.width,
            });
        }
    }

    if let Some(line) = current {
        lines.extend(slicer.line(line.start..line.end));
    }

    lines
}
