//! Wrapped line records.

use std::ops::Range;

use crate::measure::Measure;

/// One output line of a wrapped paragraph.
///
/// `start` and `end` are character (not byte) offsets into the original
/// text; `end` is exclusive and the range covers exactly `content`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub content: String,
    pub width: f64,
    pub start: usize,
    pub end: usize,
}

impl Line {
    /// The whole text as a single line, untrimmed, with its natural width.
    #[must_use]
    pub fn unbroken<M: Measure + ?Sized>(text: &str, measure: &M) -> Self {
        Self {
            content: text.to_string(),
            width: measure.width(text),
            start: 0,
            end: text.chars().count(),
        }
    }

    /// Number of characters in the line.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// Cuts trimmed lines out of one paragraph.
///
/// Spans must be requested in non-decreasing byte order; character offsets
/// are then resolved in a single pass over the text.
pub(crate) struct LineSlicer<'a, M: ?Sized> {
    text: &'a str,
    measure: &'a M,
    byte: usize,
    chars: usize,
}

impl<'a, M: Measure + ?Sized> LineSlicer<'a, M> {
    pub(crate) fn new(text: &'a str, measure: &'a M) -> Self {
        Self {
            text,
            measure,
            byte: 0,
            chars: 0,
        }
    }

    /// Trim `span` of boundary whitespace and build its line, or `None` when
    /// nothing but whitespace remains.
    pub(crate) fn line(&mut self, span: Range<usize>) -> Option<Line> {
        let raw = self.text.get(span.clone())?;
        let content = raw.trim();
        if content.is_empty() {
            return None;
        }

        let byte_start = span.start + (raw.len() - raw.trim_start().len());
        let start = self.char_index(byte_start);
        let end = start + content.chars().count();

        Some(Line {
            content: content.to_string(),
            width: self.measure.width(content),
            start,
            end,
        })
    }

    fn char_index(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
