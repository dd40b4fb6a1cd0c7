//! Box/glue fragments built from a paragraph.
//!
//! The split is on the literal ASCII space only; runs of spaces collapse into
//! a single glue fragment and no other whitespace is treated as a separator.

use crate::measure::Measure;

/// A word (box) or the inter-word space following it (glue).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fragment<'a> {
    /// Text of this unit, borrowed from the paragraph.
    pub content: &'a str,
    /// Measured width.
    pub width: f64,
    /// Character index of `content` in the paragraph.
    pub offset: usize,
    /// Byte index of `content` in the paragraph.
    pub byte_offset: usize,
    /// Glue is never a break point; breaks only follow boxes.
    pub is_glue: bool,
    /// Cost of breaking right after this fragment. Negative values
    /// encourage the break.
    pub penalty: f64,
}

impl Fragment<'_> {
    /// Whether this is a box whose content ends in an explicit hyphen.
    #[must_use]
    pub fn ends_with_hyphen(&self) -> bool {
        !self.is_glue && self.content.ends_with('-')
    }

    /// Byte index just past `content`.
    #[must_use]
    pub fn byte_end(&self) -> usize {
        self.byte_offset + self.content.len()
    }
}

/// Split `text` into alternating word and glue fragments.
///
/// A glue fragment, one space wide, follows every space-delimited token
/// except the last. With `hyphenate`, a word is additionally cut after each
/// explicit `-` into adjacent boxes with no glue between them.
pub fn build<'a, M: Measure + ?Sized>(
    text: &'a str,
    measure: &M,
    hyphenate: bool,
) -> Vec<Fragment<'a>> {
    let mut fragments = Vec::new();
    if text.is_empty() {
        return fragments;
    }

    let space_width = measure.width(" ");
    let last_token = text.matches(' ').count();
    let mut byte_offset = 0usize;
    let mut offset = 0usize;

    for (i, token) in text.split(' ').enumerate() {
        let token_chars = token.chars().count();

        if !token.is_empty() {
            if hyphenate {
                push_hyphenated(&mut fragments, token, offset, byte_offset, measure);
            } else {
                fragments.push(word(token, offset, byte_offset, measure));
            }

            if i < last_token {
                let glue_byte = byte_offset + token.len();
                fragments.push(Fragment {
                    content: &text[glue_byte..=glue_byte],
                    width: space_width,
                    offset: offset + token_chars,
                    byte_offset: glue_byte,
                    is_glue: true,
                    penalty: 0.0,
                });
            }
        }

        byte_offset += token.len() + 1;
        offset += token_chars + 1;
    }

    fragments
}

fn word<'a, M: Measure + ?Sized>(
    content: &'a str,
    offset: usize,
    byte_offset: usize,
    measure: &M,
) -> Fragment<'a> {
    Fragment {
        content,
        width: measure.width(content),
        offset,
        byte_offset,
        is_glue: false,
        penalty: 0.0,
    }
}

fn push_hyphenated<'a, M: Measure + ?Sized>(
    fragments: &mut Vec<Fragment<'a>>,
    token: &'a str,
    mut offset: usize,
    mut byte_offset: usize,
    measure: &M,
) {
    for piece in token.split_inclusive('-') {
        fragments.push(word(piece, offset, byte_offset, measure));
        offset += piece.chars().count();
        byte_offset += piece.len();
    }
}
