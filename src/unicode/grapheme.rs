//! Grapheme cluster iteration and width-bounded splitting.

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Iterate over extended grapheme clusters in a string.
#[must_use = "iterators are lazy"]
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Iterate over grapheme clusters with byte indices.
#[must_use = "iterators are lazy"]
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// A run of whole grapheme clusters and its measured width.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphemeChunk {
    /// Byte range within the split string.
    pub range: Range<usize>,
    /// Summed width of the clusters in `range`.
    pub width: f64,
}

/// Split `s` into consecutive chunks no wider than `max_width`.
///
/// Chunks never split a grapheme cluster. A cluster wider than `max_width`
/// on its own becomes a chunk of its own. The chunks cover `s` exactly.
pub fn split_at_width<F>(s: &str, max_width: f64, mut width_of: F) -> Vec<GraphemeChunk>
where
    F: FnMut(&str) -> f64,
{
    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut width = 0.0;

    for (idx, grapheme) in grapheme_indices(s) {
        let g_width = width_of(grapheme);
        if idx > start && width + g_width > max_width {
            chunks.push(GraphemeChunk {
                range: start..idx,
                width,
            });
            start = idx;
            width = 0.0;
        }
        width += g_width;
    }

    if start < s.len() {
        chunks.push(GraphemeChunk {
            range: start..s.len(),
            width,
        });
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::{WidthMethod, display_width_with_method};

    fn cells(s: &str) -> f64 {
        display_width_with_method(s, WidthMethod::WcWidth) as f64
    }

    #[test]
    fn test_graphemes_ascii() {
        let g: Vec<_> = graphemes("hello").collect();
        assert_eq!(g, vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_graphemes_emoji() {
        // Family emoji (ZWJ sequence)
        assert_eq!(graphemes("👨‍👩‍👧").count(), 1);
    }

    #[test]
    fn test_grapheme_indices_are_byte_offsets() {
        let idx: Vec<_> = grapheme_indices("a漢e\u{0301}b").map(|(i, _)| i).collect();
        assert_eq!(idx, vec![0, 1, 4, 7]);
    }

    #[test]
    fn test_graphemes_combining() {
        assert_eq!(graphemes("e\u{0301}").count(), 1);
    }

    #[test]
    fn test_split_ascii() {
        let chunks = split_at_width("abcdefgh", 3.0, cells);
        let ranges: Vec<_> = chunks.iter().map(|c| c.range.clone()).collect();
        assert_eq!(ranges, vec![0..3, 3..6, 6..8]);
        assert_eq!(chunks[2].width, 2.0);
    }

    #[test]
    fn test_split_respects_clusters() {
        // Each "e + combining acute" is one cluster of width 1
        let s = "e\u{0301}e\u{0301}e\u{0301}";
        let chunks = split_at_width(s, 2.0, cells);
        assert_eq!(chunks.len(), 2);
        assert_eq!(&s[chunks[0].range.clone()], "e\u{0301}e\u{0301}");
        assert_eq!(&s[chunks[1].range.clone()], "e\u{0301}");
    }

    #[test]
    fn test_split_wide_cluster_alone() {
        let chunks = split_at_width("漢字", 1.0, cells);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.width == 2.0));
    }

    #[test]
    fn test_split_empty() {
        assert!(split_at_width("", 5.0, cells).is_empty());
    }
}
