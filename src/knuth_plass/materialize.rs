//! Turn break positions back into lines of the original text.

use super::fragment::Fragment;
use crate::line::{Line, LineSlicer};
use crate::measure::Measure;

/// Slice `text` at `breaks` and emit trimmed, measured lines.
///
/// Each break is a fragment count; the line ends where the last consumed
/// fragment ends in `text`. Breaks past the end are clamped, breaks that do
/// not advance are ignored, and whatever follows the last break (trailing
/// glue, usually nothing) becomes a final line if it has content.
pub fn materialize<M: Measure + ?Sized>(
    text: &str,
    fragments: &[Fragment<'_>],
    breaks: &[usize],
    measure: &M,
) -> Vec<Line> {
    let mut slicer = LineSlicer::new(text, measure);
    let mut lines = Vec::with_capacity(breaks.len());
    let mut start = 0usize;

    for &position in breaks {
        let position = position.min(fragments.len());
        let end = position
            .checked_sub(1)
            .map_or(0, |last| fragments[last].byte_end());
        if end <= start {
            continue;
        }
        lines.extend(slicer.line(start..end));
        start = end;
    }

    if start < text.len() {
        lines.extend(slicer.line(start..text.len()));
    }

    lines
}
