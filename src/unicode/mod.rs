//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{GraphemeChunk, grapheme_indices, graphemes, split_at_width};
pub use width::{WidthMethod, display_width_with_method};
