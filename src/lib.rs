//! `optiwrap` - Knuth–Plass paragraph line breaking
//!
//! Breaks a paragraph into lines by minimizing total demerits over the whole
//! paragraph instead of filling each line greedily. Widths come from a
//! pluggable [`Measure`]; the default counts terminal cells with full
//! Unicode width and grapheme handling.
//!
//! ```
//! use optiwrap::{KnuthPlassOptions, Text};
//!
//! let text = Text::terminal();
//! let lines = text.wrap_knuth_plass(
//!     "The quick brown fox jumps over the lazy dog",
//!     &KnuthPlassOptions::new(20.0),
//! );
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[1].content, "jumps over the lazy dog");
//! assert_eq!((lines[1].start, lines[1].end), (20, 43));
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Width math rounds to cells
#![allow(clippy::cast_sign_loss)] // Width math rounds to cells
#![allow(clippy::cast_precision_loss)] // Cell counts as f64 widths
#![allow(clippy::module_name_repetitions)] // Allow wrap::WrapOptions etc
#![allow(clippy::missing_errors_doc)] // Error variants are self-describing
#![allow(clippy::missing_panics_doc)] // Panics only in tests
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![cfg_attr(test, allow(clippy::float_cmp))] // Exact widths in assertions

pub mod error;
pub mod knuth_plass;
pub mod line;
pub mod measure;
pub mod text;
pub mod unicode;
pub mod wrap;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use knuth_plass::{FitnessClass, KnuthPlassOptions, PruneStrategy, wrap_knuth_plass};
pub use line::Line;
pub use measure::{Measure, TerminalMeasure};
pub use text::{Text, WrapAlgorithm};
pub use unicode::WidthMethod;
pub use wrap::{WrapOptions, wrap_first_fit};
