//! Badness, fitness and demerits of a single candidate line.

/// Badness of a line that cannot be set: overfull past full shrink, or
/// looser than the tolerance allows.
pub const INFEASIBLE_BADNESS: f64 = 10_000.0;

/// Added when adjacent lines are more than one fitness class apart.
pub const FITNESS_MISMATCH_DEMERITS: f64 = 100.0;

/// Coarse looseness bucket of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FitnessClass {
    /// ratio < -0.5
    Tight = 0,
    /// -0.5 <= ratio <= 0.5
    #[default]
    Normal = 1,
    /// 0.5 < ratio <= 1.0
    Loose = 2,
    /// ratio > 1.0
    VeryLoose = 3,
}

impl FitnessClass {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < -0.5 {
            Self::Tight
        } else if ratio <= 0.5 {
            Self::Normal
        } else if ratio <= 1.0 {
            Self::Loose
        } else {
            Self::VeryLoose
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Classes at most one step apart may sit on adjacent lines without
    /// the mismatch penalty.
    #[must_use]
    pub const fn is_compatible_with(self, other: Self) -> bool {
        self.ordinal().abs_diff(other.ordinal()) <= 1
    }
}

/// TeX badness: `100 * |ratio|^3`, or [`INFEASIBLE_BADNESS`] outside
/// `[-1, tolerance]`.
#[must_use]
pub fn badness(ratio: f64, tolerance: f64) -> f64 {
    // NaN is never contained, so it lands here too
    if !(-1.0..=tolerance).contains(&ratio) {
        return INFEASIBLE_BADNESS;
    }
    100.0 * ratio.abs().powi(3)
}

/// Demerits of one line: `(line_penalty + badness + break_penalty)^2`.
#[must_use]
pub fn demerits(line_penalty: f64, badness: f64, break_penalty: f64) -> f64 {
    (line_penalty + badness + break_penalty).powi(2)
}
