//! Pivot selection strategies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which element of a subrange becomes the pivot.
///
/// The strategy is fixed for a whole run and passed into
/// [`generate`](crate::trace::generate) explicitly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PivotStrategy {
    /// Leftmost element of the subrange
    #[default]
    First,
    /// Rightmost element of the subrange
    Last,
    /// Element at the floored midpoint
    Middle,
}

impl PivotStrategy {
    /// Pick the pivot index for the inclusive subrange `[low, high]`.
    ///
    /// Callers guarantee `low <= high`; a singleton range returns `low`.
    pub fn select(self, low: usize, high: usize) -> usize {
        debug_assert!(low <= high, "invalid subrange [{low}, {high}]");
        match self {
            Self::First => low,
            Self::Last => high,
            Self::Middle => low + (high - low) / 2,
        }
    }

    /// Lowercase name as used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::Middle => "middle",
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
