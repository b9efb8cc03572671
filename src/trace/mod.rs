//! Quicksort trace generation
//!
//! Runs an instrumented Lomuto quicksort and records every comparison, swap
//! and pivot placement as an immutable [`Step`]. The full trace is computed
//! eagerly and handed back as a [`StepSequence`] for playback.
//!
//! # Usage
//!
//! ```
//! use qstep::trace::{generate, PivotStrategy};
//!
//! let steps = generate(&[3, 1, 2], PivotStrategy::First).unwrap();
//! assert_eq!(steps.last().array, vec![1, 2, 3]);
//! ```

mod error;
mod generator;
mod parse;
mod pivot;
mod step;

pub use error::TraceError;
pub use generator::generate;
pub use parse::parse_array;
pub use pivot::PivotStrategy;
pub use step::{Step, StepSequence};
