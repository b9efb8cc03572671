//! qstep - quicksort stepper
//!
//! Records a deterministic, replayable trace of quicksort for a list of
//! integers and lets callers walk through it one step at a time.
//!
//! - [`trace`]: instrumented quicksort producing an immutable step sequence
//! - [`player`]: playback cursor and the interactive terminal player
//! - [`config`]: TOML configuration (default pivot, default array, theme)
//! - [`cli`]: command-line definition shared with `xtask`

pub mod cli;
pub mod config;
pub mod player;
pub mod trace;
pub mod tui;

pub use config::Config;
pub use player::{Boundary, PlaybackCursor};
pub use trace::{generate, PivotStrategy, Step, StepSequence, TraceError};
