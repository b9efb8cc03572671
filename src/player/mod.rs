//! Step-by-step playback of a quicksort trace
//!
//! - [`PlaybackCursor`]: forward/backward navigation over a generated trace
//! - [`play`]: interactive terminal player built on the cursor
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `cursor`: navigation with strict boundaries (no seeking)
//! - `state`: PlayerState struct and shared types (InputResult)
//! - `input/`: Keyboard handling
//! - `render/`: UI rendering (bars, status, help) plus plain-text output
//!
//! # Usage
//!
//! ```
//! use qstep::player::{Boundary, PlaybackCursor};
//! use qstep::trace::{generate, PivotStrategy};
//!
//! let mut cursor = PlaybackCursor::new(generate(&[2, 1], PivotStrategy::Last).unwrap());
//! assert!(cursor.advance().is_ok());
//! assert_eq!(cursor.retreat().unwrap_err(), Boundary::AtFirstStep);
//! ```

pub mod cursor;
pub(crate) mod input;
mod native;
pub mod render;
pub mod state;

pub use cursor::{Boundary, PlaybackCursor};
pub use native::{play, PlaybackSummary};
pub use state::{InputResult, PlayerState};
