//! Terminal UI helpers shared by the player and CLI output.
//!
//! Colors live in [`theme`]; layout helpers in [`ui`].

pub mod theme;
pub mod ui;

pub use theme::{Theme, ThemeName};
