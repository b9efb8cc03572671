//! Step-at-a-time navigation over a generated trace.

use std::fmt;

use crate::trace::{Step, StepSequence};

/// Why a navigation call did not move the cursor.
///
/// These are expected outcomes, not failures: callers use them (or
/// [`PlaybackCursor::can_advance`] / [`PlaybackCursor::can_retreat`]) to
/// enable and disable their controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Every step has already been shown
    Exhausted,
    /// The first step is showing (or nothing is yet)
    AtFirstStep,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => f.write_str("Sorting complete!"),
            Self::AtFirstStep => f.write_str("Already at the first step"),
        }
    }
}

/// Cursor over one [`StepSequence`].
///
/// `position` counts the steps shown so far: `0` means nothing is showing,
/// `k` means step `k - 1` is showing. It always stays in `0..=len`.
#[derive(Debug, Clone)]
pub struct PlaybackCursor {
    steps: StepSequence,
    position: usize,
}

impl PlaybackCursor {
    /// Wrap a sequence, positioned before the first step.
    pub fn new(steps: StepSequence) -> Self {
        Self { steps, position: 0 }
    }

    /// Show the next step.
    pub fn advance(&mut self) -> Result<&Step, Boundary> {
        if self.position >= self.steps.len() {
            return Err(Boundary::Exhausted);
        }
        self.position += 1;
        Ok(&self.steps[self.position - 1])
    }

    /// Go back to the previous step. Never moves back to "nothing showing".
    pub fn retreat(&mut self) -> Result<&Step, Boundary> {
        if self.position <= 1 {
            return Err(Boundary::AtFirstStep);
        }
        self.position -= 1;
        Ok(&self.steps[self.position - 1])
    }

    /// Rewind to before the first step. The sequence is kept for reuse.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The step currently showing, or `None` before the first advance.
    pub fn current(&self) -> Option<&Step> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.steps.get(index))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn can_advance(&self) -> bool {
        self.position < self.steps.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.position > 1
    }

    /// True once the terminal step has been shown.
    pub fn is_finished(&self) -> bool {
        self.position == self.steps.len()
    }

    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }
}
