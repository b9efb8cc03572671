//! Step snapshots and the sequence that holds them.

use std::ops::Index;

use serde::Serialize;

/// One immutable snapshot of the sort at a single instant.
///
/// Every step owns its copy of the array, so later mutation of the
/// working array never alters an earlier step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Array values at this instant
    pub array: Vec<i64>,
    /// Human-readable description (display only)
    pub message: String,
    /// Index currently holding the pivot
    pub pivot_index: Option<usize>,
    /// Partition boundary `i`; `-1` when the partition starts at index 0
    pub i_index: Option<isize>,
    /// Scan cursor `j`
    pub j_index: Option<usize>,
    /// True when `array[j_index]` is being compared with the pivot
    pub comparing: bool,
    /// True when a swap is about to happen
    pub swapping: bool,
}

impl Step {
    /// A step with no active pivot, cursors or flags.
    pub(crate) fn plain(array: &[i64], message: String) -> Self {
        Self {
            array: array.to_vec(),
            message,
            pivot_index: None,
            i_index: None,
            j_index: None,
            comparing: false,
            swapping: false,
        }
    }

    pub(crate) fn with_pivot(mut self, index: usize) -> Self {
        self.pivot_index = Some(index);
        self
    }

    pub(crate) fn with_i(mut self, index: isize) -> Self {
        self.i_index = Some(index);
        self
    }

    pub(crate) fn with_j(mut self, index: usize) -> Self {
        self.j_index = Some(index);
        self
    }

    pub(crate) fn comparing(mut self) -> Self {
        self.comparing = true;
        self
    }

    pub(crate) fn swapping(mut self) -> Self {
        self.swapping = true;
        self
    }

    /// `i_index` as an array position, if it points inside the array.
    pub fn i_position(&self) -> Option<usize> {
        self.i_index.and_then(|i| usize::try_from(i).ok())
    }
}

/// The complete, ordered output of one trace run.
///
/// Never empty: the last step is always the sorted terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "a trace always ends with a terminal step");
        Self { steps }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for generated sequences; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The terminal (fully sorted) step.
    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }
}

impl Index<usize> for StepSequence {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
