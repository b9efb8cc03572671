//! Instrumented quicksort.
//!
//! Lomuto partitioning over a private working copy. Each observable action
//! is pushed as a [`Step`] at a fixed point in the algorithm, so the same
//! input and strategy always produce the same trace.

use tracing::debug;

use super::error::TraceError;
use super::pivot::PivotStrategy;
use super::step::{Step, StepSequence};

/// Generate the full quicksort trace for `input`.
///
/// The caller's slice is never touched. The returned sequence always ends
/// with a "Sorting complete!" step holding the sorted array; inputs of
/// length 1 produce only that step.
///
/// # Errors
/// Returns [`TraceError::EmptyInput`] when `input` is empty.
pub fn generate(input: &[i64], strategy: PivotStrategy) -> Result<StepSequence, TraceError> {
    if input.is_empty() {
        return Err(TraceError::EmptyInput);
    }

    let mut recorder = Recorder {
        array: input.to_vec(),
        strategy,
        steps: Vec::new(),
    };
    recorder.quicksort(0, input.len() - 1);
    recorder.push(Step::plain(&recorder.array, "Sorting complete!".to_string()));

    debug!(
        len = input.len(),
        steps = recorder.steps.len(),
        %strategy,
        "generated quicksort trace"
    );

    Ok(StepSequence::new(recorder.steps))
}

/// Working state for one run.
struct Recorder {
    array: Vec<i64>,
    strategy: PivotStrategy,
    steps: Vec<Step>,
}

impl Recorder {
    fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Snapshot of the current array with a message.
    fn snapshot(&self, message: String) -> Step {
        Step::plain(&self.array, message)
    }

    fn quicksort(&mut self, low: usize, high: usize) {
        if low < high {
            let split = self.partition(low, high);
            if split > low {
                self.quicksort(low, split - 1);
            }
            self.quicksort(split + 1, high);
        }
    }

    /// Partition `[low, high]` and return the pivot's final index.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let chosen = self.strategy.select(low, high);
        if chosen != high {
            self.array.swap(chosen, high);
            let step = self
                .snapshot(format!("Moving pivot from index {chosen} to end"))
                .with_pivot(high);
            self.push(step);
        }

        let pivot = self.array[high];
        // `store` is the slot the next smaller element goes to; `i` is one below it.
        let mut store = low;
        let step = self
            .snapshot(format!(
                "Partition starting. Pivot = {pivot} at index {high}"
            ))
            .with_pivot(high)
            .with_i(boundary(store));
        self.push(step);

        for j in low..high {
            let value = self.array[j];
            let step = self
                .snapshot(format!("Comparing arr[{j}] = {value} with pivot = {pivot}"))
                .with_pivot(high)
                .with_i(boundary(store))
                .with_j(j)
                .comparing();
            self.push(step);

            if value < pivot {
                let i = store;
                store += 1;
                let step = self
                    .snapshot(format!(
                        "arr[{j}] = {value} < {pivot}, so swapping arr[{i}] and arr[{j}]"
                    ))
                    .with_pivot(high)
                    .with_i(boundary(store))
                    .with_j(j)
                    .swapping();
                self.push(step);

                self.array.swap(i, j);

                let step = self
                    .snapshot(format!(
                        "Swapped! arr[{i}] = {}, arr[{j}] = {}",
                        self.array[i], self.array[j]
                    ))
                    .with_pivot(high)
                    .with_i(boundary(store))
                    .with_j(j);
                self.push(step);
            } else {
                let step = self
                    .snapshot(format!(
                        "arr[{j}] = {value} >= {pivot}, no swap needed"
                    ))
                    .with_pivot(high)
                    .with_i(boundary(store))
                    .with_j(j);
                self.push(step);
            }
        }

        let step = self
            .snapshot(format!(
                "Placing pivot in correct position: swapping arr[{store}] and arr[{high}]"
            ))
            .with_pivot(high)
            .with_i(to_signed(store))
            .with_j(high)
            .swapping();
        self.push(step);

        self.array.swap(store, high);

        let step = self
            .snapshot(format!(
                "Pivot {pivot} is now in correct position at index {store}"
            ))
            .with_pivot(store);
        self.push(step);

        store
    }
}

/// The Lomuto `i` for a given store slot (`store - 1`, possibly `-1`).
fn boundary(store: usize) -> isize {
    to_signed(store) - 1
}

fn to_signed(index: usize) -> isize {
    // Vec lengths never exceed isize::MAX
    index as isize
}
