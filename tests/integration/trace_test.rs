//! Properties of generated traces.

use proptest::prelude::*;
use qstep::trace::{generate, parse_array, PivotStrategy, TraceError};

const STRATEGIES: [PivotStrategy; 3] = [
    PivotStrategy::First,
    PivotStrategy::Last,
    PivotStrategy::Middle,
];

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

fn arb_strategy() -> impl Strategy<Value = PivotStrategy> {
    prop_oneof![
        Just(PivotStrategy::First),
        Just(PivotStrategy::Last),
        Just(PivotStrategy::Middle),
    ]
}

// ============================================================================
// Boundary cases
// ============================================================================

#[test]
fn empty_input_fails_validation() {
    for strategy in STRATEGIES {
        assert_eq!(generate(&[], strategy), Err(TraceError::EmptyInput));
    }
}

#[test]
fn single_element_produces_only_completion() {
    for strategy in STRATEGIES {
        let seq = generate(&[-8], strategy).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.last().message, "Sorting complete!");
        assert_eq!(seq.last().array, vec![-8]);
    }
}

#[test]
fn demo_array_sorts_with_every_strategy() {
    let input = [64, 34, 25, 12, 22, 11, 90, 88, 45, 50];
    for strategy in STRATEGIES {
        let seq = generate(&input, strategy).unwrap();
        assert_eq!(
            seq.last().array,
            vec![11, 12, 22, 25, 34, 45, 50, 64, 88, 90]
        );
    }
}

#[test]
fn strategies_produce_different_traces() {
    let input = [5, 2, 9, 1, 7];
    let first = generate(&input, PivotStrategy::First).unwrap();
    let last = generate(&input, PivotStrategy::Last).unwrap();
    let middle = generate(&input, PivotStrategy::Middle).unwrap();
    assert_ne!(first, last);
    assert_ne!(first, middle);
    assert_eq!(first.last().array, last.last().array);
}

#[test]
fn all_equal_values_never_swap_in_the_scan() {
    for strategy in STRATEGIES {
        let seq = generate(&[5, 5, 5], strategy).unwrap();
        let scan_swaps = seq
            .iter()
            .filter(|s| s.swapping && !s.message.starts_with("Placing pivot"))
            .count();
        assert_eq!(scan_swaps, 0);
        assert!(seq
            .iter()
            .filter(|s| s.message.starts_with("arr["))
            .all(|s| s.message.ends_with("no swap needed")));
        assert_eq!(seq.last().array, vec![5, 5, 5]);
    }
}

#[test]
fn parsed_input_feeds_generation() {
    let values = parse_array("3, 1, 2").unwrap();
    let seq = generate(&values, PivotStrategy::First).unwrap();
    assert_eq!(seq.len(), 18);
    assert_eq!(seq.last().array, vec![1, 2, 3]);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    // Property: the terminal step holds the ascending sort of the input.
    #[test]
    fn final_step_is_sorted(
        values in prop::collection::vec(-50i64..50, 1..24),
        strategy in arb_strategy(),
    ) {
        let seq = generate(&values, strategy).unwrap();
        prop_assert_eq!(&seq.last().array, &sorted(&values));
        prop_assert_eq!(seq.last().message.as_str(), "Sorting complete!");
    }

    // Property: every snapshot is a permutation of the input.
    #[test]
    fn every_step_preserves_the_multiset(
        values in prop::collection::vec(-20i64..20, 1..16),
        strategy in arb_strategy(),
    ) {
        let expected = sorted(&values);
        let seq = generate(&values, strategy).unwrap();
        for step in &seq {
            prop_assert_eq!(step.array.len(), values.len());
            prop_assert_eq!(sorted(&step.array), expected.clone());
        }
    }

    // Property: identical arguments give identical traces.
    #[test]
    fn generation_is_deterministic(
        values in prop::collection::vec(any::<i64>(), 1..16),
        strategy in arb_strategy(),
    ) {
        let a = generate(&values, strategy).unwrap();
        let b = generate(&values, strategy).unwrap();
        prop_assert_eq!(a, b);
    }

    // Property: pointer indices always fall inside the array.
    #[test]
    fn indices_stay_in_bounds(
        values in prop::collection::vec(-9i64..9, 1..16),
        strategy in arb_strategy(),
    ) {
        let len = values.len();
        let seq = generate(&values, strategy).unwrap();
        for step in &seq {
            if let Some(p) = step.pivot_index { prop_assert!(p < len); }
            if let Some(j) = step.j_index { prop_assert!(j < len); }
            if let Some(i) = step.i_index {
                prop_assert!(i >= -1 && i < len as isize);
            }
            prop_assert!(!(step.comparing && step.swapping));
            if step.comparing { prop_assert!(step.j_index.is_some()); }
        }
    }

    // Property: every comparison is followed by its verdict.
    #[test]
    fn comparisons_are_followed_by_a_verdict(
        values in prop::collection::vec(-9i64..9, 2..12),
        strategy in arb_strategy(),
    ) {
        let seq = generate(&values, strategy).unwrap();
        let steps = seq.as_slice();
        for (index, step) in steps.iter().enumerate() {
            if step.comparing {
                let next = &steps[index + 1];
                prop_assert_eq!(next.j_index, step.j_index);
                prop_assert!(next.message.starts_with("arr["));
            }
        }
    }
}
