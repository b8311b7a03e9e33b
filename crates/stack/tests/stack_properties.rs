//! Property tests for the stack invariants
//!
//! Checked against a plain `Vec` model under arbitrary operation
//! sequences:
//! - LIFO order: pops return pushes in exact reverse
//! - size accounting: `len` equals successful pushes minus successful pops
//! - capacity stays within `[initial_capacity, max_capacity]`
//! - rejected operations leave length and contents untouched

use proptest::prelude::*;
use strata_stack::{ElasticStack, StackConfig, StackError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn lifo_order_matches_reversed_pushes(
        values in proptest::collection::vec(any::<u32>(), 0..200),
    ) {
        let mut stack = ElasticStack::new().unwrap();
        for value in &values {
            prop_assert!(stack.push(*value).is_ok());
        }
        prop_assert_eq!(stack.len(), values.len());

        let mut popped = Vec::with_capacity(values.len());
        while let Some(value) = stack.try_pop() {
            popped.push(value);
        }
        popped.reverse();
        prop_assert_eq!(popped, values);
    }

    #[test]
    fn stack_tracks_vec_model_under_arbitrary_ops(
        max_capacity in 1usize..64,
        ops in proptest::collection::vec(prop_oneof![Just(true), Just(false)], 1..200),
    ) {
        let config = StackConfig::bounded(max_capacity);
        let initial_capacity = config.initial_capacity;
        let mut stack = ElasticStack::with_config(config).unwrap();
        let mut model: Vec<u64> = Vec::new();
        let mut next_value = 0u64;

        for op_is_push in ops {
            if op_is_push {
                match stack.push(next_value) {
                    Ok(()) => model.push(next_value),
                    Err(StackError::Full { .. }) => {
                        // INVARIANT: Full only fires at the logical bound.
                        prop_assert_eq!(model.len(), max_capacity);
                    }
                    Err(other) => prop_assert!(false, "unexpected push error: {}", other),
                }
                next_value += 1;
            } else {
                prop_assert_eq!(stack.try_pop(), model.pop());
            }

            // INVARIANT: the stack and the model agree on size and top.
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.is_empty(), model.is_empty());
            prop_assert_eq!(stack.peek(), model.last());

            // INVARIANT: capacity stays inside the configured band.
            prop_assert!(stack.capacity() >= initial_capacity);
            prop_assert!(stack.capacity() <= max_capacity.max(initial_capacity));
            prop_assert!(stack.capacity() >= stack.len());
        }
    }

    #[test]
    fn drain_after_growth_returns_to_the_floor(
        extra in 0usize..100,
    ) {
        let mut stack = ElasticStack::new().unwrap();
        let total = 17 + extra;
        for i in 0..total {
            prop_assert!(stack.push(i).is_ok());
        }
        prop_assert!(stack.capacity() > 16);

        while stack.try_pop().is_some() {}
        // Draining one by one always walks capacity back to the floor.
        prop_assert_eq!(stack.capacity(), 16);
        prop_assert_eq!(stack.len(), 0);
    }
}

/// Deterministic companion: interleaved push/pop bursts agree with the
/// model and end balanced.
#[test]
fn interleaved_bursts_stay_balanced() {
    let mut stack = ElasticStack::new().expect("failed to create stack");
    let mut model = Vec::new();

    for burst in 1..=10usize {
        for i in 0..(burst * 7) {
            stack.push(i).expect("push failed");
            model.push(i);
        }
        for _ in 0..(burst * 5) {
            assert_eq!(stack.try_pop(), model.pop());
        }
        assert_eq!(stack.len(), model.len());
    }

    while let Some(value) = stack.try_pop() {
        assert_eq!(Some(value), model.pop());
    }
    assert!(model.is_empty());

    let stats = stack.stats();
    assert_eq!(stats.pushes, stats.pops);
}
