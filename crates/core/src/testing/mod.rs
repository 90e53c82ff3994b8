//! Property-based testing utilities for fnkit
//!
//! The generators here are shared with the collection crates' tests through
//! the `testing` feature.

use crate::types::Container;
use indexmap::IndexMap;
use proptest::prelude::*;
use serde_json::{json, Value};

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;

    /// Sequences of small integers, possibly empty
    pub fn int_sequence() -> impl Strategy<Value = Vec<i64>> {
        vec(-1000i64..1000, 0..64)
    }

    /// Non-empty sequences of small integers
    pub fn non_empty_int_sequence() -> impl Strategy<Value = Vec<i64>> {
        vec(-1000i64..1000, 1..64)
    }

    /// Mapping entries with distinct lowercase names, in generation order
    pub fn int_entries() -> impl Strategy<Value = Vec<(String, i64)>> {
        proptest::collection::btree_map("[a-z]{1,8}", -1000i64..1000, 0..32)
            .prop_map(|entries| entries.into_iter().collect())
    }

    /// Either a sequence or a mapping of small integers
    pub fn int_container() -> impl Strategy<Value = Container<i64>> {
        prop_oneof![
            int_sequence().prop_map(Container::Sequence),
            int_entries().prop_map(|entries| Container::Mapping(entries.into_iter().collect())),
        ]
    }

    /// JSON records with a `team` drawn from a tiny set and a numeric `score`
    pub fn team_record() -> impl Strategy<Value = Value> {
        (prop_oneof![Just("red"), Just("blue"), Just("green")], 0i64..10)
            .prop_map(|(team, score)| json!({"team": team, "score": score}))
    }

    /// String-keyed mappings for mixin tests
    pub fn string_map() -> impl Strategy<Value = IndexMap<String, i64>> {
        int_entries().prop_map(|entries| entries.into_iter().collect())
    }
}

#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use crate::functional::prelude::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    proptest! {
        /// The pipeline function is a left fold over its stages
        #[test]
        fn pipeline_is_a_left_fold(seed in -1000i64..1000, adds in proptest::collection::vec(-10i64..10, 0..8)) {
            let stages: Vec<Box<dyn FnOnce(i64) -> i64>> = adds
                .iter()
                .map(|&n| Box::new(move |acc: i64| acc * 2 + n) as Box<dyn FnOnce(i64) -> i64>)
                .collect();
            let expected = adds.iter().fold(seed, |acc, &n| acc * 2 + n);

            prop_assert_eq!(pipeline(seed, stages), expected);
        }

        /// Test that composition is associative
        #[test]
        fn composition_is_associative(x in 0i32..100) {
            let f = |n: i32| n + 1;
            let g = |n: i32| n * 2;
            let h = |n: i32| n - 5;

            let result1 = compose(compose(f, g), h)(x);
            let result2 = compose(f, compose(g, h))(x);

            prop_assert_eq!(result1, result2);
        }

        /// Test that identity is the identity for composition
        #[test]
        fn identity_is_composition_identity(x in 0i32..1000) {
            let f = |n: i32| n * 3 + 7;

            prop_assert_eq!(compose(identity, f)(x), f(x));
            prop_assert_eq!(compose(f, identity)(x), f(x));
        }

        /// Full and partial application of a curried function agree
        #[test]
        fn curried_applications_agree(a in -100i32..100, b in -100i32..100, c in -100i32..100) {
            let f = curry3(|a: i32, b: i32, c: i32| a * 100 + b * 10 + c);

            prop_assert_eq!(f.call(a, b, c), f.partial(a)(b, c));
            prop_assert_eq!(f.call(a, b, c), f.partial2(a, b)(c));
        }

        /// A memoized function runs once per distinct key
        #[test]
        fn memoize_runs_once_per_distinct_key(keys in proptest::collection::vec(0u8..16, 0..64)) {
            let calls = Cell::new(0usize);
            let memo = memoize(|k: u8| {
                calls.set(calls.get() + 1);
                u32::from(k) * 3
            });

            for &k in &keys {
                prop_assert_eq!(memo.call(k), u32::from(k) * 3);
            }

            let distinct: std::collections::BTreeSet<u8> = keys.iter().copied().collect();
            prop_assert_eq!(calls.get(), distinct.len());
            prop_assert_eq!(memo.len(), distinct.len());
        }

        /// Container length matches the number of traversed elements
        #[test]
        fn container_iter_visits_len_elements(c in int_container()) {
            prop_assert_eq!(c.iter().count(), c.len());
            prop_assert_eq!(c.key_snapshot().len(), c.len());
        }
    }
}
