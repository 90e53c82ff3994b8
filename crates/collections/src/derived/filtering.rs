//! Predicate-driven selection

use crate::iteration::each;
use fnkit_core::{Container, Record};

/// Elements for which `predicate` holds, in traversal order
pub fn filter<T, P>(container: &Container<T>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut kept = Vec::new();
    each(container, |value, _| {
        if predicate(value) {
            kept.push(value.clone());
        }
    });
    kept
}

/// Elements for which `predicate` does not hold
pub fn not<T, P>(container: &Container<T>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(container, |value| !predicate(value))
}

/// First element satisfying `predicate`.
///
/// The predicate still runs over the whole container.
pub fn find<T, P>(container: &Container<T>, mut predicate: P) -> Option<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut found = None;
    each(container, |value, _| {
        if predicate(value) && found.is_none() {
            found = Some(value);
        }
    });
    found.cloned()
}

/// Records whose fields equal every `(name, value)` pair in `criteria`.
///
/// A record missing a named field does not match. Empty criteria match
/// every record.
pub fn where_matches<R, K>(container: &Container<R>, criteria: &[(K, R::Field)]) -> Vec<R>
where
    R: Record + Clone,
    K: AsRef<str>,
{
    where_matches_by(container, criteria, |field, expected| field == expected)
}

/// [`where_matches`] with a custom field comparison
pub fn where_matches_by<R, K, E>(
    container: &Container<R>,
    criteria: &[(K, R::Field)],
    mut equal: E,
) -> Vec<R>
where
    R: Record + Clone,
    K: AsRef<str>,
    E: FnMut(&R::Field, &R::Field) -> bool,
{
    filter(container, |record| {
        criteria.iter().all(|(name, expected)| {
            record
                .field(name.as_ref())
                .is_some_and(|field| equal(field, expected))
        })
    })
}

/// Whether `predicate` holds for every element; vacuously true when empty
pub fn all<T, P>(container: &Container<T>, predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    count_matching(container, predicate) == container.len()
}

/// Whether `predicate` holds for at least one element; false when empty
pub fn any<T, P>(container: &Container<T>, predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    count_matching(container, predicate) > 0
}

fn count_matching<T, P>(container: &Container<T>, mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut count = 0;
    each(container, |value, _| {
        if predicate(value) {
            count += 1;
        }
    });
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use rstest::rstest;
    use serde_json::{json, Value};

    fn people() -> Container<Value> {
        Container::sequence([
            json!({"name": "ada", "team": "red", "lead": true}),
            json!({"name": "bob", "team": "blue"}),
            json!({"name": "cy", "team": "red", "lead": false}),
        ])
    }

    #[test]
    fn filter_and_not_partition_the_input() {
        let c = Container::sequence(1..=10);
        let even = filter(&c, |n| n % 2 == 0);
        let odd = not(&c, |n| n % 2 == 0);

        assert_eq!(even, vec![2, 4, 6, 8, 10]);
        assert_eq!(odd, vec![1, 3, 5, 7, 9]);
        assert_eq!(c.len(), 10);
    }

    #[test]
    fn filter_over_a_mapping_keeps_values_in_insertion_order() {
        let c = Container::mapping([("x", 5), ("y", -1), ("z", 7)]);

        assert_eq!(filter(&c, |n| *n > 0), vec![5, 7]);
    }

    #[test]
    fn find_returns_the_first_match_but_visits_everything() {
        let c = Container::sequence([1, 4, 6, 9]);
        let mut calls = 0;
        let first_even = find(&c, |n| {
            calls += 1;
            n % 2 == 0
        });

        assert_eq!(first_even, Some(4));
        assert_eq!(calls, 4);
        assert_eq!(find(&c, |n| *n > 100), None);
    }

    #[test]
    fn where_matches_requires_every_criterion() {
        let reds = where_matches(&people(), &[("team", json!("red"))]);
        assert_eq!(reds.len(), 2);

        let red_leads = where_matches(&people(), &[("team", json!("red")), ("lead", json!(true))]);
        assert_eq!(red_leads, vec![json!({"name": "ada", "team": "red", "lead": true})]);
    }

    #[test]
    fn where_matches_treats_missing_fields_as_mismatch() {
        let no_lead = where_matches(&people(), &[("lead", json!(null))]);
        assert!(no_lead.is_empty());

        let everyone = where_matches::<_, &str>(&people(), &[]);
        assert_eq!(everyone.len(), 3);
    }

    #[test]
    fn where_matches_over_typed_records() {
        let rows: Container<IndexMap<String, i32>> = Container::sequence([
            IndexMap::from([("a".to_string(), 1), ("b".to_string(), 2)]),
            IndexMap::from([("a".to_string(), 1)]),
        ]);

        assert_eq!(where_matches(&rows, &[("a", 1)]).len(), 2);
        assert_eq!(where_matches(&rows, &[("a", 1), ("b", 2)]).len(), 1);
    }

    #[test]
    fn where_matches_by_uses_the_given_comparison() {
        let words = Container::sequence([
            IndexMap::from([("word".to_string(), "Red".to_string())]),
            IndexMap::from([("word".to_string(), "blue".to_string())]),
        ]);
        let criteria = [("word", "red".to_string())];

        assert!(where_matches(&words, &criteria).is_empty());
        let folded = where_matches_by(&words, &criteria, |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(folded.len(), 1);
    }

    #[rstest]
    #[case::all_positive(vec![1, 2, 3], true, true)]
    #[case::mixed(vec![1, -2, 3], false, true)]
    #[case::none_positive(vec![-1, -2], false, false)]
    #[case::empty(vec![], true, false)]
    fn all_and_any(#[case] items: Vec<i32>, #[case] expect_all: bool, #[case] expect_any: bool) {
        let c = Container::sequence(items);

        assert_eq!(all(&c, |n| *n > 0), expect_all);
        assert_eq!(any(&c, |n| *n > 0), expect_any);
    }

    #[test]
    fn any_does_not_short_circuit() {
        let c = Container::sequence([true, false, false]);
        let mut calls = 0;
        assert!(any(&c, |b| {
            calls += 1;
            *b
        }));
        assert_eq!(calls, 3);
    }
}
