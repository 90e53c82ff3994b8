//! Accumulation over a container

use crate::iteration::each_with;
use fnkit_core::{Container, Error, Key, Result};

/// Fold every element into `seed`, in traversal order
pub fn fold<T, A, F>(container: &Container<T>, seed: A, mut f: F) -> A
where
    F: FnMut(A, &T, Key<'_>) -> A,
{
    each_with(container, seed, |acc, value, key| f(acc, value, key))
}

/// Combine the elements with `f`.
///
/// With a seed, `f` runs for every element starting from the seed. Without
/// one, the first element becomes the accumulator and `f` runs for the rest.
/// An empty container returns the seed, or `EmptyCollection` when there is
/// none.
pub fn reduce<T, F>(container: &Container<T>, f: F, seed: Option<T>) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T, Key<'_>) -> T,
{
    reduce_into(container, f, seed, T::clone)
}

/// [`reduce`] for an accumulator type that differs from the element type;
/// `first` turns the first element into the accumulator when there is no
/// seed
pub fn reduce_into<T, A, F, S>(
    container: &Container<T>,
    mut f: F,
    seed: Option<A>,
    mut first: S,
) -> Result<A>
where
    F: FnMut(A, &T, Key<'_>) -> A,
    S: FnMut(&T) -> A,
{
    fold(container, seed, |acc, value, key| {
        Some(match acc {
            Some(acc) => f(acc, value, key),
            None => first(value),
        })
    })
    .ok_or_else(|| Error::empty_collection("reduce"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_with_and_without_seed() {
        let c = Container::sequence([1, 2, 3, 4]);
        let add = |acc: i32, n: &i32, _: Key<'_>| acc + n;

        assert_eq!(reduce(&c, add, None).unwrap(), 10);
        assert_eq!(reduce(&c, add, Some(0)).unwrap(), 10);
        assert_eq!(reduce(&c, add, Some(5)).unwrap(), 15);
    }

    #[test]
    fn reduce_without_seed_skips_the_first_call() {
        let c = Container::sequence([7, 8, 9]);
        let mut seen = Vec::new();
        let last = reduce(
            &c,
            |_, n, key| {
                seen.push(key.as_index());
                *n
            },
            None,
        )
        .unwrap();

        assert_eq!(last, 9);
        assert_eq!(seen, vec![Some(1), Some(2)]);
    }

    #[test]
    fn reduce_of_empty_input() {
        let empty = Container::<i32>::sequence([]);

        assert_eq!(reduce(&empty, |a, b, _| a + b, Some(3)).unwrap(), 3);
        assert!(matches!(
            reduce(&empty, |a, b, _| a + b, None),
            Err(Error::EmptyCollection { .. })
        ));
    }

    #[test]
    fn reduce_into_converts_the_first_element() {
        let words = Container::sequence(["ab", "cde", "f"]);
        let total = reduce_into(&words, |acc: usize, w, _| acc + w.len(), None, |w| w.len()).unwrap();
        let seeded = reduce_into(&words, |acc: usize, w, _| acc + w.len(), Some(10), |w| w.len()).unwrap();

        assert_eq!(total, 6);
        assert_eq!(seeded, 16);
        assert!(reduce_into(&Container::<&str>::sequence([]), |a, _, _| a, None, |_| 0usize).is_err());
    }

    #[test]
    fn fold_passes_mapping_keys() {
        let c = Container::mapping([("a", 1), ("b", 2)]);
        let joined = fold(&c, String::new(), |mut acc, n, key| {
            acc.push_str(&format!("{key}{n}"));
            acc
        });

        assert_eq!(joined, "a1b2");
    }
}
