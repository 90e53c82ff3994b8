//! The traversal primitive every collection operation is built on

use fnkit_core::{Container, Key};

/// Call `visit` once per element of `container`, in traversal order, with
/// the element and its key.
///
/// Sequences are visited by ascending index over the length read once up
/// front. Mappings are visited over a key list captured before the first
/// callback, in insertion order.
pub fn each<'a, T, F>(container: &'a Container<T>, mut visit: F)
where
    F: FnMut(&'a T, Key<'a>),
{
    each_with(container, (), |(), value, key| visit(value, key));
}

/// [`each`] threading an accumulator through the visits
pub(crate) fn each_with<'a, T, A, F>(container: &'a Container<T>, seed: A, mut step: F) -> A
where
    F: FnMut(A, &'a T, Key<'a>) -> A,
{
    match container {
        Container::Sequence(items) => {
            tracing::trace!(mode = "indexed", len = items.len(), "each");
            items
                .iter()
                .enumerate()
                .fold(seed, |acc, (index, item)| step(acc, item, Key::Index(index)))
        }
        Container::Mapping(_) => {
            let keys = container.key_snapshot();
            tracing::trace!(mode = "mapping", len = keys.len(), "each");
            keys.into_iter().fold(seed, |acc, key| match container.get(key) {
                Some(value) => step(acc, value, key),
                None => acc,
            })
        }
    }
}
