//! Object and conversion helpers

use crate::derived::map;
use crate::iteration::each;
use fnkit_core::{Container, Key};
use indexmap::IndexMap;

/// Keys in the order `each` visits them: indices for a sequence, entry
/// names for a mapping
pub fn keys<T>(container: &Container<T>) -> Vec<Key<'_>> {
    let mut out = Vec::with_capacity(container.len());
    each(container, |_, key| out.push(key));
    out
}

/// Values in the order `each` visits them
pub fn vals<T: Clone>(container: &Container<T>) -> Vec<T> {
    map(container, T::clone)
}

/// Shallow copy: a new container of the same kind holding clones of the
/// same elements under the same keys
pub fn clone<T: Clone>(container: &Container<T>) -> Container<T> {
    match container {
        Container::Sequence(_) => Container::Sequence(vals(container)),
        Container::Mapping(_) => {
            let mut entries = IndexMap::with_capacity(container.len());
            each(container, |value, key| {
                if let Some(name) = key.as_name() {
                    entries.insert(name.to_string(), value.clone());
                }
            });
            Container::Mapping(entries)
        }
    }
}

/// Union of every source's entries in a new mapping.
///
/// On a name collision the later source's value wins while the entry keeps
/// the position where the name first appeared. Sources are left untouched.
pub fn mixin<'a, T, I>(sources: I) -> IndexMap<String, T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a IndexMap<String, T>>,
{
    let mut merged = IndexMap::new();
    for source in sources {
        for (name, value) in source {
            merged.insert(name.clone(), value.clone());
        }
    }
    merged
}

/// Values of any container as a plain `Vec`
pub fn to_array<T: Clone>(container: &Container<T>) -> Vec<T> {
    vals(container)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_traversal_order() {
        let seq = Container::sequence(["x", "y"]);
        let map = Container::mapping([("b", 1), ("a", 2)]);

        assert_eq!(keys(&seq), vec![Key::Index(0), Key::Index(1)]);
        assert_eq!(keys(&map), vec![Key::Name("b"), Key::Name("a")]);
        assert_eq!(vals(&map), vec![1, 2]);
    }

    #[test]
    fn clone_is_shallow_and_keeps_the_kind() {
        let map = Container::mapping([("a", vec![1]), ("b", vec![2, 3])]);
        let copy = clone(&map);

        assert_eq!(copy, map);
        assert!(!copy.is_indexed());

        let seq = Container::sequence(["p", "q"]);
        assert_eq!(clone(&seq), seq);
    }

    #[test]
    fn mixin_later_sources_win() {
        let first = IndexMap::from([("a".to_string(), 1)]);
        let second = IndexMap::from([("a".to_string(), 2), ("b".to_string(), 3)]);

        let merged = mixin([&first, &second]);

        assert_eq!(merged, IndexMap::from([("a".to_string(), 2), ("b".to_string(), 3)]));
        assert_eq!(first, IndexMap::from([("a".to_string(), 1)]));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn mixin_keeps_first_seen_positions() {
        let first = IndexMap::from([("z".to_string(), 0), ("m".to_string(), 0)]);
        let second = IndexMap::from([("a".to_string(), 1), ("z".to_string(), 1)]);

        let merged = mixin(vec![&first, &second]);
        let order: Vec<&str> = merged.keys().map(String::as_str).collect();

        assert_eq!(order, vec!["z", "m", "a"]);
        assert_eq!(merged["z"], 1);
    }

    #[test]
    fn mixin_of_nothing_is_empty() {
        assert!(mixin::<i32, _>(Vec::new()).is_empty());
    }

    #[test]
    fn to_array_flattens_a_mapping() {
        let map = Container::mapping([("one", 1), ("two", 2)]);

        assert_eq!(to_array(&map), vec![1, 2]);
    }
}
