//! The tagged container every collection operation traverses
//!
//! A [`Container`] is either an ordered sequence or a string-keyed mapping.
//! Operations dispatch on the variant tag once per call, and that tag decides
//! the traversal order for the rest of the call: ascending indices for
//! sequences, insertion order for mappings.

use super::key::Key;
use crate::errors::{Error, Result};
use crate::predicates;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Display};

/// Sequence or mapping of `T`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Container<T> {
    /// Integer-indexed, contiguous, length known up front
    Sequence(Vec<T>),
    /// String keys, enumerated in insertion order
    Mapping(IndexMap<String, T>),
}

/// Which traversal mode a container selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Sequence,
    Mapping,
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Sequence => write!(f, "sequence"),
            ContainerKind::Mapping => write!(f, "mapping"),
        }
    }
}

impl<T> Container<T> {
    /// Build a sequence from any iterable
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Container::Sequence(items.into_iter().collect())
    }

    /// Build a mapping from `(name, value)` pairs; a repeated name keeps its
    /// first position and takes the last value
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        Container::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Traversal mode selected by this container
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::Sequence(_) => ContainerKind::Sequence,
            Container::Mapping(_) => ContainerKind::Mapping,
        }
    }

    /// Whether this container is traversed by index
    pub fn is_indexed(&self) -> bool {
        matches!(self, Container::Sequence(_))
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            Container::Sequence(items) => items.len(),
            Container::Mapping(entries) => entries.len(),
        }
    }

    /// Whether there are no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up an element. An index never addresses a mapping entry and a
    /// name never addresses a sequence slot.
    pub fn get(&self, key: Key<'_>) -> Option<&T> {
        match (self, key) {
            (Container::Sequence(items), Key::Index(index)) => items.get(index),
            (Container::Mapping(entries), Key::Name(name)) => entries.get(name),
            _ => None,
        }
    }

    /// Keys in traversal order, captured up front
    pub fn key_snapshot(&self) -> Vec<Key<'_>> {
        match self {
            Container::Sequence(items) => (0..items.len()).map(Key::Index).collect(),
            Container::Mapping(entries) => {
                entries.keys().map(|name| Key::Name(name.as_str())).collect()
            }
        }
    }

    /// Iterate `(key, element)` pairs in traversal order
    pub fn iter(&self) -> Iter<'_, T> {
        let inner = match self {
            Container::Sequence(items) => IterInner::Sequence(items.iter().enumerate()),
            Container::Mapping(entries) => IterInner::Mapping(entries.iter()),
        };
        Iter { inner }
    }

    /// Iterate elements in traversal order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Container::Sequence(Vec::new())
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(items: Vec<T>) -> Self {
        Container::Sequence(items)
    }
}

impl<T: Clone> From<&[T]> for Container<T> {
    fn from(items: &[T]) -> Self {
        Container::Sequence(items.to_vec())
    }
}

impl<T> From<IndexMap<String, T>> for Container<T> {
    fn from(entries: IndexMap<String, T>) -> Self {
        Container::Mapping(entries)
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Container::sequence(iter)
    }
}

impl TryFrom<Value> for Container<Value> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Container::Sequence(items)),
            Value::Object(entries) => Ok(Container::Mapping(entries.into_iter().collect())),
            other => Err(not_a_container("container", &other)),
        }
    }
}

impl TryFrom<&Value> for Container<Value> {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        Ok(match Container::borrow_json("container", value)? {
            Container::Sequence(items) => Container::Sequence(items.into_iter().cloned().collect()),
            Container::Mapping(entries) => Container::Mapping(
                entries
                    .into_iter()
                    .map(|(name, v)| (name, v.clone()))
                    .collect(),
            ),
        })
    }
}

impl<'v> Container<&'v Value> {
    /// Borrow a JSON array as a sequence or a JSON object as a mapping,
    /// without copying the elements. Any other value is an
    /// `InvalidArgument` attributed to `operation`.
    pub fn borrow_json(operation: &str, value: &'v Value) -> Result<Self> {
        if predicates::is_indexed(value) {
            let items = value.as_array().into_iter().flatten();
            return Ok(Container::Sequence(items.collect()));
        }
        if predicates::is_mapping(value) {
            let entries = value.as_object().into_iter().flatten();
            return Ok(Container::Mapping(
                entries.map(|(name, v)| (name.clone(), v)).collect(),
            ));
        }
        Err(not_a_container(operation, value))
    }
}

fn not_a_container(operation: &str, value: &Value) -> Error {
    Error::invalid_argument(
        operation,
        format!(
            "expected an array or an object, found {}",
            predicates::kind_name(value)
        ),
    )
}

/// Iterator over `(key, element)` pairs of a [`Container`]
pub struct Iter<'a, T> {
    inner: IterInner<'a, T>,
}

enum IterInner<'a, T> {
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, T>>),
    Mapping(indexmap::map::Iter<'a, String, T>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Key<'a>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Sequence(items) => items.next().map(|(i, v)| (Key::Index(i), v)),
            IterInner::Mapping(entries) => entries.next().map(|(k, v)| (Key::Name(k.as_str()), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Sequence(items) => items.size_hint(),
            IterInner::Mapping(entries) => entries.size_hint(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = (Key<'a>, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
