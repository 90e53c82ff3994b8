//! Field lookup for the records `where_matches` and `select` operate on

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A value with named fields
pub trait Record {
    /// Type stored in each field
    type Field: PartialEq + Clone;

    /// Look up a field by name
    fn field(&self, name: &str) -> Option<&Self::Field>;
}

impl<V: PartialEq + Clone> Record for IndexMap<String, V> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V: PartialEq + Clone, S: BuildHasher> Record for HashMap<String, V, S> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V: PartialEq + Clone> Record for BTreeMap<String, V> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Field = R::Field;

    fn field(&self, name: &str) -> Option<&R::Field> {
        (**self).field(name)
    }
}

/// Only JSON objects have fields
impl Record for Value {
    type Field = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(name))
    }
}
