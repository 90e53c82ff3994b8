//! Collection operations over untyped JSON values
//!
//! Each entry point classifies its input once: an array is traversed as a
//! sequence and an object as a mapping. Scalars and `null` are rejected with
//! `InvalidArgument` before any callback runs.

use crate::{derived, iteration, objects};
use fnkit_core::{predicates, Container, Error, Key, KeyBuf, Result};
use serde_json::{Map, Value};

fn to_array(values: Vec<&Value>) -> Value {
    Value::Array(values.into_iter().cloned().collect())
}

/// Visit every element of an array or object
pub fn each<F>(value: &Value, mut visit: F) -> Result<()>
where
    F: FnMut(&Value, Key<'_>),
{
    let container = Container::borrow_json("each", value)?;
    iteration::each(&container, |element, key| visit(*element, key));
    Ok(())
}

/// Array of `f` applied to each element
pub fn map<F>(value: &Value, mut f: F) -> Result<Value>
where
    F: FnMut(&Value) -> Value,
{
    let container = Container::borrow_json("map", value)?;
    Ok(Value::Array(derived::map(&container, |element| f(*element))))
}

/// Array of the elements satisfying `predicate`
pub fn filter<P>(value: &Value, mut predicate: P) -> Result<Value>
where
    P: FnMut(&Value) -> bool,
{
    let container = Container::borrow_json("filter", value)?;
    Ok(to_array(derived::filter(&container, |element| {
        predicate(*element)
    })))
}

/// Combine the elements with `f`; see [`derived::reduce`] for seed handling
pub fn reduce<F>(value: &Value, mut f: F, seed: Option<Value>) -> Result<Value>
where
    F: FnMut(Value, &Value, Key<'_>) -> Value,
{
    let container = Container::borrow_json("reduce", value)?;
    derived::reduce_into(
        &container,
        |acc, element, key| f(acc, *element, key),
        seed,
        |element| (*element).clone(),
    )
}

/// Objects in an array (or object) whose fields equal every entry of
/// `criteria`, which must itself be an object. Numbers compare by value,
/// so a criterion of `1.0` matches a field holding `1`.
pub fn where_matches(value: &Value, criteria: &Value) -> Result<Value> {
    let Value::Object(criteria) = criteria else {
        return Err(Error::invalid_argument(
            "where",
            format!(
                "criteria must be an object, found {}",
                predicates::kind_name(criteria)
            ),
        ));
    };
    let container = Container::borrow_json("where", value)?;
    let pairs: Vec<(&str, Value)> = criteria
        .iter()
        .map(|(name, expected)| (name.as_str(), expected.clone()))
        .collect();

    Ok(to_array(derived::where_matches_by(
        &container,
        &pairs,
        predicates::strictly_equal,
    )))
}

/// Array of each element's `name` field, `null` where it is missing
pub fn select(value: &Value, name: &str) -> Result<Value> {
    let container = Container::borrow_json("select", value)?;
    Ok(Value::Array(
        derived::select(&container, name)
            .into_iter()
            .map(|field| field.unwrap_or(Value::Null))
            .collect(),
    ))
}

/// Keys in traversal order
pub fn keys(value: &Value) -> Result<Vec<KeyBuf>> {
    let container = Container::borrow_json("keys", value)?;
    Ok(objects::keys(&container)
        .into_iter()
        .map(KeyBuf::from)
        .collect())
}

/// Array of the values in traversal order
pub fn vals(value: &Value) -> Result<Value> {
    let container = Container::borrow_json("vals", value)?;
    Ok(to_array(objects::vals(&container)))
}

/// Object holding the union of every argument's entries; later arguments
/// win. Every argument must be an object.
pub fn mixin(values: &[Value]) -> Result<Value> {
    let mut merged = Map::new();
    for (position, value) in values.iter().enumerate() {
        let Value::Object(entries) = value else {
            return Err(Error::invalid_argument(
                "mixin",
                format!(
                    "argument {position} must be an object, found {}",
                    predicates::kind_name(value)
                ),
            ));
        };
        for (name, v) in entries {
            merged.insert(name.clone(), v.clone());
        }
    }
    Ok(Value::Object(merged))
}
