//! Per-element transforms

use crate::iteration::each;
use fnkit_core::{Container, Record};

/// Apply `f` to each element, collecting results in traversal order.
///
/// A mapping yields a plain sequence of results; its keys are dropped.
pub fn map<T, U, F>(container: &Container<T>, mut f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut out = Vec::with_capacity(container.len());
    each(container, |value, _| out.push(f(value)));
    out
}

/// The `name` field of each record; `None` where a record lacks it
pub fn select<R>(container: &Container<R>, name: &str) -> Vec<Option<R::Field>>
where
    R: Record,
{
    map(container, |record| record.field(name).cloned())
}
