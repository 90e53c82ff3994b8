//! Collection operations for fnkit
//!
//! Everything here is built on one traversal primitive, [`each`], which
//! visits a [`Container`](fnkit_core::Container) in a fixed order: ascending
//! index for sequences, insertion order for mappings. The derived operations
//! inherit that order, and none of them mutate their input.
//!
//! - **`iteration`**: `each`
//! - **`derived`**: `map`, `filter`, `not`, `find`, `where_matches`,
//!   `select`, `all`, `any`, `reduce`, `fold`, `zip`, `max`, `min`
//! - **`objects`**: `keys`, `vals`, `clone`, `mixin`, `to_array`
//! - **`dynamic`**: the same operations over untyped `serde_json::Value`s

pub mod derived;
pub mod dynamic;
pub mod iteration;
pub mod objects;

pub use self::{
    derived::*,
    iteration::each,
    objects::{clone, keys, mixin, to_array, vals},
};
