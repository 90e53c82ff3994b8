//! Core types, errors, and combinators for `fnkit`.
//!
//! This crate establishes the data structures and error handling shared by
//! every fnkit crate, plus the higher-order function utilities that do not
//! depend on collections.
//!
//! ## Key Components
//!
//! - **`errors`**: The `Error` enum and `Result` alias. Argument shape problems
//!   surface as `Error::InvalidArgument`, never as a panic.
//! - **`types`**: `Container`, the sequence/mapping variant every collection
//!   operation dispatches on, with its `Key` and the `Record` field lookup.
//! - **`predicates`**: Existence, truthiness and kind checks over JSON values.
//! - **`functional`**: `pipeline`, `curry`, and `memoize`.
//! - **`config`**: Memoization cache policy.
//! - **`constants`**: Environment variable names and shared literals.

pub mod config;
pub mod constants;
pub mod errors;
pub mod functional;
pub mod predicates;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::{
    config::{CachePolicy, MemoizeConfig},
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
