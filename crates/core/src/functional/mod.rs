//! Higher-order function combinators for fnkit
//!
//! This module provides composition, pipelines, currying with explicit
//! arity, and memoization. None of it depends on the collection operations.

pub mod composition;
pub mod curry;
pub mod memoize;

pub use composition::{compose, identity, pipeline, Compose, Pipe};
pub use curry::{
    curry, curry2, curry3, curry_n, uncurry, Applied, CurryN, Curried2, Curried3, PartialN,
};
pub use memoize::{memoize, memoize_with, ArgKey, MemoStats, Memoized};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::composition::{compose, identity, pipeline, Compose, Pipe};
    pub use super::curry::{curry, curry2, curry3, curry_n, uncurry, Applied};
    pub use super::memoize::{memoize, memoize_with, ArgKey, Memoized};
    pub use crate::{pipeline, try_pipeline};
}
