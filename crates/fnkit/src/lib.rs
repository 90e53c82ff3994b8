//! fnkit: functional utilities over sequences and mappings
//!
//! Collection operations are built on a single traversal primitive,
//! [`each`], and never mutate their input. Function combinators
//! ([`pipeline`](fn@pipeline), [`curry3`], [`memoize`]) stand on their own.
//!
//! ```
//! use fnkit::prelude::*;
//!
//! let scores = Container::sequence([3, 8, 5]);
//! let total = reduce(&scores, |acc, n, _| acc + n, None).unwrap();
//! assert_eq!(total, 16);
//!
//! let add = curry3(|a: i32, b: i32, c: i32| a + b + c);
//! assert_eq!(add.partial(1)(2, 3), 6);
//! ```

pub use fnkit_core::{
    config, errors, functional, predicates, types, CachePolicy, Container, ContainerKind, Error,
    Key, KeyBuf, MemoizeConfig, Record, Result, ResultExt,
};

pub use fnkit_core::functional::{
    compose, curry, curry2, curry3, curry_n, identity, memoize, memoize_with, pipeline, uncurry,
    Applied, ArgKey, Compose, CurryN, Curried2, Curried3, MemoStats, Memoized, PartialN, Pipe,
};
pub use fnkit_core::{pipeline, try_pipeline};

pub use fnkit_collections::{
    all, any, clone, derived, dynamic, each, filter, find, fold, keys, map, max, min, mixin, not,
    objects, reduce, reduce_into, select, to_array, vals, where_matches, where_matches_by, zip,
    zip2,
};

/// Subscriber setup and structured events
pub use fnkit_utils::tracing as logging;

/// Everything needed for everyday use
pub mod prelude {
    pub use fnkit_collections::{
        all, any, each, filter, find, fold, keys, map, max, min, mixin, not, reduce, select,
        to_array, vals, where_matches, zip, zip2,
    };
    pub use fnkit_core::functional::prelude::*;
    pub use fnkit_core::functional::{CurryN, MemoStats};
    pub use fnkit_core::{Container, Error, Key, KeyBuf, MemoizeConfig, Record, Result};
}
