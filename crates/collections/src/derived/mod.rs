//! Operations derived from [`each`](crate::iteration::each)
//!
//! None of these mutate their input. Every predicate and callback sees every
//! element exactly once, in traversal order, even when the answer is settled
//! early: `find`, `all` and `any` do not short-circuit.

pub mod extrema;
pub mod filtering;
pub mod folding;
pub mod projection;
pub mod zip;

pub use self::{
    extrema::{max, min},
    filtering::{all, any, filter, find, not, where_matches, where_matches_by},
    folding::{fold, reduce, reduce_into},
    projection::{map, select},
    zip::{zip, zip2},
};
