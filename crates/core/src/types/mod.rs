//! Core data types for fnkit.
//!
//! ## Organization
//!
//! - **`container`**: the sequence/mapping variant every collection operation traverses
//! - **`key`**: borrowed and owned traversal keys
//! - **`record`**: named-field lookup used by `where_matches` and `select`

pub mod container;
pub mod key;
pub mod record;

pub use container::*;
pub use key::*;
pub use record::*;
