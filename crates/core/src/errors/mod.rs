//! Error types and result extensions for fnkit operations

mod builders;
mod conversions;
mod display;
mod extensions;
mod transformations;
mod types;

pub use extensions::*;
pub use transformations::Validate;
pub use types::{Error, Result};
