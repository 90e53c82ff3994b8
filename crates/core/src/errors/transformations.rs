//! Validation helpers shared by configuration parsing

use super::types::{Error, Result};

/// Functional validation utilities
pub struct Validate;

impl Validate {
    /// Validate that a string is not empty
    pub fn not_empty(value: &str, field_name: &str) -> Result<()> {
        if value.trim().is_empty() {
            Err(Error::Configuration {
                message: format!("Field '{field_name}' cannot be empty"),
            })
        } else {
            Ok(())
        }
    }
}
