//! Extension traits for error handling

use super::types::{Error, Result};

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| prefix(e.into(), message.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| prefix(e.into(), f()))
    }
}

// Argument errors keep their variant so callers can still match on them.
fn prefix(error: Error, context: String) -> Error {
    match error {
        Error::InvalidArgument { operation, message } => Error::InvalidArgument {
            operation,
            message: format!("{context}: {message}"),
        },
        other => Error::Configuration {
            message: format!("{context}: {other}"),
        },
    }
}
