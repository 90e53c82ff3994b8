//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an invalid argument error for the named operation
    #[must_use]
    pub fn invalid_argument(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an empty collection error for the named operation
    #[must_use]
    pub fn empty_collection(operation: impl Into<String>) -> Self {
        Error::EmptyCollection {
            operation: operation.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error rejects the shape of an argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
