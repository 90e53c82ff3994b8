//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { operation, message } => {
                write!(f, "invalid argument to '{operation}': {message}")
            }
            Error::EmptyCollection { operation } => {
                write!(
                    f,
                    "cannot {operation} an empty collection without a seed"
                )
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}
