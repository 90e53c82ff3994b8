//! Core error type definitions

/// Result type alias for fnkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fnkit operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument was neither a sequence nor a mapping, or otherwise
    /// unusable by the named operation
    InvalidArgument { operation: String, message: String },

    /// A fold without a seed was asked to reduce an empty collection
    EmptyCollection { operation: String },

    /// Configuration errors
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
