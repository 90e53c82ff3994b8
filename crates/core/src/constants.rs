//! Constants used throughout the fnkit codebase

// Environment variable names
pub const FNKIT_LOG_VAR: &str = "FNKIT_LOG";
pub const FNKIT_MEMO_CAPACITY_VAR: &str = "FNKIT_MEMO_CAPACITY";

// Log filter used when FNKIT_LOG is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

// Joins the stringified arguments of a memoized call into one cache key
pub const ARG_KEY_SEPARATOR: &str = ",";
