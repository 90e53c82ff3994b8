//! Configuration for memoization caches
//!
//! A memoized function keeps every result it has computed unless it is given
//! a bounded policy. The default, [`CachePolicy::Unbounded`], never evicts.
//! [`CachePolicy::Lru`] caps the cache and drops the least recently used key
//! once the cap is reached.

use crate::constants::FNKIT_MEMO_CAPACITY_VAR;
use crate::errors::{Error, Result, ResultExt, Validate};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Eviction policy of a memoization cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CachePolicy {
    /// Grow for the lifetime of the memoized function
    #[default]
    Unbounded,
    /// Keep at most `capacity` results
    Lru { capacity: NonZeroUsize },
}

/// Settings applied when a memoized function is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoizeConfig {
    #[serde(default)]
    pub policy: CachePolicy,
}

impl MemoizeConfig {
    /// Never evict
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Evict least recently used results beyond `capacity`
    pub fn bounded(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            Error::configuration("memoization cache capacity must be greater than zero")
        })?;
        Ok(Self {
            policy: CachePolicy::Lru { capacity },
        })
    }

    /// Parse from JSON, e.g. `{"policy": {"kind": "lru", "capacity": 64}}`
    pub fn from_json(input: &str) -> Result<Self> {
        let config = serde_json::from_str(input).context("parsing memoize config")?;
        Ok(config)
    }

    /// Read the capacity from `FNKIT_MEMO_CAPACITY`; unset means unbounded
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(FNKIT_MEMO_CAPACITY_VAR).ok();
        Self::from_capacity_setting(raw.as_deref())
    }

    /// [`from_env`](Self::from_env), falling back to unbounded on a bad setting
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring {FNKIT_MEMO_CAPACITY_VAR}, memo caches are unbounded");
            Self::unbounded()
        })
    }

    /// Interpret a raw capacity setting as read from the environment
    pub fn from_capacity_setting(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw else {
            tracing::debug!("{FNKIT_MEMO_CAPACITY_VAR} unset, memo caches are unbounded");
            return Ok(Self::unbounded());
        };

        Validate::not_empty(raw, FNKIT_MEMO_CAPACITY_VAR)?;
        let capacity: usize = raw
            .trim()
            .parse()
            .map_err(|e| {
                Error::configuration(format!(
                    "{FNKIT_MEMO_CAPACITY_VAR} must be a positive integer, got '{raw}': {e}"
                ))
            })?;
        tracing::debug!(capacity, "memo caches bounded by {FNKIT_MEMO_CAPACITY_VAR}");
        Self::bounded(capacity)
    }

    /// Capacity limit, if any
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        match self.policy {
            CachePolicy::Unbounded => None,
            CachePolicy::Lru { capacity } => Some(capacity),
        }
    }
}
