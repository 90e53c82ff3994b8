//! Traversal keys: a position in a sequence or a name in a mapping

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Borrowed key handed to traversal callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Zero-based position in a sequence
    Index(usize),
    /// Entry name in a mapping
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// The index, if this key addresses a sequence position
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// The name, if this key addresses a mapping entry
    pub fn as_name(&self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(*name),
        }
    }

    /// Copy the key into an owned [`KeyBuf`]
    pub fn to_buf(&self) -> KeyBuf {
        match self {
            Key::Index(index) => KeyBuf::Index(*index),
            Key::Name(name) => KeyBuf::Name((*name).to_string()),
        }
    }
}

impl Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Owned counterpart of [`Key`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyBuf {
    Index(usize),
    Name(String),
}

impl KeyBuf {
    /// Borrow as a [`Key`]
    pub fn as_key(&self) -> Key<'_> {
        match self {
            KeyBuf::Index(index) => Key::Index(*index),
            KeyBuf::Name(name) => Key::Name(name),
        }
    }
}

impl Display for KeyBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_key().fmt(f)
    }
}

impl From<usize> for KeyBuf {
    fn from(index: usize) -> Self {
        KeyBuf::Index(index)
    }
}

impl From<&str> for KeyBuf {
    fn from(name: &str) -> Self {
        KeyBuf::Name(name.to_string())
    }
}

impl From<String> for KeyBuf {
    fn from(name: String) -> Self {
        KeyBuf::Name(name)
    }
}

impl From<Key<'_>> for KeyBuf {
    fn from(key: Key<'_>) -> Self {
        key.to_buf()
    }
}
