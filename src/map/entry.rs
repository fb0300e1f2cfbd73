//! Map entry definitions
//!
//! Defines the key-value pair stored in the ordered sequence.

use serde::{Deserialize, Serialize};

/// A single key-value pair in the map
///
/// The key never changes once the entry is placed; re-inserting the same key
/// only replaces `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<K, V> {
    /// Sort key (strictly ascending across the sequence)
    pub key: K,

    /// Opaque payload
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Split into a `(key, value)` tuple
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
