//! SortedMap implementation
//!
//! Sorted `Vec` of entries behind a reader/writer lock.

use std::borrow::Borrow;
use std::fmt;
use std::mem;

use crate::config::Config;

use super::entry::Entry;
use super::guard::GuardedLock;

/// Thread-safe ordered map backed by a contiguous sorted vector
///
/// Entries are kept strictly ascending by key with no duplicates. Every keyed
/// operation starts with a binary search for the insertion point, so lookups
/// are `O(log n)`.
///
/// ## Cost model
/// - `get` / `exist`: `O(log n)`
/// - `add` on an existing key: `O(log n)` (value replaced in place)
/// - `add` on a new key / `delete`: `O(n)`, the tail of the vector is shifted
///   by one slot. This is the dominant cost; prefer a tree for large
///   write-heavy workloads.
/// - `first` / `last` / `len`: `O(1)`
///
/// ## Concurrency
/// One `parking_lot::RwLock` guards the whole sequence. Read operations
/// (`get`, `exist`, `len`, `range*`, `first*`, `last*`, `save*`) take it shared;
/// `add`, `delete`, `clear` and `load*` take it exclusive. Every operation
/// holds the lock until it returns.
///
/// ## Re-entrancy
/// `range` and `range_backward` run the caller's closure while the shared lock
/// is held. The closure must not call any method on the same map. Doing so is
/// detected and panics instead of deadlocking.
pub struct SortedMap<K, V> {
    config: Config,
    entries: GuardedLock<Vec<Entry<K, V>>>,
}

// =============================================================================
// Search
// =============================================================================

/// Smallest index `i` with `entries[i].key >= key`, or `entries.len()`
fn locate<K, V, Q>(entries: &[Entry<K, V>], key: &Q) -> usize
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    entries.partition_point(|entry| entry.key.borrow() < key)
}

/// `Ok(index)` when the key is present, `Err(insertion_point)` otherwise
fn search<K, V, Q>(entries: &[Entry<K, V>], key: &Q) -> Result<usize, usize>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let index = locate(entries, key);
    match entries.get(index) {
        Some(entry) if entry.key.borrow() == key => Ok(index),
        _ => Err(index),
    }
}

/// Insert or replace, returning the replaced value
fn insert_entry<K: Ord, V>(entries: &mut Vec<Entry<K, V>>, key: K, value: V) -> Option<V> {
    match search(entries, &key) {
        Ok(index) => Some(mem::replace(&mut entries[index].value, value)),
        Err(index) => {
            // O(n): shifts entries[index..] right by one
            entries.insert(index, Entry::new(key, value));
            None
        }
    }
}

impl<K: Ord, V> SortedMap<K, V> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a new empty map with the default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::builder().initial_capacity(capacity).build())
    }

    pub fn with_config(config: Config) -> Self {
        let entries = Vec::with_capacity(config.initial_capacity);
        Self {
            config,
            entries: GuardedLock::new(entries),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Mutation (exclusive lock)
    // =========================================================================

    /// Insert a key-value pair, replacing the value if the key exists
    ///
    /// Returns the previous value for the key, if any.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let mut entries = self.entries.write();
        insert_entry(&mut entries, key, value)
    }

    /// Insert a key-value pair, replacing the value if the key exists
    pub fn add(&self, key: K, value: V) {
        self.insert(key, value);
    }

    /// Alias for [`add`](Self::add)
    pub fn set(&self, key: K, value: V) {
        self.add(key, value);
    }

    /// Alias for [`add`](Self::add)
    pub fn store(&self, key: K, value: V) {
        self.add(key, value);
    }

    /// Remove a key, returning its value if it was present
    ///
    /// A missing key is not an error; `None` is returned and the map is
    /// unchanged.
    pub fn delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut entries = self.entries.write();
        match search(&entries, key) {
            // O(n): shifts entries[index + 1..] left by one
            Ok(index) => Some(entries.remove(index).value),
            Err(_) => None,
        }
    }

    /// Alias for [`delete`](Self::delete)
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.delete(key)
    }

    /// Remove every entry
    ///
    /// Capacity shrinks back to `config.initial_capacity`, leaving the map in
    /// the same state as a freshly constructed one.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        tracing::trace!("Clearing {} entries", entries.len());
        entries.clear();
        entries.shrink_to(self.config.initial_capacity);
    }

    // =========================================================================
    // Lookup (shared lock)
    // =========================================================================

    /// Get a copy of the value stored under `key`
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        let entries = self.entries.read();
        search(&entries, key)
            .ok()
            .map(|index| entries[index].value.clone())
    }

    /// Alias for [`get`](Self::get)
    pub fn find<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.get(key)
    }

    /// Zero-value form of [`get`](Self::get): `(value, true)` when found,
    /// `(V::default(), false)` otherwise
    pub fn get_or_default<Q>(&self, key: &Q) -> (V, bool)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone + Default,
    {
        match self.get(key) {
            Some(value) => (value, true),
            None => (V::default(), false),
        }
    }

    /// Check whether `key` is present
    pub fn exist<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search(&self.entries.read(), key).is_ok()
    }

    /// Alias for [`exist`](Self::exist)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.exist(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // =========================================================================
    // Ordered Traversal (shared lock)
    // =========================================================================

    /// Visit entries from lowest to highest key
    ///
    /// Traversal stops the first time `f` returns `false`; entries after that
    /// point are not visited.
    ///
    /// # Panics
    /// If `f` calls any method on this same map (the shared lock is held for
    /// the whole traversal).
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let entries = self.entries.read();
        for entry in entries.iter() {
            if !f(&entry.key, &entry.value) {
                break;
            }
        }
    }

    /// Visit entries from highest to lowest key
    ///
    /// Same early-exit and re-entrancy contract as [`range`](Self::range).
    pub fn range_backward<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let entries = self.entries.read();
        for entry in entries.iter().rev() {
            if !f(&entry.key, &entry.value) {
                break;
            }
        }
    }

    // =========================================================================
    // Extremal Access (shared lock)
    // =========================================================================

    /// Value with the lowest key
    pub fn first(&self) -> Option<V>
    where
        V: Clone,
    {
        self.entries.read().first().map(|entry| entry.value.clone())
    }

    /// Value with the highest key
    pub fn last(&self) -> Option<V>
    where
        V: Clone,
    {
        self.entries.read().last().map(|entry| entry.value.clone())
    }

    /// Alias for [`first`](Self::first)
    pub fn min(&self) -> Option<V>
    where
        V: Clone,
    {
        self.first()
    }

    /// Alias for [`last`](Self::last)
    pub fn max(&self) -> Option<V>
    where
        V: Clone,
    {
        self.last()
    }

    pub fn first_key(&self) -> Option<K>
    where
        K: Clone,
    {
        self.entries.read().first().map(|entry| entry.key.clone())
    }

    pub fn last_key(&self) -> Option<K>
    where
        K: Clone,
    {
        self.entries.read().last().map(|entry| entry.key.clone())
    }

    /// Alias for [`first_key`](Self::first_key)
    pub fn min_key(&self) -> Option<K>
    where
        K: Clone,
    {
        self.first_key()
    }

    /// Alias for [`last_key`](Self::last_key)
    pub fn max_key(&self) -> Option<K>
    where
        K: Clone,
    {
        self.last_key()
    }

    /// [`first`](Self::first), or `V::default()` on an empty map
    pub fn first_or_default(&self) -> V
    where
        V: Clone + Default,
    {
        self.first().unwrap_or_default()
    }

    /// [`last`](Self::last), or `V::default()` on an empty map
    pub fn last_or_default(&self) -> V
    where
        V: Clone + Default,
    {
        self.last().unwrap_or_default()
    }

    /// [`first_key`](Self::first_key), or `K::default()` on an empty map
    pub fn first_key_or_default(&self) -> K
    where
        K: Clone + Default,
    {
        self.first_key().unwrap_or_default()
    }

    /// [`last_key`](Self::last_key), or `K::default()` on an empty map
    pub fn last_key_or_default(&self) -> K
    where
        K: Clone + Default,
    {
        self.last_key().unwrap_or_default()
    }

    // =========================================================================
    // Bulk Access
    // =========================================================================

    /// Copy all pairs out in ascending key order
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.entries
            .read()
            .iter()
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect()
    }

    /// Consume the map, returning all pairs in ascending key order
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
            .into_inner()
            .into_iter()
            .map(Entry::into_pair)
            .collect()
    }
}

impl<K, V> SortedMap<K, V> {
    /// Shared access to the raw sequence (used by snapshot encoding)
    pub(crate) fn entries(&self) -> &GuardedLock<Vec<Entry<K, V>>> {
        &self.entries
    }
}

impl<K: Ord, V> Default for SortedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for SortedMap<K, V> {
    fn clone(&self) -> Self {
        let entries = self.entries.read().clone();
        Self {
            config: self.config.clone(),
            entries: GuardedLock::new(entries),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SortedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.read();
        f.debug_map()
            .entries(entries.iter().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}

impl<K: Ord, V> Extend<(K, V)> for SortedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let entries = self.entries.get_mut();
        for (key, value) in iter {
            insert_entry(entries, key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
