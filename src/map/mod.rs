//! Map Module
//!
//! The ordered key-value container.
//!
//! ## Responsibilities
//! - Keep entries strictly ascending by key, no duplicates
//! - Binary search for every keyed operation
//! - Single-writer/multi-reader access through one RwLock
//! - Ordered traversal in both directions with early exit
//! - Snapshot save/load
//!
//! ## Data Structure Choice
//! A sorted `Vec` rather than a tree:
//! - Contiguous storage, cache-friendly sequential scans
//! - `O(log n)` lookup, `O(1)` first/last
//! - `O(n)` insert/delete of new keys (tail shift)

mod entry;
mod guard;
mod persist;
mod sorted_map;

pub use entry::Entry;
pub use sorted_map::SortedMap;
