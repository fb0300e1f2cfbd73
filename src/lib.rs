//! # sortedslice
//!
//! A thread-safe ordered map backed by a sorted, contiguous vector:
//! - Binary-search lookups, linear-cost inserts and deletes
//! - Single-writer/multi-reader concurrency via one RwLock per map
//! - Forward and backward ranging with early exit
//! - Binary snapshots with checksum and optional order validation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SortedMap<K, V>                            │
//! │        get / add / delete / range / first / last             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   GuardedLock                                │
//! │      (RwLock + same-thread re-entrancy detection)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Vec<Entry>  │          │  Snapshot   │
//!   │  (sorted)   │─────────▶│  (bincode)  │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use sortedslice::SortedMap;
//!
//! let map = SortedMap::new();
//! map.add(3, "three");
//! map.add(1, "one");
//! map.add(2, "two");
//!
//! assert_eq!(map.get(&2), Some("two"));
//! assert_eq!(map.first_key(), Some(1));
//!
//! let mut keys = Vec::new();
//! map.range(|k, _| {
//!     keys.push(*k);
//!     true
//! });
//! assert_eq!(keys, vec![1, 2, 3]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod map;
pub mod snapshot;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SortedError, Result};
pub use config::Config;
pub use map::{Entry, SortedMap};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of sortedslice
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
