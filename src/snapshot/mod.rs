//! Snapshot Module
//!
//! Flat binary encoding of a map's ordered entry sequence.
//!
//! ## Responsibilities
//! - Encode the full sequence in current order
//! - Detect truncated, foreign, or corrupted files on decode
//! - Optionally verify that decoded keys are strictly ascending
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Header                                                       │
//! │ ┌──────────┬───────────┬─────────────┬───────────┬─────────┐ │
//! │ │Magic (4) │Version (2)│Entry Cnt (8)│Payload (8)│ CRC (4) │ │
//! │ └──────────┴───────────┴─────────────┴───────────┴─────────┘ │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Payload (bincode)                                            │
//! │ ┌────────────┬─────────┬─────────┬─────┬─────────┬─────────┐ │
//! │ │ Length (8) │ Key 0   │ Value 0 │ ... │ Key n-1 │Value n-1│ │
//! │ └────────────┴─────────┴─────────┴─────┴─────────┴─────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All header integers are little-endian. The CRC32 covers the payload only.
//! The layout is internal to this crate and not meant for other readers.

mod reader;
mod writer;

pub use reader::{read_snapshot, validate_order};
pub use writer::write_snapshot;

/// Magic bytes at the start of every snapshot
pub const MAGIC: &[u8; 4] = b"SSLC";

/// Current format version
pub const VERSION: u16 = 1;

/// Magic + version + entry count + payload length + CRC
pub const HEADER_SIZE: usize = 4 + 2 + 8 + 8 + 4;
