//! Snapshot Reader
//!
//! Decodes and checks snapshots produced by `write_snapshot`.

use std::io::Read;

use bytes::Buf;
use serde::de::DeserializeOwned;

use crate::error::{Result, SortedError};
use crate::map::Entry;

use super::{HEADER_SIZE, MAGIC, VERSION};

/// Read one snapshot from `reader`
///
/// Fails with `Corruption` on a bad magic, unknown version, payload larger
/// than `max_payload` bytes, checksum mismatch or entry-count mismatch. Key
/// ordering is not checked here; see [`validate_order`].
pub fn read_snapshot<R, K, V>(reader: &mut R, max_payload: u64) -> Result<Vec<Entry<K, V>>>
where
    R: Read,
    K: DeserializeOwned,
    V: DeserializeOwned,
{
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    if header[..MAGIC.len()] != MAGIC[..] {
        return Err(SortedError::Corruption("bad magic bytes".to_string()));
    }

    let mut buf = &header[MAGIC.len()..];
    let version = buf.get_u16_le();
    if version != VERSION {
        return Err(SortedError::Corruption(format!(
            "unsupported version {} (expected {})",
            version, VERSION
        )));
    }

    let entry_count = buf.get_u64_le();
    let payload_len = buf.get_u64_le();
    let expected_crc = buf.get_u32_le();

    if payload_len > max_payload {
        return Err(SortedError::Corruption(format!(
            "payload of {} bytes exceeds limit of {}",
            payload_len, max_payload
        )));
    }

    let mut payload = vec![0u8; payload_len as usize];
    reader.read_exact(&mut payload)?;

    let actual_crc = crc32fast::hash(&payload);
    if actual_crc != expected_crc {
        return Err(SortedError::Corruption(format!(
            "checksum mismatch: expected {:#010x}, got {:#010x}",
            expected_crc, actual_crc
        )));
    }

    let entries: Vec<Entry<K, V>> = bincode::deserialize(&payload)?;
    if entries.len() as u64 != entry_count {
        return Err(SortedError::Corruption(format!(
            "header says {} entries, payload has {}",
            entry_count,
            entries.len()
        )));
    }

    Ok(entries)
}

/// Check that keys are strictly ascending
///
/// Returns `Unordered { index }` for the first entry whose key is not greater
/// than its predecessor's.
pub fn validate_order<K: Ord, V>(entries: &[Entry<K, V>]) -> Result<()> {
    match entries.windows(2).position(|pair| pair[0].key >= pair[1].key) {
        Some(index) => Err(SortedError::Unordered { index: index + 1 }),
        None => Ok(()),
    }
}
