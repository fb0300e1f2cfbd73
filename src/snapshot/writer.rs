//! Snapshot Writer
//!
//! Encodes an entry sequence into the snapshot format.

use std::io::Write;

use bytes::{BufMut, BytesMut};
use serde::Serialize;

use crate::error::Result;
use crate::map::Entry;

use super::{HEADER_SIZE, MAGIC, VERSION};

/// Write `entries` as a snapshot, returning the total bytes written
///
/// Entries are written in slice order; callers pass the map's sorted sequence.
pub fn write_snapshot<W, K, V>(writer: &mut W, entries: &[Entry<K, V>]) -> Result<u64>
where
    W: Write,
    K: Serialize,
    V: Serialize,
{
    let payload = bincode::serialize(entries)?;
    let crc = crc32fast::hash(&payload);

    let mut header = BytesMut::with_capacity(HEADER_SIZE);
    header.put_slice(MAGIC);
    header.put_u16_le(VERSION);
    header.put_u64_le(entries.len() as u64);
    header.put_u64_le(payload.len() as u64);
    header.put_u32_le(crc);

    writer.write_all(&header)?;
    writer.write_all(&payload)?;

    Ok((HEADER_SIZE + payload.len()) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let entries = vec![Entry::new(1u32, 10u64), Entry::new(2, 20)];
        let mut buf = Vec::new();
        let written = write_snapshot(&mut buf, &entries).unwrap();

        assert_eq!(written as usize, buf.len());
        assert_eq!(&buf[..4], MAGIC);
        assert_eq!(u16::from_le_bytes([buf[4], buf[5]]), VERSION);

        let count = u64::from_le_bytes(buf[6..14].try_into().unwrap());
        let payload_len = u64::from_le_bytes(buf[14..22].try_into().unwrap());
        let crc = u32::from_le_bytes(buf[22..26].try_into().unwrap());

        assert_eq!(count, 2);
        assert_eq!(payload_len as usize, buf.len() - HEADER_SIZE);
        assert_eq!(crc, crc32fast::hash(&buf[HEADER_SIZE..]));
    }

    #[test]
    fn test_empty_sequence() {
        let entries: Vec<Entry<String, String>> = Vec::new();
        let mut buf = Vec::new();
        write_snapshot(&mut buf, &entries).unwrap();

        // bincode encodes an empty sequence as its u64 length
        assert_eq!(buf.len(), HEADER_SIZE + 8);
    }
}
