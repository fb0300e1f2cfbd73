//! Snapshot persistence for SortedMap
//!
//! `save*` encodes the current sequence under the shared lock, so no mutation
//! is observed mid-write. `load*` holds the exclusive lock, decodes the whole
//! snapshot, and only then replaces the contents; on any error the map keeps
//! what it had.
//!
//! There is no partial-write recovery: a failed `save` may leave a truncated
//! or missing file behind.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::snapshot::{read_snapshot, validate_order, write_snapshot};

use super::{Entry, SortedMap};

impl<K, V> SortedMap<K, V>
where
    K: Ord + Serialize,
    V: Serialize,
{
    /// Write a snapshot of the map to `path`, creating or truncating the file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let written = self.save_to(&mut writer)?;
        writer.flush()?;

        if self.config().sync_on_save {
            writer.get_ref().sync_all()?;
        }

        tracing::debug!("Saved snapshot to {} ({} bytes)", path.display(), written);
        Ok(())
    }

    /// Write a snapshot of the map to any sink, returning the bytes written
    pub fn save_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        let entries = self.entries().read();
        let written = write_snapshot(writer, &entries)?;
        tracing::debug!("Encoded {} entries into snapshot", entries.len());
        Ok(written)
    }
}

impl<K, V> SortedMap<K, V>
where
    K: Ord + DeserializeOwned,
    V: DeserializeOwned,
{
    /// Replace the map's contents with the snapshot stored at `path`
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        self.load_from(&mut reader)?;
        tracing::debug!("Loaded snapshot from {}", path.display());
        Ok(())
    }

    /// Replace the map's contents with a snapshot read from any source
    ///
    /// With `validate_on_load` disabled the decoded sequence is trusted as-is.
    /// Feeding it anything other than output of [`save_to`](Self::save_to)
    /// then breaks the ordering invariant and every later lookup is
    /// unspecified.
    pub fn load_from<R: Read>(&self, reader: &mut R) -> Result<()> {
        let config = self.config();
        let mut entries = self.entries().write();

        let decoded: Vec<Entry<K, V>> =
            read_snapshot(reader, config.max_snapshot_bytes).map_err(|e| {
                tracing::warn!("Rejected snapshot: {}", e);
                e
            })?;

        if config.validate_on_load {
            if let Err(e) = validate_order(&decoded) {
                tracing::warn!("Rejected snapshot: {}", e);
                return Err(e);
            }
        }

        tracing::debug!(
            "Replacing {} entries with {} from snapshot",
            entries.len(),
            decoded.len()
        );
        *entries = decoded;
        Ok(())
    }
}
