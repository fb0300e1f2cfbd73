//! Configuration for sortedslice
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a `SortedMap` instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Memory Configuration
    // -------------------------------------------------------------------------
    /// Entries reserved up front. `clear` shrinks back to this capacity.
    pub initial_capacity: usize,

    // -------------------------------------------------------------------------
    // Snapshot Configuration
    // -------------------------------------------------------------------------
    /// Reject snapshots whose keys are not strictly ascending
    pub validate_on_load: bool,

    /// fsync the snapshot file after `save`
    pub sync_on_save: bool,

    /// Largest snapshot payload `load` will read (in bytes)
    pub max_snapshot_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            validate_on_load: true,
            sync_on_save: false,
            max_snapshot_bytes: 1024 * 1024 * 1024, // 1 GB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of entries reserved at construction
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Enable or disable ordering validation on load
    pub fn validate_on_load(mut self, validate: bool) -> Self {
        self.config.validate_on_load = validate;
        self
    }

    /// Enable or disable fsync after save
    pub fn sync_on_save(mut self, sync: bool) -> Self {
        self.config.sync_on_save = sync;
        self
    }

    /// Set the maximum snapshot payload size (in bytes)
    pub fn max_snapshot_bytes(mut self, bytes: u64) -> Self {
        self.config.max_snapshot_bytes = bytes;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
