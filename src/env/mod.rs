/// Scan execution environment
///
/// Server-side iterators run inside an execution environment owned by the
/// store. Lower-level iterators consume it through the `ScanEnvironment`
/// trait: a scan-time configuration snapshot plus side-channel file access.
/// The traversal API never touches this module directly.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use thiserror::Error;

/// Environment operation errors
#[derive(Error, Debug)]
pub enum EnvError {
    /// The environment does not implement the requested capability
    #[error("scan environment does not support {0}")]
    Unsupported(&'static str),

    /// Side file could not be opened
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for environment operations
pub type EnvResult<T> = Result<T, EnvError>;

/// Which execution scope a scan-side iterator is running under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanScope {
    Scan,
    MinorCompaction,
    MajorCompaction,
}

/// Scan-time configuration snapshot
///
/// A flat key/value view of whatever the execution environment was
/// configured with. Opaque to this layer; values are handed through as-is.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    entries: HashMap<String, String>,
}

impl ScanConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from key/value pairs
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a configuration value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of configured entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether any entries are configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Execution environment consumed by scan-side iterators
///
/// Operations an environment does not support must fail fast with
/// `EnvError::Unsupported` rather than silently no-op; a scan acting on a
/// silently missing capability would produce wrong results.
pub trait ScanEnvironment {
    /// Current scan-time configuration
    fn config(&self) -> &ScanConfig;

    /// Open a side-channel file reader keyed by file name
    ///
    /// The bytes are opaque to this layer; callers decode them.
    fn reserve_side_reader(&self, name: &str) -> EnvResult<Box<dyn Read + Send>>;

    /// Scope the current scan is executing under
    fn scope(&self) -> EnvResult<ScanScope>;

    /// Whether the scan is part of a full major compaction
    fn is_full_major_compaction(&self) -> EnvResult<bool>;

    /// Register an additional side-channel source with the scan
    fn register_side_channel(&mut self, reader: Box<dyn Read + Send>) -> EnvResult<()>;
}

/// Default environment: configuration and side files only
///
/// Resolves side files beneath a root directory. Scope introspection,
/// compaction introspection and side-channel registration are not available
/// outside a live store tablet, so they fail fast here.
pub struct DefaultScanEnvironment {
    config: ScanConfig,
    side_file_root: PathBuf,
}

impl DefaultScanEnvironment {
    /// Create an environment with the given configuration, resolving side
    /// files relative to `side_file_root`
    pub fn new(config: ScanConfig, side_file_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            side_file_root: side_file_root.into(),
        }
    }
}

impl Default for DefaultScanEnvironment {
    fn default() -> Self {
        Self::new(ScanConfig::new(), ".")
    }
}

impl ScanEnvironment for DefaultScanEnvironment {
    fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn reserve_side_reader(&self, name: &str) -> EnvResult<Box<dyn Read + Send>> {
        let path = self.side_file_root.join(name);
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn scope(&self) -> EnvResult<ScanScope> {
        Err(EnvError::Unsupported("scope introspection"))
    }

    fn is_full_major_compaction(&self) -> EnvResult<bool> {
        Err(EnvError::Unsupported("compaction introspection"))
    }

    fn register_side_channel(&mut self, _reader: Box<dyn Read + Send>) -> EnvResult<()> {
        Err(EnvError::Unsupported("side channel registration"))
    }
}
