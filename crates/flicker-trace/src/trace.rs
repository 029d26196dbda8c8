//! Ordered region traces and their on-disk form.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, trace};

use crate::{ComponentName, RegionSnapshot, TraceError};

/// Reference to a trace artifact on disk, shown in failure reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFile {
    path: PathBuf,
}

impl TraceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TraceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Snapshots ordered by strictly increasing timestamp, all aggregated over
/// the same component filter.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTrace {
    components: Vec<ComponentName>,
    entries: Vec<RegionSnapshot>,
}

#[derive(Deserialize)]
struct TraceRepr {
    #[serde(default)]
    components: Vec<ComponentName>,
    #[serde(default)]
    entries: Vec<RegionSnapshot>,
}

impl RegionTrace {
    /// Build a trace, rejecting snapshots that are not in timestamp order.
    pub fn new(
        components: Vec<ComponentName>,
        entries: Vec<RegionSnapshot>,
    ) -> Result<Self, TraceError> {
        for pair in entries.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(TraceError::NonMonotonicTimestamp {
                    previous: pair[0].timestamp,
                    next: pair[1].timestamp,
                });
            }
        }
        Ok(Self {
            components,
            entries,
        })
    }

    /// Parse a JSON trace document.
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        let repr: TraceRepr = serde_json::from_str(json)?;
        trace!(
            entries = repr.entries.len(),
            components = repr.components.len(),
            "Parsed region trace"
        );
        Self::new(repr.components, repr.entries)
    }

    /// Read and parse a JSON trace file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TraceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trace = Self::from_json(&json)?;
        debug!(path = %path.display(), entries = trace.len(), "Loaded region trace");
        Ok(trace)
    }

    /// Component filter; empty means every layer.
    pub fn components(&self) -> &[ComponentName] {
        &self.components
    }

    pub fn entries(&self) -> &[RegionSnapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the snapshot captured exactly at `timestamp`.
    pub fn position_of(&self, timestamp: i64) -> Option<usize> {
        self.entries
            .binary_search_by_key(&timestamp, |e| e.timestamp)
            .ok()
    }

    /// Snapshot captured exactly at `timestamp`.
    pub fn entry_at(&self, timestamp: i64) -> Option<&RegionSnapshot> {
        self.position_of(timestamp).map(|idx| &self.entries[idx])
    }
}
