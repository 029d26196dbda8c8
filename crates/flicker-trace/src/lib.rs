//! # Flicker Trace
//!
//! In-memory model of a captured region trace: a time-ordered list of
//! snapshots, each mapping layer names to the region they make visible.
//!
//! Traces are produced by an external capture step and handed to this crate
//! either directly through [`RegionTrace::new`] or as a JSON trace file via
//! [`RegionTrace::load`].

use std::path::PathBuf;

use thiserror::Error;

mod component;
mod snapshot;
mod timestamp;
mod trace;

pub use component::ComponentName;
pub use snapshot::RegionSnapshot;
pub use timestamp::format_timestamp;
pub use trace::{RegionTrace, TraceFile};

/// Errors raised while building or loading a trace.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Snapshot timestamps must strictly increase: {previous} followed by {next}")]
    NonMonotonicTimestamp { previous: i64, next: i64 },

    #[error("Invalid component name: {0:?}")]
    InvalidComponent(String),

    #[error("Failed to parse trace: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read trace at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
