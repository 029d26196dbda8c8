//! Monitor configuration.

use std::path::PathBuf;

use crate::TraceFlags;

/// Configuration for a trace monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Directory the trace file is written to.
    pub output_dir: PathBuf,
    /// Trace file name inside `output_dir`.
    pub trace_file_name: String,
    /// Flags applied when tracing starts.
    pub flags: TraceFlags,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            output_dir: std::env::temp_dir().join("flicker"),
            trace_file_name: "layers_trace.pb".to_string(),
            flags: TraceFlags::DEFAULT,
        }
    }
}

impl MonitorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the trace file name.
    pub fn trace_file_name(mut self, name: impl Into<String>) -> Self {
        self.trace_file_name = name.into();
        self
    }

    /// Set the trace flags.
    pub fn flags(mut self, flags: TraceFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Full path of the trace file.
    pub fn trace_path(&self) -> PathBuf {
        self.output_dir.join(&self.trace_file_name)
    }
}
