//! # Flicker Monitor
//!
//! Lifecycle wrapper that turns layer tracing on and off on a live
//! compositor service.
//!
//! The compositor is reached through the [`TracingService`] trait. Monitors
//! are thin pass-throughs: a failed service call is wrapped once in a
//! [`MonitorError`] and returned immediately, with no retry or buffering.
//! Calls block until the service answers.

use flicker_trace::TraceFile;
use thiserror::Error;

mod config;
mod layers;

pub use config::MonitorConfig;
pub use layers::LayersTraceMonitor;

bitflags::bitflags! {
    /// What the compositor records while layer tracing is on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TraceFlags: u32 {
        /// Layer state needed for visibility checks.
        const CRITICAL = 1 << 0;
        /// Input windows and touchable regions.
        const INPUT = 1 << 1;
        /// Composition type and buffer details.
        const COMPOSITION = 1 << 2;
    }
}

impl TraceFlags {
    /// Flags enabled by [`LayersTraceMonitor`] unless configured otherwise.
    pub const DEFAULT: TraceFlags = TraceFlags::CRITICAL
        .union(TraceFlags::INPUT)
        .union(TraceFlags::COMPOSITION);
}

impl Default for TraceFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors reported by a tracing service.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Tracing service is not connected")]
    Disconnected,

    #[error("Tracing service call failed: {0}")]
    Call(String),
}

/// Errors raised by a trace monitor.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Could not start trace")]
    Start(#[source] ServiceError),

    #[error("Could not stop trace")]
    Stop(#[source] ServiceError),

    #[error("Could not query trace state")]
    Query(#[source] ServiceError),
}

/// Compositor-side tracing controls.
///
/// Implementations talk to the live service; every call is synchronous.
pub trait TracingService: Send + Sync {
    /// Select what gets recorded the next time tracing is enabled.
    fn set_layer_tracing_flags(&self, flags: TraceFlags) -> Result<(), ServiceError>;

    /// Turn layer tracing on or off.
    fn set_layer_tracing(&self, enabled: bool) -> Result<(), ServiceError>;

    /// Whether the service reports layer tracing as active.
    fn is_layer_tracing(&self) -> Result<bool, ServiceError>;
}

/// Start/stop lifecycle shared by trace monitors.
pub trait TraceMonitor {
    fn start(&self) -> Result<(), MonitorError>;

    fn stop(&self) -> Result<(), MonitorError>;

    fn is_enabled(&self) -> Result<bool, MonitorError>;

    /// Where the captured trace is written.
    fn trace_file(&self) -> TraceFile;
}
