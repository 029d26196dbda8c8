//! Layer trace capture on the compositor.

use flicker_trace::TraceFile;
use tracing::{debug, info, warn};

use crate::{MonitorConfig, MonitorError, TraceMonitor, TracingService};

/// Captures the layers trace from a compositor service.
///
/// Not meant to be shared: start and stop are called in sequence from the
/// thread orchestrating the test.
pub struct LayersTraceMonitor<S: TracingService> {
    service: S,
    config: MonitorConfig,
}

impl<S: TracingService> LayersTraceMonitor<S> {
    /// Create a monitor with the default configuration.
    pub fn new(service: S) -> Self {
        Self::with_config(service, MonitorConfig::default())
    }

    pub fn with_config(service: S, config: MonitorConfig) -> Self {
        Self { service, config }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

impl<S: TracingService> TraceMonitor for LayersTraceMonitor<S> {
    fn start(&self) -> Result<(), MonitorError> {
        debug!(flags = self.config.flags.bits(), "Starting layers trace");
        self.service
            .set_layer_tracing_flags(self.config.flags)
            .and_then(|()| self.service.set_layer_tracing(true))
            .map_err(|e| {
                warn!(error = %e, "Could not start layers trace");
                MonitorError::Start(e)
            })?;
        info!(trace = %self.config.trace_path().display(), "Layers trace started");
        Ok(())
    }

    fn stop(&self) -> Result<(), MonitorError> {
        self.service.set_layer_tracing(false).map_err(|e| {
            warn!(error = %e, "Could not stop layers trace");
            MonitorError::Stop(e)
        })?;
        info!("Layers trace stopped");
        Ok(())
    }

    fn is_enabled(&self) -> Result<bool, MonitorError> {
        self.service.is_layer_tracing().map_err(MonitorError::Query)
    }

    fn trace_file(&self) -> TraceFile {
        TraceFile::new(self.config.trace_path())
    }
}
