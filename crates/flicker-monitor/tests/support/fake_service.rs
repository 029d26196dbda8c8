//! In-process fake of the compositor tracing service.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

use flicker_monitor::{ServiceError, TraceFlags, TracingService};

/// Records every call and honours the flags it is given, unless
/// disconnected, in which case every call fails.
pub struct FakeTracingService {
    connected: AtomicBool,
    /// Number of calls that succeed before the service drops.
    fail_after: usize,
    tracing: AtomicBool,
    flags: AtomicU32,
    attempts: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl FakeTracingService {
    pub fn connected() -> Self {
        Self {
            connected: AtomicBool::new(true),
            fail_after: usize::MAX,
            tracing: AtomicBool::new(false),
            flags: AtomicU32::new(0),
            attempts: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn disconnected() -> Self {
        let service = Self::connected();
        service.disconnect();
        service
    }

    /// Serves the first `calls` calls, then behaves as disconnected.
    pub fn failing_after(calls: usize) -> Self {
        Self {
            fail_after: calls,
            ..Self::connected()
        }
    }

    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    pub fn flags(&self) -> TraceFlags {
        TraceFlags::from_bits_retain(self.flags.load(Ordering::SeqCst))
    }

    /// Number of calls made, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Successful calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn call(&self, name: String) -> Result<(), ServiceError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt >= self.fail_after {
            self.disconnect();
        }
        if !self.connected.load(Ordering::SeqCst) {
            return Err(ServiceError::Disconnected);
        }
        self.calls.lock().unwrap().push(name);
        Ok(())
    }
}

impl TracingService for FakeTracingService {
    fn set_layer_tracing_flags(&self, flags: TraceFlags) -> Result<(), ServiceError> {
        self.call(format!("set_layer_tracing_flags({:#x})", flags.bits()))?;
        self.flags.store(flags.bits(), Ordering::SeqCst);
        Ok(())
    }

    fn set_layer_tracing(&self, enabled: bool) -> Result<(), ServiceError> {
        self.call(format!("set_layer_tracing({})", enabled))?;
        self.tracing.store(enabled, Ordering::SeqCst);
        Ok(())
    }

    fn is_layer_tracing(&self) -> Result<bool, ServiceError> {
        self.call("is_layer_tracing".to_string())?;
        Ok(self.tracing.load(Ordering::SeqCst))
    }
}
