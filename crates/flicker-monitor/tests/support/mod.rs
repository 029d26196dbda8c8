//! Test support utilities for monitor tests
//!
//! - FakeTracingService: in-process stand-in for the compositor

mod fake_service;

pub use fake_service::FakeTracingService;
