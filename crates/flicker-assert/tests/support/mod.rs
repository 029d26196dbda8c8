//! Test support utilities for flicker assertion tests
//!
//! - Traces: builders for in-memory region traces
//! - Checks: custom assertions on failures and reports

mod checks;
mod traces;

pub use checks::*;
pub use traces::*;
