//! Assertion engine integration tests
//!
//! - `trace_subject`: per-trace coverage assertions
//! - `failure_report`: rendering of failures into reports

mod trace_subject;
