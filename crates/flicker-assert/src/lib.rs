//! # Flicker Assert
//!
//! Assertion engine for captured region traces.
//!
//! ## Architecture
//!
//! ```text
//! RegionTrace ──▶ RegionTraceSubject ──(lazy, cached)──▶ [RegionSubject; n]
//!                       │                                       │
//!        add_assertion(name, predicate)           covers_at_least / at_most / exactly
//!                       │                                       │
//!                       ▼                                       ▼
//!              FlickerError::Subject  ◀────────wraps────  PredicateFailure
//!                       │
//!                       ▼
//!            AssertionErrorBuilder ──▶ FailureReport
//! ```
//!
//! Assertions are evaluated eagerly: every call on a [`RegionTraceSubject`]
//! walks the whole trace in timestamp order before returning, stops at the
//! first snapshot that does not satisfy the predicate, and otherwise hands the
//! same subject back so calls can be chained with `?`.
//!
//! ```ignore
//! let mut subject = RegionTraceSubject::assert_that(trace, None);
//! subject
//!     .covers_at_least(Rect::new(0, 0, 1080, 1920))?
//!     .covers_at_most(display_bounds)?;
//! ```

mod error_builder;
mod fact;
mod failure;
mod region_subject;
mod tag;
mod trace_subject;

pub use error_builder::{AssertionErrorBuilder, FailureReport, ReportError};
pub use fact::{Fact, SubjectContext};
pub use failure::{FlickerError, PredicateFailure, SubjectFailure};
pub use region_subject::RegionSubject;
pub use tag::AssertionTag;
pub use trace_subject::RegionTraceSubject;
