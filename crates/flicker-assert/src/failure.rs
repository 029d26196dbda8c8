//! Failure taxonomy for trace assertions.
//!
//! Failures form a cause chain. [`FlickerError::Subject`] is the marker
//! wrapper the assertion engine puts around a real failure when it escapes a
//! trace subject; every other variant is a leaf unless it carries a cause.

use std::fmt::Write;

use flicker_region::Region;
use thiserror::Error;

use crate::Fact;

/// A per-snapshot predicate did not hold.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{predicate} failed at timestamp {timestamp}: {description}")]
pub struct PredicateFailure {
    /// Predicate name, e.g. `coversAtLeast`.
    pub predicate: String,
    /// Timestamp of the failing snapshot (ns).
    pub timestamp: i64,
    /// The part of the region that broke the predicate.
    pub offending: Region,
    pub description: String,
}

/// Wrapper raised when a failure propagates out of a subject.
#[derive(Error, Debug, Clone)]
#[error("{error_type}: {description}")]
pub struct SubjectFailure {
    /// Category, e.g. `Flicker assertion error`.
    pub error_type: String,
    pub description: String,
    /// Subject state at the time of failure.
    pub subject_information: Vec<Fact>,
    #[source]
    pub cause: Option<Box<FlickerError>>,
}

/// Any failure surfaced by the assertion engine.
#[derive(Error, Debug, Clone)]
pub enum FlickerError {
    #[error(transparent)]
    Predicate(#[from] PredicateFailure),

    #[error(transparent)]
    Subject(#[from] SubjectFailure),

    /// A failure raised by assertion code that is not a predicate outcome.
    #[error("{kind}: {message}")]
    Raised {
        kind: String,
        message: String,
        #[source]
        cause: Option<Box<FlickerError>>,
    },
}

impl FlickerError {
    /// A leaf failure of the given kind.
    pub fn raised(kind: impl Into<String>, message: impl Into<String>) -> Self {
        FlickerError::Raised {
            kind: kind.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// A failure of the given kind caused by `cause`.
    pub fn raised_with_cause(
        kind: impl Into<String>,
        message: impl Into<String>,
        cause: FlickerError,
    ) -> Self {
        FlickerError::Raised {
            kind: kind.into(),
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Whether this is the engine's marker wrapper.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, FlickerError::Subject(_))
    }

    /// The immediate cause, if any.
    pub fn cause(&self) -> Option<&FlickerError> {
        match self {
            FlickerError::Predicate(_) => None,
            FlickerError::Subject(failure) => failure.cause.as_deref(),
            FlickerError::Raised { cause, .. } => cause.as_deref(),
        }
    }

    /// This failure followed by each of its causes.
    pub fn chain(&self) -> impl Iterator<Item = &FlickerError> {
        std::iter::successors(Some(self), |err| err.cause())
    }

    /// First meaningful cause: the immediate cause, skipping exactly one
    /// marker wrapper.
    pub fn root_cause(&self) -> Option<&FlickerError> {
        match self.cause() {
            Some(cause) if cause.is_wrapper() => cause.cause(),
            other => other,
        }
    }

    /// Multi-line rendering of this failure and its cause chain.
    pub fn render_trace(&self) -> String {
        let mut out = String::new();
        for (depth, err) in self.chain().enumerate() {
            if depth > 0 {
                out.push_str("Caused by: ");
            }
            let _ = writeln!(out, "{}", err);
            if let FlickerError::Predicate(failure) = err {
                let _ = writeln!(out, "    offending region: {}", failure.offending);
            }
        }
        out
    }
}
