//! Rendering of assertion failures into a single diagnostic report.

use std::fmt::{self, Write};

use flicker_trace::TraceFile;
use thiserror::Error;

use crate::{AssertionTag, Fact, FlickerError};

/// Errors raised while building a [`FailureReport`].
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No failure was given to the assertion error builder")]
    MissingError,

    #[error("Failed to format failure report: {0}")]
    Format(#[from] fmt::Error),
}

/// Final, human-readable failure surfaced to the test harness.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct FailureReport {
    message: String,
    #[source]
    root_cause: Option<FlickerError>,
    trace_file: Option<TraceFile>,
}

impl FailureReport {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// First meaningful cause of the reported failure.
    pub fn root_cause(&self) -> Option<&FlickerError> {
        self.root_cause.as_ref()
    }

    pub fn trace_file(&self) -> Option<&TraceFile> {
        self.trace_file.as_ref()
    }
}

/// Collects a failure and its context, then renders a [`FailureReport`].
///
/// Only the failure is required; the trace file and location tag are
/// optional. Building performs no I/O and the same inputs always render the
/// same report.
#[derive(Debug, Clone, Default)]
pub struct AssertionErrorBuilder {
    error: Option<FlickerError>,
    trace_file: Option<TraceFile>,
    location: String,
}

impl AssertionErrorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure to report.
    pub fn from_error(mut self, error: FlickerError) -> Self {
        self.error = Some(error);
        self
    }

    /// Set the trace artifact the failure was found in.
    pub fn with_trace(mut self, trace_file: impl Into<Option<TraceFile>>) -> Self {
        self.trace_file = trace_file.into();
        self
    }

    /// Set the location tag, e.g. [`AssertionTag::START`] or a custom step name.
    pub fn at_tag(mut self, tag: &str) -> Self {
        self.location = AssertionTag::parse(tag).phrase();
        self
    }

    pub fn build(&self) -> Result<FailureReport, ReportError> {
        let error = self.error.as_ref().ok_or(ReportError::MissingError)?;
        let root_cause = error.root_cause();

        let mut message = String::new();
        self.write_message(&mut message, error, root_cause)?;

        Ok(FailureReport {
            message,
            root_cause: root_cause.cloned(),
            trace_file: self.trace_file.clone(),
        })
    }

    fn write_message(
        &self,
        out: &mut String,
        error: &FlickerError,
        root_cause: Option<&FlickerError>,
    ) -> fmt::Result {
        match error {
            FlickerError::Subject(failure) => {
                writeln!(out, "{}", failure.error_type)?;
                writeln!(out)?;
                writeln!(out, "{}", failure.description)?;
                for fact in &failure.subject_information {
                    writeln!(out, "\t{}", fact)?;
                }
                writeln!(out, "\t{}", Fact::new("Location", &self.location))?;
                writeln!(out)?;
            }
            other => writeln!(out, "{}", other)?,
        }

        write!(out, "Trace file:")?;
        if let Some(trace_file) = &self.trace_file {
            write!(out, "\t{}", trace_file)?;
        }
        writeln!(out)?;

        writeln!(out, "Cause:")?;
        if let Some(root_cause) = root_cause {
            for line in root_cause.render_trace().lines() {
                writeln!(out, "\t{}", line)?;
            }
        }
        writeln!(out)?;
        writeln!(out, "Full stacktrace:")?;
        writeln!(out)
    }
}
