//! Custom assertions for failures and reports.

use flicker_assert::{FailureReport, FlickerError, PredicateFailure, SubjectFailure};

/// Assert that `err` is a subject wrapper and return it.
#[track_caller]
pub fn expect_subject_failure(err: &FlickerError) -> &SubjectFailure {
    match err {
        FlickerError::Subject(failure) => failure,
        other => panic!("Expected a subject failure, got: {:?}", other),
    }
}

/// Assert that `err` wraps a predicate failure for `predicate` at `timestamp`.
#[track_caller]
pub fn expect_predicate_failure<'a>(
    err: &'a FlickerError,
    predicate: &str,
    timestamp: i64,
) -> &'a PredicateFailure {
    let wrapper = expect_subject_failure(err);
    let failure = match wrapper.cause.as_deref() {
        Some(FlickerError::Predicate(failure)) => failure,
        other => panic!("Expected a predicate failure cause, got: {:?}", other),
    };

    assert_eq!(
        failure.predicate, predicate,
        "Predicate mismatch: expected {}, got {}",
        predicate, failure.predicate
    );
    assert_eq!(
        failure.timestamp, timestamp,
        "Failing timestamp mismatch: expected {}, got {}",
        timestamp, failure.timestamp
    );
    failure
}

/// The text of the `Cause:` section of a report.
#[track_caller]
pub fn cause_section(report: &FailureReport) -> &str {
    let message = report.message();
    let start = message
        .find("Cause:\n")
        .unwrap_or_else(|| panic!("Report has no cause section:\n{}", message));
    let end = message
        .find("Full stacktrace:")
        .unwrap_or_else(|| panic!("Report has no stacktrace marker:\n{}", message));
    &message[start + "Cause:\n".len()..end]
}
