//! Trace subject integration tests
//!
//! Verifies that coverage assertions:
//! - Hold for traces whose every snapshot matches
//! - Fail on exactly the first offending snapshot
//! - Chain on the same subject and do not survive a clone

use flicker_assert::{FlickerError, RegionSubject, RegionTraceSubject, SubjectContext};
use flicker_region::{Rect, Region};
use flicker_trace::{ComponentName, RegionSnapshot, RegionTrace};
use std::rc::Rc;

use crate::support::{expect_predicate_failure, punched, region_trace, steady_trace, target};

#[test]
fn test_covers_exactly_holds_for_steady_trace() {
    for count in [1, 2, 5] {
        let mut subject = RegionTraceSubject::assert_that(steady_trace(target(), count), None);
        let subject_ptr: *const RegionTraceSubject = &subject;

        let returned = subject.covers_exactly(target()).expect("Steady trace should match");
        assert!(
            std::ptr::eq(returned, subject_ptr),
            "Assertion should return the same subject"
        );
    }
}

#[test]
fn test_assertions_chain() {
    let mut subject = RegionTraceSubject::assert_that(steady_trace(target(), 3), None);

    subject
        .covers_at_least(Rect::new(2, 2, 8, 8))
        .and_then(|s| s.covers_at_most(Rect::new(0, 0, 20, 20)))
        .and_then(|s| s.covers_exactly(target()))
        .expect("All chained assertions should hold");

    assert_eq!(subject.assertion_names().len(), 3);
}

#[test]
fn test_missing_point_fails_at_its_timestamp() {
    let trace = region_trace(vec![
        target().into(),
        punched(target(), 5, 5),
        target().into(),
    ]);
    let mut subject = RegionTraceSubject::assert_that(trace, None);

    let err = subject.covers_at_least(target()).unwrap_err();

    let failure = expect_predicate_failure(&err, "coversAtLeast", 1);
    assert!(failure.offending.contains_point(5, 5));
    assert_eq!(failure.offending, Region::from(Rect::new(5, 5, 6, 6)));
}

#[test]
fn test_first_failing_snapshot_is_reported() {
    let too_big = Region::from(Rect::new(0, 0, 12, 10));
    let trace = region_trace(vec![target().into(), too_big.clone(), too_big]);
    let mut subject = RegionTraceSubject::assert_that(trace, None);

    let err = subject.covers_at_most(target()).unwrap_err();

    expect_predicate_failure(&err, "coversAtMost", 1);
}

#[test]
fn test_predicate_runs_in_timestamp_order_and_stops() {
    let trace = region_trace(vec![target().into(), Region::empty(), target().into()]);
    let mut subject = RegionTraceSubject::assert_that(trace, None);
    let mut visited = Vec::new();

    let result = subject.add_assertion("isNotEmpty", |s: &RegionSubject| {
        visited.push(s.timestamp());
        s.is_not_empty()?;
        Ok(())
    });

    assert!(result.is_err());
    assert_eq!(visited, [0, 1]);
}

#[test]
fn test_failed_assertion_does_not_block_later_ones() {
    let trace = region_trace(vec![target().into(), Rect::new(0, 0, 5, 5).into()]);
    let mut subject = RegionTraceSubject::assert_that(trace, None);

    assert!(subject.covers_exactly(target()).is_err());
    assert!(subject.covers_at_most(target()).is_ok());
    assert_eq!(subject.assertion_names().len(), 2);
}

#[test]
fn test_clone_drops_assertions() {
    let parent = Rc::new(SubjectContext::new("LayersTrace"));
    let mut subject = RegionTraceSubject::assert_that(steady_trace(target(), 2), Some(parent));
    subject.covers_at_least(target()).unwrap();
    subject.covers_at_most(target()).unwrap();
    assert_eq!(subject.assertion_names().len(), 2);

    let fresh = subject.clone();

    assert!(fresh.assertion_names().is_empty());
    assert_eq!(fresh.trace(), subject.trace());
    assert!(Rc::ptr_eq(fresh.parent().unwrap(), subject.parent().unwrap()));
    assert_eq!(subject.assertion_names().len(), 2);
}

#[test]
fn test_component_filter_aggregates_matching_layers() {
    let app = ComponentName::new("com.app", "com.app.Main");
    let entries = (0..3)
        .map(|t| {
            RegionSnapshot::new(t)
                .with_layer("com.app/com.app.Main#0", Rect::new(0, 0, 10, 5))
                .with_layer("com.app/com.app.Main#1", Rect::new(0, 5, 10, 10))
                .with_layer("NavigationBar#0", Rect::new(0, 10, 10, 12))
        })
        .collect();
    let trace = RegionTrace::new(vec![app], entries).unwrap();
    let mut subject = RegionTraceSubject::assert_that(trace, None);

    subject
        .covers_exactly(target())
        .expect("Only the app layers should be aggregated");
}

#[test]
fn test_predicate_and_coverage_agree_with_region_difference() {
    let candidates = [
        Rect::new(0, 0, 10, 10),
        Rect::new(0, 0, 5, 10),
        Rect::new(2, 2, 12, 12),
        Rect::new(-5, -5, 15, 15),
        Rect::EMPTY,
    ];

    for visible in candidates {
        for wanted in candidates {
            let subject = RegionSubject::new(visible, 0, None);
            let visible_region = Region::from(visible);
            let wanted_region = Region::from(wanted);
            let at_least = wanted_region.subtract(&visible_region).is_empty();
            let at_most = visible_region.subtract(&wanted_region).is_empty();

            assert_eq!(subject.covers_at_least(wanted).is_ok(), at_least, "{} vs {}", visible, wanted);
            assert_eq!(subject.covers_at_most(wanted).is_ok(), at_most, "{} vs {}", visible, wanted);
            assert_eq!(
                subject.covers_exactly(wanted).is_ok(),
                at_least && at_most,
                "{} vs {}",
                visible,
                wanted
            );
        }
    }
}

#[test]
fn test_failure_facts_identify_assertion_and_entry() {
    let trace = region_trace(vec![target().into(), punched(target(), 5, 5)]);
    let parent = Rc::new(SubjectContext::new("LayersTrace").with_fact("Trace", "layers_trace.pb"));
    let mut subject = RegionTraceSubject::assert_that(trace, Some(parent));

    let err = subject.covers_at_least(target()).unwrap_err();
    let FlickerError::Subject(failure) = &err else {
        panic!("Expected a subject failure, got {:?}", err);
    };

    let keys: Vec<&str> = failure
        .subject_information
        .iter()
        .map(|f| f.key.as_str())
        .collect();
    assert_eq!(keys[0], "Assertion");
    assert!(failure.subject_information[0].value.starts_with("coversAtLeast("));
    assert!(keys.contains(&"Timestamp"));
    assert!(keys.contains(&"Components"));
    assert_eq!(keys.last(), Some(&"Trace"));
    assert_eq!(failure.error_type, "Flicker assertion error");
}
