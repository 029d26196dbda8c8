//! Assertions over every snapshot of a region trace.

use std::rc::Rc;

use flicker_region::Region;
use flicker_trace::{format_timestamp, RegionTrace};
use once_cell::unsync::OnceCell;
use tracing::{debug, trace};

use crate::{Fact, FlickerError, RegionSubject, SubjectContext, SubjectFailure};

const ASSERTION_ERROR: &str = "Flicker assertion error";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Subject over a whole [`RegionTrace`].
///
/// Every assertion is evaluated immediately against each snapshot, in
/// timestamp order, and fails on the first snapshot that does not satisfy it.
/// On success the same subject is returned so assertions chain:
///
/// ```ignore
/// RegionTraceSubject::assert_that(trace, None)
///     .covers_at_least(min_bounds)?
///     .covers_at_most(display_bounds)?;
/// ```
pub struct RegionTraceSubject {
    trace: Rc<RegionTrace>,
    parent: Option<Rc<SubjectContext>>,
    context: Rc<SubjectContext>,
    subjects: OnceCell<Vec<RegionSubject>>,
    assertions: Vec<String>,
}

impl RegionTraceSubject {
    /// Create a subject over `trace`, optionally linked to the subject it
    /// was derived from.
    pub fn assert_that(
        trace: impl Into<Rc<RegionTrace>>,
        parent: Option<Rc<SubjectContext>>,
    ) -> Self {
        let trace = trace.into();
        let context = Rc::new(Self::context_for(&trace, parent.clone()));
        Self {
            trace,
            parent,
            context,
            subjects: OnceCell::new(),
            assertions: Vec::new(),
        }
    }

    fn context_for(trace: &RegionTrace, parent: Option<Rc<SubjectContext>>) -> SubjectContext {
        let mut context = SubjectContext::new("RegionTrace")
            .with_fact("Components", components_as_string(trace))
            .with_fact("Entries", trace.len());
        if let (Some(first), Some(last)) = (trace.entries().first(), trace.entries().last()) {
            context = context
                .with_fact("Trace start", format_timestamp(first.timestamp))
                .with_fact("Trace end", format_timestamp(last.timestamp));
        }
        context.with_parent(parent)
    }

    pub fn trace(&self) -> &RegionTrace {
        &self.trace
    }

    pub fn parent(&self) -> Option<&Rc<SubjectContext>> {
        self.parent.as_ref()
    }

    /// One subject per snapshot, built on first use and cached.
    pub fn subjects(&self) -> &[RegionSubject] {
        self.subjects.get_or_init(|| {
            trace!(entries = self.trace.len(), "Building region subjects");
            let filter = self.trace.components();
            self.trace
                .entries()
                .iter()
                .map(|entry| RegionSubject::from_snapshot(entry, filter, Some(self.context.clone())))
                .collect()
        })
    }

    pub fn first(&self) -> Option<&RegionSubject> {
        self.subjects().first()
    }

    pub fn last(&self) -> Option<&RegionSubject> {
        self.subjects().last()
    }

    /// Subject for the snapshot captured exactly at `timestamp`.
    pub fn entry(&self, timestamp: i64) -> Option<&RegionSubject> {
        let idx = self.trace.position_of(timestamp)?;
        self.subjects().get(idx)
    }

    /// Names of the assertions run on this subject, in order.
    pub fn assertion_names(&self) -> &[String] {
        &self.assertions
    }

    /// Run `predicate` against every snapshot, stopping at the first one it
    /// rejects.
    pub fn add_assertion<F>(
        &mut self,
        name: impl Into<String>,
        mut predicate: F,
    ) -> Result<&mut Self, FlickerError>
    where
        F: FnMut(&RegionSubject) -> Result<(), FlickerError>,
    {
        let name = name.into();
        debug!(assertion = %name, entries = self.trace.len(), "Running trace assertion");
        self.assertions.push(name.clone());

        for subject in self.subjects() {
            if let Err(cause) = predicate(subject) {
                debug!(
                    assertion = %name,
                    timestamp = subject.timestamp(),
                    "Trace assertion failed"
                );
                return Err(self.fail(&name, subject, cause));
            }
        }
        Ok(self)
    }

    /// Every snapshot shows at least `target`.
    pub fn covers_at_least(&mut self, target: impl Into<Region>) -> Result<&mut Self, FlickerError> {
        let target = target.into();
        let name = format!("coversAtLeast({}, {})", target, components_as_string(&self.trace));
        self.add_assertion(name, move |subject| {
            subject.covers_at_least(&target)?;
            Ok(())
        })
    }

    /// No snapshot shows anything outside `target`.
    pub fn covers_at_most(&mut self, target: impl Into<Region>) -> Result<&mut Self, FlickerError> {
        let target = target.into();
        let name = format!("coversAtMost({}, {})", target, components_as_string(&self.trace));
        self.add_assertion(name, move |subject| {
            subject.covers_at_most(&target)?;
            Ok(())
        })
    }

    /// Every snapshot shows exactly `target`.
    pub fn covers_exactly(&mut self, target: impl Into<Region>) -> Result<&mut Self, FlickerError> {
        let target = target.into();
        let name = format!("coversExactly({}, {})", target, components_as_string(&self.trace));
        self.add_assertion(name, move |subject| {
            subject.covers_exactly(&target)?;
            Ok(())
        })
    }

    /// The trace has at least one snapshot.
    pub fn is_not_empty(&mut self) -> Result<&mut Self, FlickerError> {
        self.assertions.push("isNotEmpty".to_string());
        if self.trace.is_empty() {
            return Err(SubjectFailure {
                error_type: ASSERTION_ERROR.to_string(),
                description: "Trace is empty".to_string(),
                subject_information: self.context.facts(),
                cause: None,
            }
            .into());
        }
        Ok(self)
    }

    fn fail(&self, assertion: &str, subject: &RegionSubject, cause: FlickerError) -> FlickerError {
        let error_type = match cause {
            FlickerError::Predicate(_) | FlickerError::Subject(_) => ASSERTION_ERROR,
            FlickerError::Raised { .. } => UNKNOWN_ERROR,
        };
        let mut subject_information = vec![Fact::new("Assertion", assertion)];
        subject_information.extend(subject.facts());

        FlickerError::Subject(SubjectFailure {
            error_type: error_type.to_string(),
            description: cause.to_string(),
            subject_information,
            cause: Some(Box::new(cause)),
        })
    }
}

/// A fresh subject over the same trace and parent. Assertions already run
/// on `self` are not carried over.
impl Clone for RegionTraceSubject {
    fn clone(&self) -> Self {
        Self {
            trace: self.trace.clone(),
            parent: self.parent.clone(),
            context: self.context.clone(),
            subjects: OnceCell::new(),
            assertions: Vec::new(),
        }
    }
}

impl std::fmt::Debug for RegionTraceSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionTraceSubject")
            .field("components", &components_as_string(&self.trace))
            .field("entries", &self.trace.len())
            .field("assertions", &self.assertions)
            .finish()
    }
}

fn components_as_string(trace: &RegionTrace) -> String {
    let components = trace.components();
    if components.is_empty() {
        "<any>".to_string()
    } else {
        let names: Vec<String> = components.iter().map(ToString::to_string).collect();
        format!("[{}]", names.join(", "))
    }
}
