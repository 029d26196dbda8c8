//! Assertions on the visible region of a single snapshot.

use std::rc::Rc;

use flicker_region::Region;
use flicker_trace::{format_timestamp, ComponentName, RegionSnapshot};
use tracing::trace;

use crate::{Fact, PredicateFailure, SubjectContext};

/// Aggregated visible region of one snapshot, ready to be asserted on.
#[derive(Debug, Clone)]
pub struct RegionSubject {
    region: Region,
    timestamp: i64,
    parent: Option<Rc<SubjectContext>>,
}

impl RegionSubject {
    pub fn new(region: impl Into<Region>, timestamp: i64, parent: Option<Rc<SubjectContext>>) -> Self {
        Self {
            region: region.into(),
            timestamp,
            parent,
        }
    }

    /// Subject over the union of the layers of `snapshot` matched by `filter`.
    pub fn from_snapshot(
        snapshot: &RegionSnapshot,
        filter: &[ComponentName],
        parent: Option<Rc<SubjectContext>>,
    ) -> Self {
        Self::new(snapshot.visible_region(filter), snapshot.timestamp, parent)
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn parent(&self) -> Option<&Rc<SubjectContext>> {
        self.parent.as_ref()
    }

    /// State of this subject and its ancestors for failure reports.
    pub fn facts(&self) -> Vec<Fact> {
        let mut facts = vec![
            Fact::new(
                "Timestamp",
                format!("{} ({} ns)", format_timestamp(self.timestamp), self.timestamp),
            ),
            Fact::new("Visible region", &self.region),
        ];
        if let Some(parent) = &self.parent {
            facts.extend(parent.facts());
        }
        facts
    }

    /// Passes when every point of `target` is visible.
    pub fn covers_at_least(&self, target: impl Into<Region>) -> Result<&Self, PredicateFailure> {
        let target = target.into();
        let uncovered = target.subtract(&self.region);
        self.check(
            "coversAtLeast",
            uncovered,
            format!("Region to test: {}, uncovered region", target),
        )
    }

    /// Passes when no visible point lies outside `target`.
    pub fn covers_at_most(&self, target: impl Into<Region>) -> Result<&Self, PredicateFailure> {
        let target = target.into();
        let out_of_bounds = self.region.subtract(&target);
        self.check(
            "coversAtMost",
            out_of_bounds,
            format!("Region to test: {}, out-of-bounds region", target),
        )
    }

    /// Passes when the visible region is exactly `target`.
    pub fn covers_exactly(&self, target: impl Into<Region>) -> Result<&Self, PredicateFailure> {
        let target = target.into();
        let difference = self.region.xor(&target);
        self.check(
            "coversExactly",
            difference,
            format!("Expected region: {}, difference", target),
        )
    }

    /// Passes when nothing is visible.
    pub fn is_empty(&self) -> Result<&Self, PredicateFailure> {
        let visible = self.region.clone();
        self.check("isEmpty", visible, "Expected empty region, visible".to_string())
    }

    /// Passes when something is visible.
    pub fn is_not_empty(&self) -> Result<&Self, PredicateFailure> {
        if self.region.is_empty() {
            Err(self.failure(
                "isNotEmpty",
                Region::empty(),
                "Expected a visible region, but nothing is visible".to_string(),
            ))
        } else {
            Ok(self)
        }
    }

    /// Succeed when `offending` is empty, otherwise describe it.
    fn check(
        &self,
        predicate: &str,
        offending: Region,
        label: String,
    ) -> Result<&Self, PredicateFailure> {
        if offending.is_empty() {
            return Ok(self);
        }
        let description = format!("{}: {}", label, offending);
        Err(self.failure(predicate, offending, description))
    }

    fn failure(&self, predicate: &str, offending: Region, description: String) -> PredicateFailure {
        trace!(
            predicate,
            timestamp = self.timestamp,
            offending = %offending,
            "Snapshot predicate failed"
        );
        PredicateFailure {
            predicate: predicate.to_string(),
            timestamp: self.timestamp,
            offending,
            description,
        }
    }
}
