//! A single timestamped capture of layer geometry.

use std::collections::BTreeMap;

use flicker_region::Region;
use serde::{Deserialize, Serialize};

use crate::ComponentName;

/// Visible region of every captured layer at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionSnapshot {
    /// Capture time in nanoseconds.
    pub timestamp: i64,
    /// Visible region keyed by layer name.
    #[serde(default)]
    pub layers: BTreeMap<String, Region>,
}

impl RegionSnapshot {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            layers: BTreeMap::new(),
        }
    }

    /// Add a layer (builder style).
    pub fn with_layer(mut self, name: impl Into<String>, region: impl Into<Region>) -> Self {
        self.layers.insert(name.into(), region.into());
        self
    }

    /// Union of the regions of every layer matched by `filter`.
    ///
    /// An empty filter matches every layer.
    pub fn visible_region(&self, filter: &[ComponentName]) -> Region {
        self.layers
            .iter()
            .filter(|(name, _)| filter.is_empty() || filter.iter().any(|c| c.matches(name)))
            .fold(Region::empty(), |acc, (_, region)| acc.union(region))
    }
}
