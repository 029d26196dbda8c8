//! Builders for in-memory region traces.

use flicker_region::{Rect, Region};
use flicker_trace::{RegionSnapshot, RegionTrace};

/// The target used by most tests: `(0,0)-(10,10)`.
pub fn target() -> Rect {
    Rect::new(0, 0, 10, 10)
}

/// `rect` with the single point `(x, y)` removed.
pub fn punched(rect: Rect, x: i32, y: i32) -> Region {
    Region::from(rect).subtract(&Region::from(Rect::new(x, y, x + 1, y + 1)))
}

/// One snapshot per region, at timestamps `0, 1, 2, ...`, each with a single
/// layer and no component filter.
pub fn region_trace(regions: Vec<Region>) -> RegionTrace {
    let entries = regions
        .into_iter()
        .enumerate()
        .map(|(i, region)| RegionSnapshot::new(i as i64).with_layer("Surface#0", region))
        .collect();
    RegionTrace::new(vec![], entries).expect("timestamps are increasing")
}

/// `count` snapshots all showing exactly `region`.
pub fn steady_trace(region: impl Into<Region>, count: usize) -> RegionTrace {
    let region = region.into();
    region_trace(vec![region; count])
}
