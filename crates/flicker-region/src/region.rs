//! Regions as unions of disjoint rectangles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Rect;

/// A set of points stored as pairwise-disjoint, non-empty rectangles.
///
/// Equality is point-set equality: two regions are equal when they cover the
/// same points, no matter how each one is split into rectangles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RegionRepr", into = "RegionRepr")]
pub struct Region {
    rects: Vec<Rect>,
}

/// On-disk form; may contain overlapping rects, normalized on load.
#[derive(Clone, Serialize, Deserialize)]
struct RegionRepr {
    #[serde(default)]
    rects: Vec<Rect>,
}

impl From<RegionRepr> for Region {
    fn from(repr: RegionRepr) -> Self {
        repr.rects.into_iter().collect()
    }
}

impl From<Region> for RegionRepr {
    fn from(region: Region) -> Self {
        Self {
            rects: region.rects,
        }
    }
}

impl Region {
    /// A region covering no points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The disjoint rectangles making up this region.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Number of points covered.
    pub fn area(&self) -> u64 {
        self.rects
            .iter()
            .fold(0, |total: u64, rect| total.saturating_add(rect.area()))
    }

    /// Smallest rectangle containing the whole region.
    pub fn bounds(&self) -> Rect {
        let mut iter = self.rects.iter();
        let Some(first) = iter.next() else {
            return Rect::EMPTY;
        };
        iter.fold(*first, |acc, r| {
            Rect::new(
                acc.left.min(r.left),
                acc.top.min(r.top),
                acc.right.max(r.right),
                acc.bottom.max(r.bottom),
            )
        })
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains_point(x, y))
    }

    /// Whether every point of `other` lies in this region.
    pub fn contains_region(&self, other: &Region) -> bool {
        other.subtract(self).is_empty()
    }

    /// Add the points of `rect`, keeping the rectangles disjoint.
    fn add_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let mut pieces = vec![rect];
        for existing in &self.rects {
            pieces = pieces
                .into_iter()
                .flat_map(|piece| piece.subtract(existing))
                .collect();
            if pieces.is_empty() {
                return;
            }
        }
        self.rects.extend(pieces);
    }

    /// Points in either region.
    pub fn union(&self, other: &Region) -> Region {
        let mut result = self.clone();
        for rect in &other.rects {
            result.add_rect(*rect);
        }
        result
    }

    /// Points in `self` that are not in `other`.
    pub fn subtract(&self, other: &Region) -> Region {
        let mut rects = self.rects.clone();
        for cut in &other.rects {
            rects = rects.into_iter().flat_map(|r| r.subtract(cut)).collect();
            if rects.is_empty() {
                break;
            }
        }
        Region { rects }
    }

    /// Points in both regions.
    pub fn intersect(&self, other: &Region) -> Region {
        // Both inputs are disjoint, so the pairwise overlaps are too.
        let rects = self
            .rects
            .iter()
            .flat_map(|a| other.rects.iter().map(move |b| a.intersect(b)))
            .filter(|r| !r.is_empty())
            .collect();
        Region { rects }
    }

    /// Points in exactly one of the two regions.
    pub fn xor(&self, other: &Region) -> Region {
        let mut rects = self.subtract(other).rects;
        rects.extend(other.subtract(self).rects);
        Region { rects }
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.area() == other.area() && self.xor(other).is_empty()
    }
}

impl Eq for Region {}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        let mut region = Region::empty();
        region.add_rect(rect);
        region
    }
}

impl From<&Rect> for Region {
    fn from(rect: &Rect) -> Self {
        Region::from(*rect)
    }
}

impl From<&Region> for Region {
    fn from(region: &Region) -> Self {
        region.clone()
    }
}

impl From<Vec<Rect>> for Region {
    fn from(rects: Vec<Rect>) -> Self {
        rects.into_iter().collect()
    }
}

impl From<&[Rect]> for Region {
    fn from(rects: &[Rect]) -> Self {
        rects.iter().copied().collect()
    }
}

impl<const N: usize> From<[Rect; N]> for Region {
    fn from(rects: [Rect; N]) -> Self {
        rects.into_iter().collect()
    }
}

impl FromIterator<Rect> for Region {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        let mut region = Region::empty();
        for rect in iter {
            region.add_rect(rect);
        }
        region
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region[")?;
        for (i, rect) in self.rects.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", rect)?;
        }
        write!(f, "]")
    }
}
