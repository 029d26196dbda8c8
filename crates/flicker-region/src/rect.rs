//! Axis-aligned integer rectangles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-open integer rectangle: a point `(x, y)` is inside when
/// `left <= x < right` and `top <= y < bottom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// The canonical empty rectangle.
    pub const EMPTY: Rect = Rect {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Create a rectangle from its edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size. The far edges clamp
    /// at the coordinate range.
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    /// A rectangle with no area covers no points.
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Number of points covered.
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.width().unsigned_abs() * self.height().unsigned_abs()
        }
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Whether every point of `other` lies in this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (!self.is_empty()
                && self.left <= other.left
                && self.top <= other.top
                && self.right >= other.right
                && self.bottom >= other.bottom)
    }

    /// Overlap of two rectangles, or [`Rect::EMPTY`] when they are disjoint.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let rect = Rect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        if rect.is_empty() {
            Rect::EMPTY
        } else {
            rect
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Points of `self` not covered by `other`, as at most four disjoint
    /// rectangles (top band, bottom band, left and right slabs).
    pub fn subtract(&self, other: &Rect) -> Vec<Rect> {
        if self.is_empty() {
            return Vec::new();
        }
        let overlap = self.intersect(other);
        if overlap.is_empty() {
            return vec![*self];
        }

        [
            Rect::new(self.left, self.top, self.right, overlap.top),
            Rect::new(self.left, overlap.bottom, self.right, self.bottom),
            Rect::new(self.left, overlap.top, overlap.left, overlap.bottom),
            Rect::new(overlap.right, overlap.top, self.right, overlap.bottom),
        ]
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {} - {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
