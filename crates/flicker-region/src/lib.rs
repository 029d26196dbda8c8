//! # Flicker Region
//!
//! Integer rectangle and region algebra used to describe the visible area of
//! surfaces in a captured compositor trace.
//!
//! A [`Region`] is a set of points stored as a list of pairwise-disjoint,
//! non-empty [`Rect`]s. Every constructor normalizes into that form, so a
//! region built from one rectangle, from a list of overlapping rectangles, or
//! from another region all compare equal when they cover the same points.
//!
//! ```text
//!   Rect(0, 0 - 10, 10)  ─┐
//!   Vec<Rect>             ├──▶ Region { disjoint rects }
//!   [Rect; N]             │        │
//!   Region               ─┘        ▼
//!                         union / subtract / intersect / xor
//! ```

mod rect;
mod region;

pub use rect::Rect;
pub use region::Region;
