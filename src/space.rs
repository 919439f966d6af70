//! Dimensionality of a grid index.
//!
//! [`SpatialGrid`](crate::SpatialGrid) is generic over a [`Space`], which
//! supplies the point type, the cell key type and the handful of geometric
//! operations the index needs. Two spaces are provided: [`Plane`] (2D) and
//! [`Axis`] (1D).
//!
//! Every conversion from world extents to cells goes through [`cell_span`]:
//! an extent `center ± half` covers cells
//! `floor((center - |half|) / resolution)` through
//! `ceil((center + |half|) / resolution)` inclusive.

use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::geometry::{self, Vec2};

/// Dimensionality capability of a grid index.
pub trait Space: Copy + Debug + Default + 'static {
    /// World-space point (also used for half-extents and sweep vectors)
    type Point: Copy + Debug + PartialEq;
    /// Grid cell address
    type Cell: Copy + Eq + Hash + Debug;
    /// Inclusive block of cells covered by an extent
    type CellRange: Copy + Debug + PartialEq + IntoIterator<Item = Self::Cell>;

    /// A point with every coordinate NaN, reported for unknown objects
    const NAN: Self::Point;

    /// Whether every coordinate of `point` is finite
    fn is_finite(point: Self::Point) -> bool;

    /// Cell containing `point`; `None` for non-finite input
    fn cell_of(point: Self::Point, resolution: f64) -> Option<Self::Cell>;

    /// Cells covered by the extent `center ± half`; `None` for non-finite input
    fn covered_cells(center: Self::Point, half: Self::Point, resolution: f64) -> Option<Self::CellRange>;

    /// Number of cells in `range`, saturating at `u64::MAX`
    fn cell_count(range: Self::CellRange) -> u64;

    /// Whether `cell` lies in `range`
    fn range_contains(range: Self::CellRange, cell: Self::Cell) -> bool;

    /// Closed point containment
    fn contains_point(center: Self::Point, half: Self::Point, point: Self::Point) -> bool;

    /// Strict extent overlap
    fn overlaps(center_a: Self::Point, half_a: Self::Point, center_b: Self::Point, half_b: Self::Point) -> bool;

    /// Extent covering `center ± half` and the same extent moved by `sweep`
    fn swept(center: Self::Point, half: Self::Point, sweep: Self::Point) -> (Self::Point, Self::Point);
}

/// Cell index containing coordinate `v`
#[inline]
pub fn cell_coord(v: f64, resolution: f64) -> Option<i64> {
    let scaled = (v / resolution).floor();
    // `as` saturates at the i64 bounds
    scaled.is_finite().then_some(scaled as i64)
}

/// Inclusive cell span covered by `center ± half` along one axis
#[inline]
pub fn cell_span(center: f64, half: f64, resolution: f64) -> Option<AxisRange> {
    let (lo, hi) = geometry::interval_edges(center, half);
    let min = (lo / resolution).floor();
    let max = (hi / resolution).ceil();
    if !min.is_finite() || !max.is_finite() {
        return None;
    }
    Some(AxisRange {
        min: min as i64,
        max: max as i64,
    })
}

// ============================================================================
// 1D
// ============================================================================

/// Inclusive range of 1D cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisRange {
    /// First covered cell
    pub min: i64,
    /// Last covered cell
    pub max: i64,
}

impl AxisRange {
    /// Number of cells in the range
    pub fn len(self) -> u64 {
        if self.max < self.min {
            0
        } else {
            self.max.abs_diff(self.min).saturating_add(1)
        }
    }

    /// Whether the range holds no cells
    pub fn is_empty(self) -> bool {
        self.max < self.min
    }

    /// Whether `cell` lies in the range
    pub fn contains(self, cell: i64) -> bool {
        cell >= self.min && cell <= self.max
    }
}

impl IntoIterator for AxisRange {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.min..=self.max
    }
}

/// One-dimensional space: points are `f64`, cells are `i64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Axis;

impl Space for Axis {
    type Point = f64;
    type Cell = i64;
    type CellRange = AxisRange;

    const NAN: f64 = f64::NAN;

    fn is_finite(point: f64) -> bool {
        point.is_finite()
    }

    fn cell_of(point: f64, resolution: f64) -> Option<i64> {
        cell_coord(point, resolution)
    }

    fn covered_cells(center: f64, half: f64, resolution: f64) -> Option<AxisRange> {
        cell_span(center, half, resolution)
    }

    fn cell_count(range: AxisRange) -> u64 {
        range.len()
    }

    fn range_contains(range: AxisRange, cell: i64) -> bool {
        range.contains(cell)
    }

    fn contains_point(center: f64, half: f64, point: f64) -> bool {
        geometry::interval_contains(center, half, point)
    }

    fn overlaps(center_a: f64, half_a: f64, center_b: f64, half_b: f64) -> bool {
        geometry::intervals_overlap(center_a, half_a, center_b, half_b)
    }

    fn swept(center: f64, half: f64, sweep: f64) -> (f64, f64) {
        geometry::swept_interval(center, half, sweep)
    }
}

// ============================================================================
// 2D
// ============================================================================

/// Inclusive rectangle of 2D cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    /// Covered columns
    pub x: AxisRange,
    /// Covered rows
    pub y: AxisRange,
}

impl CellRect {
    /// Number of cells in the rectangle, saturating
    pub fn len(self) -> u64 {
        self.x.len().saturating_mul(self.y.len())
    }

    /// Whether the rectangle holds no cells
    pub fn is_empty(self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    /// Whether `cell` lies in the rectangle
    pub fn contains(self, (cx, cy): (i64, i64)) -> bool {
        self.x.contains(cx) && self.y.contains(cy)
    }
}

impl IntoIterator for CellRect {
    type Item = (i64, i64);
    type IntoIter = RectCells;

    fn into_iter(self) -> RectCells {
        RectCells {
            cx: self.x.min,
            cy: self.y.min,
            done: self.is_empty(),
            rect: self,
        }
    }
}

/// Row-major iterator over the cells of a [`CellRect`]
#[derive(Clone, Debug)]
pub struct RectCells {
    rect: CellRect,
    cx: i64,
    cy: i64,
    done: bool,
}

impl Iterator for RectCells {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.done {
            return None;
        }
        let cell = (self.cx, self.cy);
        if self.cx < self.rect.x.max {
            self.cx += 1;
        } else if self.cy < self.rect.y.max {
            self.cx = self.rect.x.min;
            self.cy += 1;
        } else {
            self.done = true;
        }
        Some(cell)
    }
}

impl FusedIterator for RectCells {}

/// Two-dimensional space: points are [`Vec2`], cells are `(i64, i64)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plane;

impl Space for Plane {
    type Point = Vec2;
    type Cell = (i64, i64);
    type CellRange = CellRect;

    const NAN: Vec2 = Vec2::new(f64::NAN, f64::NAN);

    fn is_finite(point: Vec2) -> bool {
        point.is_finite()
    }

    fn cell_of(point: Vec2, resolution: f64) -> Option<(i64, i64)> {
        Some((cell_coord(point.x, resolution)?, cell_coord(point.y, resolution)?))
    }

    fn covered_cells(center: Vec2, half: Vec2, resolution: f64) -> Option<CellRect> {
        Some(CellRect {
            x: cell_span(center.x, half.x, resolution)?,
            y: cell_span(center.y, half.y, resolution)?,
        })
    }

    fn cell_count(range: CellRect) -> u64 {
        range.len()
    }

    fn range_contains(range: CellRect, cell: (i64, i64)) -> bool {
        range.contains(cell)
    }

    fn contains_point(center: Vec2, half: Vec2, point: Vec2) -> bool {
        geometry::box_contains(center, half, point)
    }

    fn overlaps(center_a: Vec2, half_a: Vec2, center_b: Vec2, half_b: Vec2) -> bool {
        geometry::boxes_overlap(center_a, half_a, center_b, half_b)
    }

    fn swept(center: Vec2, half: Vec2, sweep: Vec2) -> (Vec2, Vec2) {
        geometry::swept_box(center, half, sweep)
    }
}
