//! Exact bounding-extent tests used after the broad-phase cell lookup.
//!
//! Extents are given as center and half-extent. Half-extents are taken by
//! absolute value everywhere, so a negative half-width describes the same box
//! as its positive counterpart.
//!
//! Conventions:
//! - point containment is closed: `lo <= p <= hi`
//! - extent overlap is strict: touching edges do not overlap
//! - segment tests are closed: touching an edge counts as a hit

use serde::{Deserialize, Serialize};

/// A 2D point or vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Vec2 {
    /// Creates a new vector
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise absolute value
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Whether both components are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Lower and upper edge of an extent along one axis
#[inline]
pub fn interval_edges(center: f64, half: f64) -> (f64, f64) {
    let half = half.abs();
    (center - half, center + half)
}

/// Closed containment of `p` in the interval `center ± half`
#[inline]
pub fn interval_contains(center: f64, half: f64, p: f64) -> bool {
    let (lo, hi) = interval_edges(center, half);
    p >= lo && p <= hi
}

/// Strict overlap of two intervals; intervals sharing only an endpoint do not overlap
#[inline]
pub fn intervals_overlap(center_a: f64, half_a: f64, center_b: f64, half_b: f64) -> bool {
    let (lo_a, hi_a) = interval_edges(center_a, half_a);
    let (lo_b, hi_b) = interval_edges(center_b, half_b);
    lo_a < hi_b && hi_a > lo_b
}

/// Closed containment of `p` in the box `center ± half`
#[inline]
pub fn box_contains(center: Vec2, half: Vec2, p: Vec2) -> bool {
    interval_contains(center.x, half.x, p.x) && interval_contains(center.y, half.y, p.y)
}

/// Strict overlap of two axis-aligned boxes.
///
/// Both shapes are axis-aligned, so they overlap iff they overlap on each axis.
#[inline]
pub fn boxes_overlap(center_a: Vec2, half_a: Vec2, center_b: Vec2, half_b: Vec2) -> bool {
    intervals_overlap(center_a.x, half_a.x, center_b.x, half_b.x)
        && intervals_overlap(center_a.y, half_a.y, center_b.y, half_b.y)
}

/// Extent along one axis covering the interval at `center` and at `center + sweep`.
///
/// Returns the new `(center, half)`.
#[inline]
pub fn swept_interval(center: f64, half: f64, sweep: f64) -> (f64, f64) {
    let (lo, hi) = interval_edges(center, half);
    let lo = lo.min(lo + sweep);
    let hi = hi.max(hi + sweep);
    ((lo + hi) * 0.5, (hi - lo) * 0.5)
}

/// Box covering the box at `center` and the same box moved by `sweep`.
#[inline]
pub fn swept_box(center: Vec2, half: Vec2, sweep: Vec2) -> (Vec2, Vec2) {
    let (cx, hx) = swept_interval(center.x, half.x, sweep.x);
    let (cy, hy) = swept_interval(center.y, half.y, sweep.y);
    (Vec2::new(cx, cy), Vec2::new(hx, hy))
}

/// Closed intersection test between segment `a-b` and the box `center ± half`.
///
/// Liang-Barsky clipping of the segment's parameter range against the four
/// slabs. A segment lying entirely inside the box intersects it.
pub fn segment_intersects_box(a: Vec2, b: Vec2, center: Vec2, half: Vec2) -> bool {
    let (min_x, max_x) = interval_edges(center.x, half.x);
    let (min_y, max_y) = interval_edges(center.y, half.y);
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    let slabs = [
        (-dx, a.x - min_x),
        (dx, max_x - a.x),
        (-dy, a.y - min_y),
        (dy, max_y - a.y),
    ];

    for (p, q) in slabs {
        if p == 0.0 {
            // Parallel to this slab: reject if outside it
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t_exit {
                return false;
            }
            t_enter = t_enter.max(r);
        } else {
            if r < t_enter {
                return false;
            }
            t_exit = t_exit.min(r);
        }
    }

    t_enter <= t_exit
}
