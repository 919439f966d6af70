//! Intersection queries for [`SpatialGrid`].
//!
//! Every query works in two phases: the cells covered by the query shape
//! yield candidates (broad phase), then each candidate's current extent from
//! the bounds model is tested exactly. A candidate registered in several
//! visited cells is tested and reported once.
//!
//! Each query clears `results`, fills it in unspecified order and returns the
//! number of objects found. The `*_with` forms take a caller-owned
//! [`QueryScratch`] so repeated queries do not allocate.

use std::fmt::Debug;
use std::hash::Hash;

use crate::accumulator::QueryScratch;
use crate::bounds::BoundsModel;
use crate::geometry::{self, Vec2};
use crate::grid::SpatialGrid;
use crate::space::{Axis, Plane, Space};
use crate::traversal::GridWalk;

impl<H, M, S> SpatialGrid<H, M, S>
where
    H: Copy + Eq + Hash + Debug,
    M: BoundsModel<H, S>,
    S: Space,
{
    /// Finds objects containing `point`. Boundaries are inclusive.
    pub fn query_point(&self, point: S::Point, results: &mut Vec<H>) -> usize {
        let mut scratch = QueryScratch::new();
        self.query_point_with(point, &mut scratch, results)
    }

    /// [`query_point`](Self::query_point) with caller-owned scratch
    pub fn query_point_with(&self, point: S::Point, scratch: &mut QueryScratch<H>, results: &mut Vec<H>) -> usize {
        results.clear();
        scratch.begin();
        if let Some(cell) = S::cell_of(point, self.resolution) {
            self.scan_cell(&cell, scratch, |candidate| {
                let (center, half) = self.model.effective_bounds(candidate);
                S::contains_point(center, half, point)
            });
        }
        scratch.drain_into(results)
    }

    /// Finds objects overlapping the extent `center ± half`.
    ///
    /// Overlap is strict: an object that only shares an edge with the query
    /// extent is not reported.
    pub fn query_box(&self, center: S::Point, half: S::Point, results: &mut Vec<H>) -> usize {
        let mut scratch = QueryScratch::new();
        self.query_box_with(center, half, &mut scratch, results)
    }

    /// [`query_box`](Self::query_box) with caller-owned scratch
    pub fn query_box_with(
        &self,
        center: S::Point,
        half: S::Point,
        scratch: &mut QueryScratch<H>,
        results: &mut Vec<H>,
    ) -> usize {
        results.clear();
        scratch.begin();
        self.collect_overlapping(center, half, scratch);
        scratch.drain_into(results)
    }

    /// Finds objects overlapping `handle`'s current extent, excluding `handle` itself.
    ///
    /// `handle` need not be a member; its geometry comes from the bounds model.
    pub fn query_object(&self, handle: H, results: &mut Vec<H>) -> usize {
        let mut scratch = QueryScratch::new();
        self.query_object_with(handle, &mut scratch, results)
    }

    /// [`query_object`](Self::query_object) with caller-owned scratch
    pub fn query_object_with(&self, handle: H, scratch: &mut QueryScratch<H>, results: &mut Vec<H>) -> usize {
        results.clear();
        scratch.begin();
        scratch.exclude(handle);
        let (center, half) = self.model.effective_bounds(&handle);
        self.collect_overlapping(center, half, scratch);
        scratch.drain_into(results)
    }

    /// Offers every member of `cell` to the accumulator
    #[inline]
    pub(crate) fn scan_cell(&self, cell: &S::Cell, scratch: &mut QueryScratch<H>, test: impl Fn(&H) -> bool) {
        let Some(members) = self.cells.get(cell) else {
            return;
        };
        for &candidate in members {
            scratch.offer(candidate, &test);
        }
    }

    /// Accumulates members overlapping `center ± half`
    fn collect_overlapping(&self, center: S::Point, half: S::Point, scratch: &mut QueryScratch<H>) {
        let Some(range) = S::covered_cells(center, half, self.resolution) else {
            return;
        };
        let test = |candidate: &H| {
            let (c, h) = self.model.effective_bounds(candidate);
            S::overlaps(c, h, center, half)
        };

        // A query larger than the populated area walks occupied cells instead
        if S::cell_count(range) > self.cells.len() as u64 {
            for (cell, members) in self.cells.iter() {
                if !S::range_contains(range, *cell) {
                    continue;
                }
                for &candidate in members {
                    scratch.offer(candidate, &test);
                }
            }
        } else {
            for cell in range {
                self.scan_cell(&cell, scratch, &test);
            }
        }
    }
}

impl<H, M> SpatialGrid<H, M, Plane>
where
    H: Copy + Eq + Hash + Debug,
    M: BoundsModel<H, Plane>,
{
    /// Finds objects whose box intersects the segment `from`-`to`.
    ///
    /// Only the cells the segment passes through are inspected. Touching a
    /// box edge counts as intersecting. A zero-length segment is a point query.
    pub fn query_line(&self, from: Vec2, to: Vec2, results: &mut Vec<H>) -> usize {
        let mut scratch = QueryScratch::new();
        self.query_line_with(from, to, &mut scratch, results)
    }

    /// [`query_line`](Self::query_line) with caller-owned scratch
    pub fn query_line_with(&self, from: Vec2, to: Vec2, scratch: &mut QueryScratch<H>, results: &mut Vec<H>) -> usize {
        if from == to {
            return self.query_point_with(from, scratch, results);
        }

        results.clear();
        scratch.begin();
        let Some(walk) = GridWalk::new(from, to, self.resolution) else {
            return 0;
        };
        let test = |candidate: &H| {
            let (center, half) = self.model.effective_bounds(candidate);
            geometry::segment_intersects_box(from, to, center, half)
        };
        for cell in walk {
            self.scan_cell(&cell, scratch, &test);
        }
        scratch.drain_into(results)
    }

    /// Finds objects overlapping the rectangle given by its corners.
    ///
    /// Corner order does not matter.
    pub fn query_rect(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, results: &mut Vec<H>) -> usize {
        let center = Vec2::new((min_x + max_x) * 0.5, (min_y + max_y) * 0.5);
        let half = Vec2::new((max_x - min_x) * 0.5, (max_y - min_y) * 0.5);
        self.query_box(center, half, results)
    }
}

impl<H, M> SpatialGrid<H, M, Axis>
where
    H: Copy + Eq + Hash + Debug,
    M: BoundsModel<H, Axis>,
{
    /// Finds objects overlapping the interval `[min, max]`.
    ///
    /// Endpoint order does not matter.
    pub fn query_range(&self, min: f64, max: f64, results: &mut Vec<H>) -> usize {
        self.query_box((min + max) * 0.5, (max - min) * 0.5, results)
    }
}
