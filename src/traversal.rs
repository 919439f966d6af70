//! Grid traversal of a line segment.
//!
//! [`GridWalk`] yields, in order from the first endpoint to the second, every
//! cell the segment passes through. Each step moves one cell along the axis
//! whose next cell boundary the segment reaches first, so a long diagonal
//! visits `|dx| + |dy| + 1` cells instead of its whole bounding rectangle.
//!
//! When the segment crosses a grid corner exactly, both cells beside the
//! corner are yielded before the diagonal cell (supercover), so objects
//! touching the corner from either side are not skipped.
//!
//! The walk is driven by per-axis remaining step counts derived from the
//! endpoint cells, so it always terminates on the cell containing the second
//! endpoint. Boundary crossings are computed afresh from the segment at every
//! step, and crossings closer than [`CORNER_EPSILON`] count as a corner.

use std::iter::FusedIterator;

use crate::geometry::Vec2;
use crate::space::{Plane, Space};

type Cell = (i64, i64);

/// Segment-parameter distance under which an x and a y boundary crossing are
/// treated as the same grid corner
pub const CORNER_EPSILON: f64 = 1e-9;

/// Iterator over the cells crossed by a segment
#[derive(Clone, Debug)]
pub struct GridWalk {
    from: Vec2,
    delta: Vec2,
    resolution: f64,
    cell: Cell,
    step: (i64, i64),
    remaining: (u64, u64),
    /// Corner side cell and diagonal cell still to be yielded
    side: Option<Cell>,
    diagonal: Option<Cell>,
    started: bool,
}

/// Segment parameter at which the walk leaves `cell` along one axis
fn crossing(origin: f64, delta: f64, cell: i64, step: i64, resolution: f64) -> f64 {
    let edge = match step {
        1 => cell + 1,
        -1 => cell,
        _ => return f64::INFINITY,
    };
    (edge as f64 * resolution - origin) / delta
}

impl GridWalk {
    /// Walk from `from` to `to` on a grid of the given resolution.
    ///
    /// Returns `None` if either endpoint is not finite.
    pub fn new(from: Vec2, to: Vec2, resolution: f64) -> Option<Self> {
        let start = Plane::cell_of(from, resolution)?;
        let end = Plane::cell_of(to, resolution)?;
        let delta = Vec2::new(to.x - from.x, to.y - from.y);

        Some(Self {
            from,
            delta,
            resolution,
            cell: start,
            step: (signum(delta.x), signum(delta.y)),
            remaining: (start.0.abs_diff(end.0), start.1.abs_diff(end.1)),
            side: None,
            diagonal: None,
            started: false,
        })
    }

    fn next_x(&self) -> f64 {
        crossing(self.from.x, self.delta.x, self.cell.0, self.step.0, self.resolution)
    }

    fn next_y(&self) -> f64 {
        crossing(self.from.y, self.delta.y, self.cell.1, self.step.1, self.resolution)
    }

    fn step_x(&mut self) {
        self.cell.0 += self.step.0;
        self.remaining.0 -= 1;
    }

    fn step_y(&mut self) {
        self.cell.1 += self.step.1;
        self.remaining.1 -= 1;
    }
}

fn signum(v: f64) -> i64 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

impl Iterator for GridWalk {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if !self.started {
            self.started = true;
            return Some(self.cell);
        }
        if let Some(cell) = self.side.take() {
            return Some(cell);
        }
        if let Some(cell) = self.diagonal.take() {
            return Some(cell);
        }

        let (rx, ry) = self.remaining;
        if rx == 0 && ry == 0 {
            return None;
        }
        if ry == 0 {
            self.step_x();
            return Some(self.cell);
        }
        if rx == 0 {
            self.step_y();
            return Some(self.cell);
        }

        let (tx, ty) = (self.next_x(), self.next_y());
        if tx + CORNER_EPSILON < ty {
            self.step_x();
            return Some(self.cell);
        }
        if ty + CORNER_EPSILON < tx {
            self.step_y();
            return Some(self.cell);
        }

        // Corner crossing: yield both side cells, then the diagonal
        let origin = self.cell;
        self.step_x();
        self.step_y();
        self.side = Some((origin.0, self.cell.1));
        self.diagonal = Some(self.cell);
        Some((self.cell.0, origin.1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(!self.started)
            + usize::from(self.side.is_some())
            + usize::from(self.diagonal.is_some());
        let steps = usize::try_from(self.remaining.0.saturating_add(self.remaining.1)).unwrap_or(usize::MAX);
        (pending.saturating_add(steps), None)
    }
}

impl FusedIterator for GridWalk {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;

    fn walk(from: (f64, f64), to: (f64, f64), resolution: f64) -> Vec<Cell> {
        GridWalk::new(from.into(), to.into(), resolution).unwrap().collect()
    }

    /// Every consecutive pair of cells must share an edge or be a corner step
    fn assert_connected(cells: &[Cell]) {
        for pair in cells.windows(2) {
            let dx = pair[0].0.abs_diff(pair[1].0);
            let dy = pair[0].1.abs_diff(pair[1].1);
            assert!(dx + dy <= 2 && dx <= 1 && dy <= 1, "Cells {pair:?} are not adjacent");
        }
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(walk((0.2, 0.3), (0.8, 0.9), 1.0), vec![(0, 0)], "Segment inside one cell");
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(
            walk((0.5, 0.5), (3.5, 0.5), 1.0),
            vec![(0, 0), (1, 0), (2, 0), (3, 0)],
            "Horizontal walk visits each column once"
        );
    }

    #[test]
    fn test_vertical_negative_direction() {
        assert_eq!(
            walk((0.5, 2.5), (0.5, -0.5), 1.0),
            vec![(0, 2), (0, 1), (0, 0), (0, -1)],
            "Downward walk visits each row once"
        );
    }

    #[test]
    fn test_shallow_slope() {
        let cells = walk((0.5, 0.5), (4.5, 1.5), 1.0);
        assert_eq!(cells.first(), Some(&(0, 0)), "Walk starts at the first endpoint");
        assert_eq!(cells.last(), Some(&(4, 1)), "Walk ends at the second endpoint");
        assert_eq!(cells.len(), 6, "4 x-steps + 1 y-step + start");
        assert_connected(&cells);
    }

    #[test]
    fn test_exact_diagonal_includes_corner_neighbors() {
        let cells = walk((0.5, 0.5), (2.5, 2.5), 1.0);
        assert_eq!(
            cells,
            vec![(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (1, 2), (2, 2)],
            "Diagonal through corners yields the supercover"
        );
    }

    #[test]
    fn test_coarse_resolution() {
        let cells = walk((0.0, 0.0), (25.0, 5.0), 10.0);
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0)], "Resolution 10 scales the walk");
    }

    #[test]
    fn test_long_walk_terminates_at_end() {
        let cells = walk((-13.7, 42.1), (88.3, -7.9), 3.0);
        assert_eq!(cells.first(), Some(&(-5, 14)), "Start cell");
        assert_eq!(cells.last(), Some(&(29, -3)), "End cell");
        assert_connected(&cells);
    }

    #[test]
    fn test_asymmetric_corner_crossing_visits_both_sides() {
        // Passes exactly through the grid corner (9, -1) at the midpoint
        let cells = walk((16.0, -13.0), (2.0, 11.0), 1.0);
        assert!(cells.contains(&(9, -1)), "Side cell (9,-1) should be visited: {cells:?}");
        assert!(cells.contains(&(8, -2)), "Side cell (8,-2) should be visited: {cells:?}");
        assert!(cells.contains(&(8, -1)), "Diagonal cell (8,-1) should be visited: {cells:?}");
        assert_eq!(cells.last(), Some(&(2, 11)), "End cell");
        assert_connected(&cells);
    }

    #[test]
    fn test_lattice_segments_visit_every_crossed_cell() {
        // Every cell whose interior the segment crosses must be visited
        for (from, to) in [((0.0, 0.0), (3.0, 7.0)), ((-4.0, 5.0), (8.0, -1.0)), ((10.0, 2.0), (1.0, 8.0))] {
            let cells = walk(from, to, 1.0);
            let (a, b) = (Vec2::from(from), Vec2::from(to));
            for cx in -5..=11_i64 {
                for cy in -2..=9_i64 {
                    let center = Vec2::new(cx as f64 + 0.5, cy as f64 + 0.5);
                    let interior = geometry::segment_intersects_box(a, b, center, Vec2::new(0.49, 0.49));
                    if interior {
                        assert!(cells.contains(&(cx, cy)), "{from:?}->{to:?} should visit ({cx},{cy})");
                    }
                }
            }
            assert_connected(&cells);
        }
    }

    #[test]
    fn test_non_finite_endpoint() {
        assert!(
            GridWalk::new(Vec2::new(0.0, 0.0), Vec2::new(f64::NAN, 1.0), 1.0).is_none(),
            "NaN endpoint has no walk"
        );
    }
}
