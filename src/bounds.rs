//! Bounds model: how the index learns an object's geometry.
//!
//! The index never stores geometry. Every add, remove, update and query that
//! needs an object's extent asks the model, so an object that moved must be
//! re-registered with [`SpatialGrid::update`](crate::SpatialGrid::update).

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::space::Space;

/// Supplies center, half-extents and optional sweep for an object handle.
///
/// ```
/// use cellgrid::prelude::*;
///
/// struct Sprite {
///     pos: Vec2,
///     size: Vec2,
/// }
///
/// struct Sprites(Vec<Sprite>);
///
/// impl BoundsModel<usize, Plane> for Sprites {
///     fn center(&self, handle: &usize) -> Vec2 {
///         self.0[*handle].pos
///     }
///     fn half_extents(&self, handle: &usize) -> Vec2 {
///         Vec2::new(self.0[*handle].size.x * 0.5, self.0[*handle].size.y * 0.5)
///     }
/// }
///
/// let sprites = Sprites(vec![Sprite { pos: Vec2::new(3.0, 3.0), size: Vec2::new(2.0, 2.0) }]);
/// let mut grid: PlaneGrid<usize, _> = PlaneGrid::new(4, sprites).unwrap();
/// grid.add(0);
///
/// let mut results = Vec::new();
/// assert_eq!(grid.query_point(Vec2::new(3.5, 2.5), &mut results), 1);
/// ```
pub trait BoundsModel<H, S: Space> {
    /// Center of the object
    fn center(&self, handle: &H) -> S::Point;

    /// Half-extents of the object; the sign of each component is ignored
    fn half_extents(&self, handle: &H) -> S::Point;

    /// Displacement the object will travel this step, if it is moving.
    ///
    /// A moving object occupies the union of its extent at `center` and at
    /// `center + sweep`.
    fn sweep(&self, handle: &H) -> Option<S::Point> {
        let _ = handle;
        None
    }

    /// Center and half-extents with the sweep folded in
    fn effective_bounds(&self, handle: &H) -> (S::Point, S::Point) {
        let center = self.center(handle);
        let half = self.half_extents(handle);
        match self.sweep(handle) {
            Some(sweep) => S::swept(center, half, sweep),
            None => (center, half),
        }
    }
}

impl<H, S: Space, M: BoundsModel<H, S> + ?Sized> BoundsModel<H, S> for &M {
    fn center(&self, handle: &H) -> S::Point {
        (**self).center(handle)
    }

    fn half_extents(&self, handle: &H) -> S::Point {
        (**self).half_extents(handle)
    }

    fn sweep(&self, handle: &H) -> Option<S::Point> {
        (**self).sweep(handle)
    }
}

/// Plain geometry record for one object
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds<P> {
    /// Center point
    pub center: P,
    /// Half-extents
    pub half: P,
    /// Optional sweep vector
    pub sweep: Option<P>,
}

impl<P> Bounds<P> {
    /// Stationary bounds
    pub fn new(center: P, half: P) -> Self {
        Self {
            center,
            half,
            sweep: None,
        }
    }

    /// Set the sweep vector
    #[must_use]
    pub fn with_sweep(mut self, sweep: P) -> Self {
        self.sweep = Some(sweep);
        self
    }
}

/// Bounds model backed by a hash map from handle to [`Bounds`].
///
/// Unknown handles report NaN geometry, which the index treats as covering
/// no cells.
pub struct BoundsTable<H, S: Space> {
    entries: FxHashMap<H, Bounds<S::Point>>,
}

impl<H: fmt::Debug, S: Space> fmt::Debug for BoundsTable<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundsTable")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<H: Clone, S: Space> Clone for BoundsTable<H, S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<H, S: Space> Default for BoundsTable<H, S> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<H: Eq + Hash, S: Space> BoundsTable<H, S> {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) stationary bounds for `handle`
    pub fn set(&mut self, handle: H, center: S::Point, half: S::Point) {
        let _ = self.entries.insert(handle, Bounds::new(center, half));
    }

    /// Sets (or clears) the sweep vector of a known handle.
    ///
    /// Returns `false` if the handle has no bounds.
    pub fn set_sweep(&mut self, handle: &H, sweep: Option<S::Point>) -> bool {
        match self.entries.get_mut(handle) {
            Some(bounds) => {
                bounds.sweep = sweep;
                true
            }
            None => false,
        }
    }

    /// Bounds of `handle`
    pub fn get(&self, handle: &H) -> Option<&Bounds<S::Point>> {
        self.entries.get(handle)
    }

    /// Forgets `handle`, returning its bounds
    pub fn remove(&mut self, handle: &H) -> Option<Bounds<S::Point>> {
        self.entries.remove(handle)
    }

    /// Number of objects with bounds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: Eq + Hash, S: Space> BoundsModel<H, S> for BoundsTable<H, S> {
    fn center(&self, handle: &H) -> S::Point {
        self.entries.get(handle).map_or(S::NAN, |b| b.center)
    }

    fn half_extents(&self, handle: &H) -> S::Point {
        self.entries.get(handle).map_or(S::NAN, |b| b.half)
    }

    fn sweep(&self, handle: &H) -> Option<S::Point> {
        self.entries.get(handle).and_then(|b| b.sweep)
    }
}

/// Bounds model built from two closures.
///
/// ```
/// use cellgrid::prelude::*;
///
/// let positions = [10.0, 20.0, 30.0];
/// let model = FnBounds::new(|h: &usize| positions[*h], |_: &usize| 0.5);
/// let mut grid: AxisGrid<usize, _> = AxisGrid::new(5, model).unwrap();
/// grid.add(1);
///
/// let mut results = Vec::new();
/// assert_eq!(grid.query_point(20.25, &mut results), 1);
/// ```
pub struct FnBounds<C, E> {
    center: C,
    half_extents: E,
}

impl<C, E> FnBounds<C, E> {
    /// Model reporting `center(h)` and `half_extents(h)`
    pub fn new(center: C, half_extents: E) -> Self {
        Self {
            center,
            half_extents,
        }
    }
}

impl<C, E> fmt::Debug for FnBounds<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBounds").finish_non_exhaustive()
    }
}

impl<H, S, C, E> BoundsModel<H, S> for FnBounds<C, E>
where
    S: Space,
    C: Fn(&H) -> S::Point,
    E: Fn(&H) -> S::Point,
{
    fn center(&self, handle: &H) -> S::Point {
        (self.center)(handle)
    }

    fn half_extents(&self, handle: &H) -> S::Point {
        (self.half_extents)(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;
    use crate::space::Plane;

    #[test]
    fn test_table_reports_bounds() {
        let mut table: BoundsTable<u32, Plane> = BoundsTable::new();
        table.set(1, Vec2::new(2.0, 3.0), Vec2::new(1.0, 0.5));
        assert_eq!(table.center(&1), Vec2::new(2.0, 3.0), "Center should be stored");
        assert_eq!(table.half_extents(&1), Vec2::new(1.0, 0.5), "Half-extents should be stored");
        assert!(table.sweep(&1).is_none(), "No sweep by default");
    }

    #[test]
    fn test_unknown_handle_is_nan() {
        let table: BoundsTable<u32, Plane> = BoundsTable::new();
        assert!(!table.center(&9).is_finite(), "Unknown handle should report NaN center");
    }

    #[test]
    fn test_effective_bounds_include_sweep() {
        let mut table: BoundsTable<u32, Plane> = BoundsTable::new();
        table.set(1, Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(table.set_sweep(&1, Some(Vec2::new(10.0, 0.0))), "Known handle accepts sweep");
        assert!(!table.set_sweep(&2, Some(Vec2::new(1.0, 0.0))), "Unknown handle rejects sweep");

        let expected = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)).with_sweep(Vec2::new(10.0, 0.0));
        assert_eq!(table.get(&1), Some(&expected), "Stored record carries the sweep");

        let (center, half) = table.effective_bounds(&1);
        assert_eq!(center, Vec2::new(5.0, 0.0), "Swept center should be midway");
        assert_eq!(half, Vec2::new(6.0, 1.0), "Swept extent should cover both ends");
    }
}
