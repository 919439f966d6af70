//! # cellgrid - Uniform-Grid Spatial Index
//!
//! A Rust library providing a dynamic, uniform-grid spatial index for
//! broad-phase queries on axis-aligned bounding extents in 2D and 1D.
//!
//! ## Features
//!
//! - **Incremental updates**: add, remove and re-register objects at any time
//! - **Point, box, object and line queries**, each reporting a match once no
//!   matter how many cells it spans
//! - **Line queries walk only the cells a segment crosses**
//! - **Bring your own objects**: geometry is read through a [`BoundsModel`],
//!   the index stores only handles
//!
//! ## Quick Start
//!
//! ```rust
//! use cellgrid::prelude::*;
//!
//! // Geometry lives in a bounds model; the grid stores handles only
//! let mut model: BoundsTable<u32, Plane> = BoundsTable::new();
//! model.set(0, Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0));    // Box 0: (0,0)-(2,2)
//! model.set(1, Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0));    // Box 1: (1,1)-(3,3)
//! model.set(2, Vec2::new(5.5, 5.5), Vec2::new(0.5, 0.5));    // Box 2: (5,5)-(6,6)
//!
//! // Cells of edge 2 world units
//! let mut grid = PlaneGrid::new(2, model).unwrap();
//! for handle in 0..3 {
//!     grid.add(handle);
//! }
//!
//! // Query for boxes intersecting a region
//! let mut results = Vec::new();
//! grid.query_rect(1.2, 1.2, 2.8, 2.8, &mut results);
//! results.sort();
//! assert_eq!(results, vec![0, 1]);
//!
//! // Move box 2 and tell the grid about it
//! grid.model_mut().set(2, Vec2::new(20.0, 20.0), Vec2::new(0.5, 0.5));
//! grid.update(2);
//! assert_eq!(grid.query_point(Vec2::new(5.5, 5.5), &mut results), 0);
//! assert_eq!(grid.query_point(Vec2::new(20.0, 20.0), &mut results), 1);
//! ```
//!
//! ## How It Works
//!
//! An object with center `c` and half-extent `h` on an axis is registered in
//! cells `floor((c - |h|) / resolution)` through `ceil((c + |h|) / resolution)`.
//! Cells are stored sparsely in a hash map, and a cell is dropped as soon as
//! it empties. The cells an object was registered in are recorded, so removal
//! is exact even after the object has moved.
//!
//! Queries collect candidates from the cells their shape covers and test each
//! candidate's bounds exactly. Point containment is closed, box overlap is
//! strict (shared edges do not overlap), and segment tests are closed.
//!
//! ## Threads
//!
//! All operations are synchronous. Queries take `&self`; each one needs its
//! own [`QueryScratch`], which the plain query forms allocate and the `*_with`
//! forms borrow from the caller.

pub mod accumulator;
pub mod bounds;
pub mod cell_store;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod prelude;
mod queries;
pub mod space;
pub mod traversal;

#[cfg(test)]
mod integration_test;

pub use accumulator::QueryScratch;
pub use bounds::{Bounds, BoundsModel, BoundsTable, FnBounds};
pub use cell_store::CellStore;
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use geometry::Vec2;
pub use grid::{AxisGrid, PlaneGrid, SpatialGrid};
pub use space::{Axis, AxisRange, CellRect, Plane, Space};
pub use traversal::GridWalk;
