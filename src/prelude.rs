//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use cellgrid::prelude::*;
//! ```

pub use crate::{
    Axis, AxisGrid, BoundsModel, BoundsTable, FnBounds, GridConfig, GridError, Plane, PlaneGrid, QueryScratch,
    SpatialGrid, Vec2,
};
