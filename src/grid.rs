//! Uniform-grid spatial index.
//!
//! Space is cut into square (or, in 1D, segment) cells of edge `resolution`.
//! Every indexed object is registered in each cell its bounding extent
//! covers, so a query only inspects the cells its own shape covers.
//!
//! The grid does not observe objects. After an object moves or resizes the
//! caller must call [`SpatialGrid::update`]; until then queries see it where
//! it was when last added.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::bounds::BoundsModel;
use crate::cell_store::CellStore;
use crate::config::GridConfig;
use crate::error::Result;
use crate::space::{Axis, Plane, Space};

/// Uniform-grid spatial index over handles `H`, with geometry supplied by a
/// [`BoundsModel`] `M`, in the space `S`.
///
/// # Examples
/// ```
/// use cellgrid::prelude::*;
///
/// let mut model: BoundsTable<&str, Plane> = BoundsTable::new();
/// model.set("crate", Vec2::new(5.0, 5.0), Vec2::new(1.0, 1.0));
/// model.set("barrel", Vec2::new(-3.0, 2.0), Vec2::new(0.5, 0.5));
///
/// let mut grid = PlaneGrid::new(4, model).unwrap();
/// grid.add("crate");
/// grid.add("barrel");
/// assert_eq!(grid.len(), 2);
///
/// let mut results = Vec::new();
/// grid.query_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), &mut results);
/// assert_eq!(results, vec!["crate"]);
/// ```
#[derive(Clone, Debug)]
pub struct SpatialGrid<H, M, S: Space = Plane> {
    config: GridConfig,
    /// `config.resolution` as a float, used by every cell conversion
    pub(crate) resolution: f64,
    pub(crate) model: M,
    pub(crate) cells: CellStore<S::Cell, H>,
    /// Every member, with the cells it was registered in when last added.
    /// `None` marks a member whose geometry covered no cells.
    members: FxHashMap<H, Option<S::CellRange>>,
}

/// Cell count above which registering a single object logs a warning
pub const LARGE_OBJECT_CELLS: u64 = 1 << 16;

/// 2D grid index
pub type PlaneGrid<H, M> = SpatialGrid<H, M, Plane>;

/// 1D grid index
pub type AxisGrid<H, M> = SpatialGrid<H, M, Axis>;

impl<H, M, S> SpatialGrid<H, M, S>
where
    H: Copy + Eq + Hash + Debug,
    M: BoundsModel<H, S>,
    S: Space,
{
    /// Creates an empty grid with cells of edge `resolution`.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`](crate::GridError::InvalidArgument)
    /// if `resolution <= 0`.
    pub fn new(resolution: i32, model: M) -> Result<Self> {
        Self::with_config(GridConfig::new(resolution), model)
    }

    /// Creates an empty grid from a configuration.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`](crate::GridError::InvalidArgument)
    /// if the configuration does not validate.
    pub fn with_config(config: GridConfig, model: M) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            resolution = config.resolution,
            capacity = config.capacity,
            "Creating spatial grid"
        );
        Ok(Self {
            config,
            resolution: f64::from(config.resolution),
            model,
            cells: CellStore::new(),
            members: FxHashMap::with_capacity_and_hasher(config.capacity, Default::default()),
        })
    }

    /// Adds an object, registering it in every cell its extent covers.
    ///
    /// Returns `false` (and does nothing) if the object is already a member.
    /// An object whose geometry is not finite becomes a member that no query
    /// returns.
    ///
    /// Time and memory grow with the number of covered cells, so an object
    /// much larger than the resolution is expensive to add, remove and
    /// update. Objects covering more than [`LARGE_OBJECT_CELLS`] cells log a
    /// warning.
    pub fn add(&mut self, handle: H) -> bool {
        if self.members.contains_key(&handle) {
            return false;
        }

        let (center, half) = self.model.effective_bounds(&handle);
        let range = S::covered_cells(center, half, self.resolution);
        match range {
            Some(range) => {
                let count = S::cell_count(range);
                if count > LARGE_OBJECT_CELLS {
                    tracing::warn!(
                        handle = ?handle,
                        cells = count,
                        resolution = self.config.resolution,
                        "Object covers a very large number of cells"
                    );
                }
                for cell in range {
                    let _ = self.cells.insert(cell, handle);
                }
                tracing::trace!(handle = ?handle, cells = count, "Added object");
            }
            None => {
                tracing::warn!(
                    handle = ?handle,
                    center = ?center,
                    half_extents = ?half,
                    "Object has non-finite bounds; it will not be returned by queries"
                );
            }
        }

        let _ = self.members.insert(handle, range);
        true
    }

    /// Removes an object from every cell it was registered in.
    ///
    /// Uses the cells recorded when the object was added, so it is correct
    /// even if the object has moved since. Returns `false` if the object was
    /// not a member.
    pub fn remove(&mut self, handle: H) -> bool {
        let Some(range) = self.members.remove(&handle) else {
            return false;
        };
        if let Some(range) = range {
            for cell in range {
                let _ = self.cells.remove(&cell, &handle);
            }
        }
        tracing::trace!(handle = ?handle, "Removed object");
        true
    }

    /// Re-registers a member after its geometry changed.
    ///
    /// Equivalent to [`remove`](Self::remove) then [`add`](Self::add).
    /// Returns `false` (and does nothing) if the object is not a member.
    pub fn update(&mut self, handle: H) -> bool {
        if !self.remove(handle) {
            return false;
        }
        let _ = self.add(handle);
        true
    }

    /// Whether the object is a member
    pub fn contains(&self, handle: H) -> bool {
        self.members.contains_key(&handle)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the grid has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Removes every member. The grid stays usable with the same resolution and model.
    pub fn clear(&mut self) {
        tracing::debug!(
            members = self.members.len(),
            cells = self.cells.len(),
            "Clearing spatial grid"
        );
        self.members.clear();
        self.cells.clear();
    }

    /// Cells the object was registered in, or `None` if it is not a member
    /// or covers no cells
    pub fn cells_of(&self, handle: H) -> Option<S::CellRange> {
        self.members.get(&handle).copied().flatten()
    }

    /// Iterates over all members in unspecified order
    pub fn handles(&self) -> impl Iterator<Item = H> + '_ {
        self.members.keys().copied()
    }

    /// Number of cells holding at least one member
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Members registered in `cell`
    pub fn members_of_cell(&self, cell: S::Cell) -> impl Iterator<Item = H> + '_ {
        self.cells.get(&cell).into_iter().flatten().copied()
    }

    /// Cell edge length
    pub fn resolution(&self) -> i32 {
        self.config.resolution
    }

    /// Configuration the grid was built with
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The bounds model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the bounds model.
    ///
    /// Changing an object's geometry here does not move it in the grid; call
    /// [`update`](Self::update) afterwards.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consumes the grid, returning the bounds model
    pub fn into_model(self) -> M {
        self.model
    }
}
