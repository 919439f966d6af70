//! Sparse cell storage.
//!
//! Maps a cell address to the set of handles registered in that cell. Cells
//! that hold no members take no storage: a cell's set is created on its first
//! insert and dropped as soon as its last member is removed, so a long-running
//! index does not accumulate empty cells it once touched.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Sparse map from cell address to member set.
#[derive(Clone, Debug)]
pub struct CellStore<C, H> {
    cells: FxHashMap<C, FxHashSet<H>>,
}

impl<C, H> Default for CellStore<C, H> {
    fn default() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }
}

impl<C, H> CellStore<C, H>
where
    C: Copy + Eq + Hash,
    H: Copy + Eq + Hash,
{
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Members of `cell`, or `None` if the cell is empty
    #[inline]
    pub fn get(&self, cell: &C) -> Option<&FxHashSet<H>> {
        self.cells.get(cell)
    }

    /// Adds `handle` to `cell`, creating the cell's set if needed.
    ///
    /// Returns `false` if the handle was already a member of that cell.
    pub fn insert(&mut self, cell: C, handle: H) -> bool {
        self.cells.entry(cell).or_default().insert(handle)
    }

    /// Removes `handle` from `cell`, dropping the cell if it becomes empty.
    ///
    /// Returns whether the handle was present.
    pub fn remove(&mut self, cell: &C, handle: &H) -> bool {
        let Some(members) = self.cells.get_mut(cell) else {
            return false;
        };
        let removed = members.remove(handle);
        if members.is_empty() {
            let _ = self.cells.remove(cell);
        }
        removed
    }

    /// Number of non-empty cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell holds a member
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drops every cell
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterates over non-empty cells and their members
    pub fn iter(&self) -> impl Iterator<Item = (&C, &FxHashSet<H>)> + '_ {
        self.cells.iter()
    }
}
