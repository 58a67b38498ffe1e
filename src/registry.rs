//! Grid registry: the id → grid map owned by the UI state.
//!
//! Grids come into existence lazily, the first time an event names
//! their id. Closing a grid removes it outright; a later event for the
//! same id starts over with a fresh zero-sized grid.

use std::collections::HashMap;

use crate::grid::{Grid, GridId};

/// The outer screen grid. It exists for the lifetime of the session and
/// every docked window is positioned relative to it.
pub const PRIMARY_GRID: GridId = 1;

#[derive(Debug, Default)]
pub struct GridRegistry {
    grids: HashMap<GridId, Grid>,
}

impl GridRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a grid, creating a zero-sized one if the id is new.
    /// The flag reports whether this call created it, so the caller can
    /// surface the creation.
    pub fn get_or_create(&mut self, id: GridId) -> (&mut Grid, bool) {
        let mut created = false;
        let grid = self.grids.entry(id).or_insert_with(|| {
            created = true;
            Grid::new(id)
        });
        (grid, created)
    }

    pub fn get(&self, id: GridId) -> Option<&Grid> {
        self.grids.get(&id)
    }

    pub fn get_mut(&mut self, id: GridId) -> Option<&mut Grid> {
        self.grids.get_mut(&id)
    }

    pub fn contains(&self, id: GridId) -> bool {
        self.grids.contains_key(&id)
    }

    /// Removes a grid. Returns it so the caller can inspect the last
    /// state, or `None` if the id was never created.
    pub fn close(&mut self, id: GridId) -> Option<Grid> {
        self.grids.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// All live grids, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Grid> {
        self.grids.values()
    }
}
