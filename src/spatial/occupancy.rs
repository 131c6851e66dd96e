//! Per-cell sets of the objects currently overlapping each grid cell
//!
//! The tracker is driven by explicit enter/exit notifications. Whatever
//! detects overlap (a physics engine, or the placement glue below) calls
//! in; the snapping core never does.

use std::collections::BTreeSet;

use glam::IVec2;
use ndarray::Array2;

use crate::spatial::grid::{CellRect, Grid};

/// Occupancy sets for every cell of a grid, indexed `[row, column]`
#[derive(Debug, Clone)]
pub struct CellOccupancy<Id> {
    origin: IVec2,
    cells: Array2<BTreeSet<Id>>,
}

impl<Id: Ord + Clone> CellOccupancy<Id> {
    /// Create an empty tracker covering every cell of `grid`
    pub fn new(grid: &Grid) -> Self {
        let dims = grid.dimensions();
        Self {
            origin: grid.min_cell(),
            cells: Array2::default((dims.y as usize, dims.x as usize)),
        }
    }

    /// Record that `id` started overlapping `cell`
    ///
    /// Returns false if the cell is outside the grid or already held `id`.
    pub fn on_enter(&mut self, cell: IVec2, id: Id) -> bool {
        self.index(cell)
            .and_then(|index| self.cells.get_mut(index))
            .is_some_and(|objects| objects.insert(id))
    }

    /// Record that `id` stopped overlapping `cell`
    ///
    /// Returns false if the cell is outside the grid or did not hold `id`.
    pub fn on_exit(&mut self, cell: IVec2, id: &Id) -> bool {
        self.index(cell)
            .and_then(|index| self.cells.get_mut(index))
            .is_some_and(|objects| objects.remove(id))
    }

    /// Objects overlapping `cell`, or `None` outside the grid
    pub fn objects_at(&self, cell: IVec2) -> Option<&BTreeSet<Id>> {
        self.index(cell).and_then(|index| self.cells.get(index))
    }

    /// Check if any object overlaps `cell`
    pub fn is_occupied(&self, cell: IVec2) -> bool {
        self.objects_at(cell).is_some_and(|objects| !objects.is_empty())
    }

    /// Number of cells holding at least one object
    pub fn occupied_cell_count(&self) -> usize {
        self.cells.iter().filter(|objects| !objects.is_empty()).count()
    }

    /// Enter `id` into every grid cell covered by `rect`
    pub fn occupy(&mut self, id: &Id, rect: &CellRect) {
        for cell in rect.cells() {
            self.on_enter(cell, id.clone());
        }
    }

    /// Remove `id` from every grid cell covered by `rect`
    pub fn vacate(&mut self, id: &Id, rect: &CellRect) {
        for cell in rect.cells() {
            self.on_exit(cell, id);
        }
    }

    /// Move `id` from its previous cells to `to`
    ///
    /// Only cells that actually change receive a notification.
    pub fn relocate(&mut self, id: &Id, from: Option<&CellRect>, to: &CellRect) {
        if let Some(from) = from {
            for cell in from.cells().filter(|cell| !to.contains(*cell)) {
                self.on_exit(cell, id);
            }
        }
        for cell in to.cells() {
            if from.is_none_or(|from| !from.contains(cell)) {
                self.on_enter(cell, id.clone());
            }
        }
    }

    fn index(&self, cell: IVec2) -> Option<[usize; 2]> {
        let (rows, cols) = self.cells.dim();
        let local_y = cell.y.checked_sub(self.origin.y)?;
        let local_x = cell.x.checked_sub(self.origin.x)?;
        let row = usize::try_from(local_y).ok().filter(|&row| row < rows)?;
        let col = usize::try_from(local_x).ok().filter(|&col| col < cols)?;
        Some([row, col])
    }
}
