//! Uniform rectangular grid with world/cell-unit conversion
//!
//! The grid covers the half-open cell range `[min_cell, max_cell)` on both
//! axes. Cell `c` spans the world rectangle `[c * cell_size, (c + 1) * cell_size)`.
//! Parameters are validated on every (re)initialization and never clamped.

use glam::{IVec2, Vec2};

use crate::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_MAX_CELL, DEFAULT_MIN_CELL};
use crate::io::error::{Result, invalid_grid};

/// Axis-aligned box of whole cells
///
/// `min` is inclusive and `max` exclusive, so a box with `min == max` on an
/// axis covers no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Lowest covered cell (inclusive)
    pub min: IVec2,
    /// Upper cell bound (exclusive)
    pub max: IVec2,
}

impl CellRect {
    /// Create a cell box from its corners
    pub const fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Number of cells covered along each axis
    pub fn size(&self) -> IVec2 {
        (self.max - self.min).max(IVec2::ZERO)
    }

    /// Check if a cell lies inside the box
    pub const fn contains(&self, cell: IVec2) -> bool {
        cell.x >= self.min.x && cell.x < self.max.x && cell.y >= self.min.y && cell.y < self.max.y
    }

    /// Check if the box lies entirely inside `other`
    pub const fn is_within(&self, other: &Self) -> bool {
        self.min.x >= other.min.x
            && self.min.y >= other.min.y
            && self.max.x <= other.max.x
            && self.max.y <= other.max.y
    }

    /// Iterate every covered cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + use<> {
        let (min, max) = (self.min, self.max);
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| IVec2::new(x, y)))
    }
}

/// Grid spatial parameters and their derived world bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    cell_size: f32,
    min_cell: IVec2,
    max_cell: IVec2,
    min_world: Vec2,
    max_world: Vec2,
}

impl Default for Grid {
    fn default() -> Self {
        let min_cell = IVec2::from_array(DEFAULT_MIN_CELL);
        let max_cell = IVec2::from_array(DEFAULT_MAX_CELL);
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            min_cell,
            max_cell,
            min_world: min_cell.as_vec2() * DEFAULT_CELL_SIZE,
            max_world: max_cell.as_vec2() * DEFAULT_CELL_SIZE,
        }
    }
}

impl Grid {
    /// Create a grid covering cells `[min_cell, max_cell)`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `cell_size` is not a finite positive number
    /// - `min_cell` is not strictly below `max_cell` on both axes
    /// - The cell span on an axis does not fit in an `i32`
    pub fn new(cell_size: f32, min_cell: IVec2, max_cell: IVec2) -> Result<Self> {
        let mut grid = Self::default();
        grid.initialize(cell_size, min_cell, max_cell)?;
        Ok(grid)
    }

    /// Replace all grid parameters and recompute the world bounds
    ///
    /// On error the grid is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Grid::new`]
    pub fn initialize(&mut self, cell_size: f32, min_cell: IVec2, max_cell: IVec2) -> Result<()> {
        validate(cell_size, min_cell, max_cell)?;

        self.cell_size = cell_size;
        self.min_cell = min_cell;
        self.max_cell = max_cell;
        self.min_world = min_cell.as_vec2() * cell_size;
        self.max_world = max_cell.as_vec2() * cell_size;
        Ok(())
    }

    /// Edge length of one cell in world units
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Lowest cell index (inclusive)
    pub const fn min_cell(&self) -> IVec2 {
        self.min_cell
    }

    /// Upper cell index bound (exclusive)
    pub const fn max_cell(&self) -> IVec2 {
        self.max_cell
    }

    /// World position of the grid's lower corner
    pub const fn min_world(&self) -> Vec2 {
        self.min_world
    }

    /// World position of the grid's upper corner
    pub const fn max_world(&self) -> Vec2 {
        self.max_world
    }

    /// Whole grid as a cell box
    pub const fn bounds(&self) -> CellRect {
        CellRect::new(self.min_cell, self.max_cell)
    }

    /// Number of columns and rows
    pub fn dimensions(&self) -> IVec2 {
        self.max_cell - self.min_cell
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        let dims = self.dimensions();
        dims.x as usize * dims.y as usize
    }

    /// Check if a cell index lies inside the grid
    pub const fn contains_cell(&self, cell: IVec2) -> bool {
        self.bounds().contains(cell)
    }

    /// Convert a world position to cell units
    pub fn to_cell_units(&self, world: Vec2) -> Vec2 {
        world / self.cell_size
    }

    /// Convert a cell-unit position back to world units
    pub fn to_world(&self, cell_units: Vec2) -> Vec2 {
        cell_units * self.cell_size
    }

    /// World position of a cell's center
    pub fn cell_center(&self, cell: IVec2) -> Vec2 {
        cell.as_vec2() * self.cell_size + Vec2::splat(self.cell_size / 2.0)
    }

    /// Cell containing a world position, if it lies inside the grid
    pub fn world_to_cell(&self, world: Vec2) -> Option<IVec2> {
        if !world.is_finite() {
            return None;
        }
        let cell = self.to_cell_units(world).floor().as_ivec2();
        self.contains_cell(cell).then_some(cell)
    }

    /// Floor a world position onto the grid node at or below it
    pub fn snap_world_to_grid_floor(&self, world: Vec2) -> Vec2 {
        self.to_world(self.to_cell_units(world).floor())
    }
}

fn validate(cell_size: f32, min_cell: IVec2, max_cell: IVec2) -> Result<()> {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(invalid_grid(
            "cell_size",
            &cell_size,
            &"must be a finite positive number",
        ));
    }

    let axes = [
        ("min_cell.x", "max_cell.x", min_cell.x, max_cell.x),
        ("min_cell.y", "max_cell.y", min_cell.y, max_cell.y),
    ];
    for (min_name, max_name, min, max) in axes {
        if min >= max {
            return Err(invalid_grid(
                min_name,
                &min,
                &format!("must be below {max_name} ({max})"),
            ));
        }
        if max.checked_sub(min).is_none() {
            return Err(invalid_grid(
                max_name,
                &max,
                &format!("span from {min_name} ({min}) exceeds the cell index range"),
            ));
        }
    }

    Ok(())
}
