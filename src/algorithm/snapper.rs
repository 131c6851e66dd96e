//! Grid snapping of block footprints
//!
//! Snapping runs entirely in cell-unit space (world position divided by the
//! cell size) and converts back to world units only for the final anchor:
//!
//! 1. The footprint size is rounded up to whole cells.
//! 2. The anchor's fractional offset from the nearest grid line gives a
//!    correction. Footprints an odd number of cells wide measure that offset
//!    from cell centers instead of grid lines.
//! 3. The corrected box is floored/ceiled to whole cells.
//! 4. The box is pinned inside the grid, X before Y, the minimum edge first.
//! 5. The anchor keeps its offset from the box's lower corner.

use std::fmt;

use glam::{IVec2, Vec2};

use crate::io::configuration::ALIGNMENT_EPSILON;
use crate::io::error::Result;
use crate::math::rounding::{snap_correction, tolerant_ceil, tolerant_floor};
use crate::spatial::footprint::Footprint;
use crate::spatial::grid::{CellRect, Grid};

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Non-fatal warning: the footprint is wider than the grid on one axis
///
/// The block is still placed by the regular edge clamp and overhangs at
/// least one grid edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OversizeFootprint {
    /// Axis on which the footprint does not fit
    pub axis: Axis,
    /// Footprint size in whole cells
    pub footprint_cells: i32,
    /// Grid size in cells
    pub grid_cells: i32,
}

impl fmt::Display for OversizeFootprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "footprint spans {} cells on {} but the grid only has {}",
            self.footprint_cells, self.axis, self.grid_cells
        )
    }
}

/// Outcome of snapping one footprint
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Corrected anchor position in world units
    pub position: Vec2,
    /// Cells covered by the snapped box after clamping
    pub cells: CellRect,
    /// Axes on which the footprint exceeds the grid
    pub oversize: Vec<OversizeFootprint>,
}

impl Placement {
    /// Check if the footprint fit inside the grid on both axes
    pub fn fits(&self) -> bool {
        self.oversize.is_empty()
    }
}

/// Snaps footprints onto a grid it owns
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapper {
    grid: Grid,
    tolerance: f32,
}

impl GridSnapper {
    /// Create a snapper over `grid` with the default alignment tolerance
    pub const fn new(grid: Grid) -> Self {
        Self {
            grid,
            tolerance: ALIGNMENT_EPSILON,
        }
    }

    /// Override the cell-unit distance under which a box edge counts as aligned
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Grid snapped against
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell-unit distance under which a box edge counts as aligned
    pub const fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Replace the grid parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the new parameters are invalid; the previous grid
    /// stays in effect
    pub fn reconfigure(&mut self, cell_size: f32, min_cell: IVec2, max_cell: IVec2) -> Result<()> {
        self.grid.initialize(cell_size, min_cell, max_cell)
    }

    /// Corrected world position for the footprint's anchor
    pub fn snap(&self, footprint: &Footprint) -> Vec2 {
        self.place(footprint).position
    }

    /// Snap a footprint and report the covered cells and any oversize axes
    pub fn place(&self, footprint: &Footprint) -> Placement {
        let grid = &self.grid;
        let eps = self.tolerance;

        let bounds_min = grid.to_cell_units(footprint.bounds_min());
        let bounds_max = grid.to_cell_units(footprint.bounds_max());
        let center = grid.to_cell_units(footprint.center());

        let size_units = footprint.size() / grid.cell_size();
        let size = IVec2::new(
            tolerant_ceil(size_units.x, eps) as i32,
            tolerant_ceil(size_units.y, eps) as i32,
        );

        // Odd widths center on cells, so measure the anchor from cell centers
        let parity_shift = if size.x % 2 == 1 {
            Vec2::splat(0.5)
        } else {
            Vec2::ZERO
        };
        let anchor = center - parity_shift;
        let correction = Vec2::new(snap_correction(anchor.x), snap_correction(anchor.y));

        let corrected_min = bounds_min + correction;
        let corrected_max = bounds_max + correction;
        let snapped_min = IVec2::new(
            tolerant_floor(corrected_min.x, eps) as i32,
            tolerant_floor(corrected_min.y, eps) as i32,
        );
        let snapped_max = IVec2::new(
            tolerant_ceil(corrected_max.x, eps) as i32,
            tolerant_ceil(corrected_max.y, eps) as i32,
        );

        let (min_x, max_x) = clamp_span(
            snapped_min.x,
            snapped_max.x,
            size.x,
            grid.min_cell().x,
            grid.max_cell().x,
        );
        let (min_y, max_y) = clamp_span(
            snapped_min.y,
            snapped_max.y,
            size.y,
            grid.min_cell().y,
            grid.max_cell().y,
        );
        let cells = CellRect::new(IVec2::new(min_x, min_y), IVec2::new(max_x, max_y));

        let snapped_center = cells.min.as_vec2() + (center - bounds_min);
        let position = grid.to_world(snapped_center);

        let oversize = oversize_axes(size, grid.dimensions());
        for warning in &oversize {
            log::warn!("Oversize footprint at {}: {warning}", footprint.center());
        }
        log::trace!(
            "Snapped anchor {} -> {position} (cells {}..{})",
            footprint.center(),
            cells.min,
            cells.max
        );

        Placement {
            position,
            cells,
            oversize,
        }
    }
}

/// Corrected world position for `footprint` on `grid`
pub fn snap(footprint: &Footprint, grid: &Grid) -> Vec2 {
    GridSnapper::new(*grid).snap(footprint)
}

/// Pin a `[min, max)` span of `size` cells inside `[lower, upper)`
///
/// Touching or crossing the lower bound wins over the upper bound. A span
/// crossing both is pinned to `lower`.
const fn clamp_span(min: i32, max: i32, size: i32, lower: i32, upper: i32) -> (i32, i32) {
    if min <= lower {
        (lower, lower.saturating_add(size))
    } else if max >= upper {
        (upper.saturating_sub(size), upper)
    } else {
        (min, max)
    }
}

fn oversize_axes(size: IVec2, grid_dims: IVec2) -> Vec<OversizeFootprint> {
    [(Axis::X, size.x, grid_dims.x), (Axis::Y, size.y, grid_dims.y)]
        .into_iter()
        .filter(|&(_, footprint_cells, grid_cells)| footprint_cells > grid_cells)
        .map(|(axis, footprint_cells, grid_cells)| OversizeFootprint {
            axis,
            footprint_cells,
            grid_cells,
        })
        .collect()
}
