//! Grid snapping placement for draggable blocks in tile-based building games
//!
//! A uniform grid partitions world space into square cells. Blocks of any
//! axis-aligned size are snapped onto it so they stay inside the grid and
//! centered on the cells they cover, both while being dragged and in bulk.

#![forbid(unsafe_code)]

/// Footprint snapping and bulk re-layout
pub mod algorithm;
/// Pointer dragging and screen to world conversion
pub mod interaction;
/// Input/output operations and error handling
pub mod io;
/// Rounding utilities for cell-unit arithmetic
pub mod math;
/// Grid, footprints and cell occupancy
pub mod spatial;

pub use algorithm::{GridSnapper, Placement};
pub use io::error::{Result, SnapError};
pub use spatial::{BlockShape, CellRect, Footprint, Grid};
