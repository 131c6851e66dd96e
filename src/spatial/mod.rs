//! Spatial data structures for grid placement
//!
//! This module contains spatial-related functionality including:
//! - Grid parameters and world/cell-unit conversion
//! - Block footprints and shapes
//! - Per-cell occupancy tracking

/// Block footprints and the shapes they are rebuilt from
pub mod footprint;
/// Grid parameters, validation and cell queries
pub mod grid;
/// Per-cell object sets driven by enter/exit notifications
pub mod occupancy;

pub use footprint::{BlockShape, Footprint};
pub use grid::{CellRect, Grid};
pub use occupancy::CellOccupancy;
