//! Bulk snapping of every known block against one grid

use glam::Vec2;

use crate::algorithm::snapper::{GridSnapper, Placement};
use crate::io::error::Result;
use crate::spatial::footprint::Footprint;

/// Anything that exposes a live footprint and accepts a snapped position
pub trait Snappable {
    /// Current footprint in world units
    ///
    /// # Errors
    ///
    /// Returns an error if the object's geometry is not a valid footprint
    fn footprint(&self) -> Result<Footprint>;

    /// Move the object's anchor to `position`
    fn set_position(&mut self, position: Vec2);
}

/// Summary of a bulk snap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Blocks processed
    pub snapped: usize,
    /// Blocks whose anchor changed
    pub moved: usize,
    /// Blocks wider or taller than the grid
    pub oversize: usize,
}

impl BatchReport {
    /// Account for one snapped footprint
    pub fn record(&mut self, footprint: &Footprint, placement: &Placement, threshold: f32) {
        self.snapped += 1;
        let shift = (placement.position - footprint.center()).abs().max_element();
        if shift > threshold {
            self.moved += 1;
        }
        if !placement.fits() {
            self.oversize += 1;
        }
    }
}

/// Snap every footprint against the snapper's grid
pub fn snap_all(snapper: &GridSnapper, footprints: &[Footprint]) -> Vec<Placement> {
    footprints
        .iter()
        .map(|footprint| snapper.place(footprint))
        .collect()
}

/// Snap every object in place
///
/// All footprints are read before any object moves, so an invalid object
/// leaves the whole set untouched.
///
/// # Errors
///
/// Returns the first footprint error encountered
pub fn snap_objects<S: Snappable>(snapper: &GridSnapper, objects: &mut [S]) -> Result<BatchReport> {
    let footprints = objects
        .iter()
        .map(Snappable::footprint)
        .collect::<Result<Vec<_>>>()?;

    let threshold = snapper.tolerance() * snapper.grid().cell_size();
    let mut report = BatchReport::default();
    for (object, footprint) in objects.iter_mut().zip(&footprints) {
        let placement = snapper.place(footprint);
        report.record(footprint, &placement, threshold);
        object.set_position(placement.position);
    }

    log::info!(
        "Snapped {} blocks ({} moved, {} oversize)",
        report.snapped,
        report.moved,
        report.oversize
    );
    Ok(report)
}
