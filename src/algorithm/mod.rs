/// Bulk snapping and batch reporting
pub mod batch;
/// Footprint-to-grid snapping
pub mod snapper;

pub use batch::{BatchReport, Snappable, snap_all, snap_objects};
pub use snapper::{Axis, GridSnapper, OversizeFootprint, Placement, snap};
