//! Pointer-driven block placement

/// Screen to world conversion
pub mod camera;
/// Drag state and per-update snapping
pub mod drag;

pub use camera::{OrthographicCamera, ScreenToWorld};
pub use drag::DragController;
