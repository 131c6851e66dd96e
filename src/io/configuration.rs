//! Snapping constants and runtime configuration defaults

// Grid defaults used when a layout file carries no grid section
/// Default edge length of one grid cell in world units
pub const DEFAULT_CELL_SIZE: f32 = 1.0;
/// Default lower grid bound in cell indices (inclusive)
pub const DEFAULT_MIN_CELL: [i32; 2] = [-10, -10];
/// Default upper grid bound in cell indices (exclusive)
pub const DEFAULT_MAX_CELL: [i32; 2] = [10, 10];

// Float noise from world/cell conversion must not push a box edge into the next cell
/// Distance from an integer below which a cell-unit coordinate counts as aligned
pub const ALIGNMENT_EPSILON: f32 = 1e-4;

/// Default normalized pivot of a block (its anchor sits at the box center)
pub const DEFAULT_PIVOT: [f32; 2] = [0.5, 0.5];

// Output settings
/// Extension of layout files picked up by the CLI
pub const LAYOUT_EXTENSION: &str = "json";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_snapped";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
