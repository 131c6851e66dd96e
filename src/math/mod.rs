//! Mathematical utilities for the snapping algorithm

/// Fractional wrapping, snap correction and noise-tolerant floor/ceil
pub mod rounding;
