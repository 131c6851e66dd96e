//! World-space footprints of blocks and the shapes they are rebuilt from

use glam::Vec2;

use crate::io::configuration::DEFAULT_PIVOT;
use crate::io::error::{Result, invalid_footprint};

/// Axis-aligned bounding box of a block plus its anchor, in world units
///
/// The anchor is the block's reference position (its transform origin). It
/// usually lies inside the box but nothing requires it to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    bounds_min: Vec2,
    bounds_max: Vec2,
    center: Vec2,
}

impl Footprint {
    /// Build a footprint from its box corners and anchor
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any coordinate is NaN or infinite
    /// - `bounds_min` lies above `bounds_max` on either axis
    pub fn from_bounds(bounds_min: Vec2, bounds_max: Vec2, center: Vec2) -> Result<Self> {
        if !(bounds_min.is_finite() && bounds_max.is_finite() && center.is_finite()) {
            return Err(invalid_footprint(&format!(
                "non-finite coordinates (min {bounds_min}, max {bounds_max}, anchor {center})"
            )));
        }
        if bounds_min.cmpgt(bounds_max).any() {
            return Err(invalid_footprint(&format!(
                "bounds minimum {bounds_min} exceeds maximum {bounds_max}"
            )));
        }

        Ok(Self {
            bounds_min,
            bounds_max,
            center,
        })
    }

    /// Build a footprint from an engine-style bounds center and half-extents
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is not finite or an extent is negative
    pub fn from_extents(bounds_center: Vec2, extents: Vec2, anchor: Vec2) -> Result<Self> {
        if extents.cmplt(Vec2::ZERO).any() {
            return Err(invalid_footprint(&format!(
                "negative extents {extents}"
            )));
        }
        Self::from_bounds(bounds_center - extents, bounds_center + extents, anchor)
    }

    /// Lower world corner of the box
    pub const fn bounds_min(&self) -> Vec2 {
        self.bounds_min
    }

    /// Upper world corner of the box
    pub const fn bounds_max(&self) -> Vec2 {
        self.bounds_max
    }

    /// Anchor position in world units
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// Box size in world units
    pub fn size(&self) -> Vec2 {
        self.bounds_max - self.bounds_min
    }

    /// Box width in world units
    pub fn width(&self) -> f32 {
        self.size().x
    }

    /// Box height in world units
    pub fn height(&self) -> f32 {
        self.size().y
    }

    /// Same footprint moved so its anchor sits at `anchor`
    #[must_use]
    pub fn moved_to(&self, anchor: Vec2) -> Self {
        let delta = anchor - self.center;
        Self {
            bounds_min: self.bounds_min + delta,
            bounds_max: self.bounds_max + delta,
            center: anchor,
        }
    }
}

/// Size and pivot of a block, independent of where it currently sits
///
/// The pivot is normalized: `(0, 0)` puts the anchor on the lower-left
/// corner, `(0.5, 0.5)` on the box center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockShape {
    size: Vec2,
    pivot: Vec2,
}

impl BlockShape {
    /// Create a shape from a world size and normalized pivot
    ///
    /// # Errors
    ///
    /// Returns an error if the size is negative or any value is not finite
    pub fn new(size: Vec2, pivot: Vec2) -> Result<Self> {
        if !(size.is_finite() && pivot.is_finite()) {
            return Err(invalid_footprint(&format!(
                "non-finite shape (size {size}, pivot {pivot})"
            )));
        }
        if size.cmplt(Vec2::ZERO).any() {
            return Err(invalid_footprint(&format!("negative size {size}")));
        }
        Ok(Self { size, pivot })
    }

    /// Create a shape anchored at its center
    ///
    /// # Errors
    ///
    /// Returns an error if the size is negative or not finite
    pub fn centered(size: Vec2) -> Result<Self> {
        Self::new(size, Vec2::from_array(DEFAULT_PIVOT))
    }

    /// World size of the block
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Normalized anchor position inside the box
    pub const fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Footprint of this shape with its anchor at `anchor`
    ///
    /// # Errors
    ///
    /// Returns an error if `anchor` is not finite
    pub fn footprint_at(&self, anchor: Vec2) -> Result<Footprint> {
        let bounds_min = anchor - self.size * self.pivot;
        Footprint::from_bounds(bounds_min, bounds_min + self.size, anchor)
    }
}
