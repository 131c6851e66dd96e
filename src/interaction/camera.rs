//! Screen to world conversion for pointer input

use glam::Vec2;

/// Maps pointer positions in screen pixels to world positions
pub trait ScreenToWorld {
    /// World position under the screen position `screen`
    fn screen_to_world(&self, screen: Vec2) -> Vec2;
}

/// Axis-aligned orthographic camera
///
/// Screen coordinates are pixels with the origin at the bottom-left corner
/// and y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicCamera {
    /// World position at the center of the viewport
    pub center: Vec2,
    /// Half the visible world height
    pub half_height: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl OrthographicCamera {
    /// Create a camera looking at `center`
    pub const fn new(center: Vec2, half_height: f32, viewport: Vec2) -> Self {
        Self {
            center,
            half_height,
            viewport,
        }
    }

    /// World units per screen pixel, or `None` for an empty viewport
    pub fn units_per_pixel(&self) -> Option<f32> {
        (self.viewport.y > 0.0).then(|| 2.0 * self.half_height / self.viewport.y)
    }
}

impl ScreenToWorld for OrthographicCamera {
    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        match self.units_per_pixel() {
            Some(scale) => self.center + (screen - self.viewport / 2.0) * scale,
            None => self.center,
        }
    }
}
