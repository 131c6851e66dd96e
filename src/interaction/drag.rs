//! Pointer dragging of a single block with continuous snapping
//!
//! The controller remembers where on the block the pointer grabbed it, so the
//! grabbed point stays under the pointer while the block moves, and snaps the
//! block on every update.

use glam::Vec2;

use crate::algorithm::snapper::GridSnapper;
use crate::interaction::camera::ScreenToWorld;
use crate::io::error::Result;
use crate::spatial::footprint::BlockShape;

/// Drag state for one block
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    shape: BlockShape,
    can_drag: bool,
    anchor_offset: Option<Vec2>,
}

impl DragController {
    /// Create an idle controller for a block of the given shape
    pub const fn new(shape: BlockShape) -> Self {
        Self {
            shape,
            can_drag: true,
            anchor_offset: None,
        }
    }

    /// Lock or unlock the block
    #[must_use]
    pub const fn with_can_drag(mut self, can_drag: bool) -> Self {
        self.can_drag = can_drag;
        self
    }

    /// Shape of the dragged block
    pub const fn shape(&self) -> &BlockShape {
        &self.shape
    }

    /// Check if a drag is in progress
    pub const fn is_dragging(&self) -> bool {
        self.anchor_offset.is_some()
    }

    /// Start dragging with the anchor kept `anchor_offset` away from the pointer
    ///
    /// Returns false, leaving the controller idle, if the block is locked.
    pub fn begin_drag(&mut self, anchor_offset: Vec2) -> bool {
        if self.can_drag {
            self.anchor_offset = Some(anchor_offset);
        }
        self.can_drag
    }

    /// Start dragging a block anchored at `anchor` from the pointer at `pointer_world`
    pub fn grab(&mut self, pointer_world: Vec2, anchor: Vec2) -> bool {
        self.begin_drag(anchor - pointer_world)
    }

    /// Release the block
    pub fn end_drag(&mut self) {
        self.anchor_offset = None;
    }

    /// Snapped anchor position for the pointer at `pointer_world`
    ///
    /// Returns `None` while no drag is active.
    ///
    /// # Errors
    ///
    /// Returns an error if the pointer position is not finite
    pub fn update(&self, pointer_world: Vec2, snapper: &GridSnapper) -> Result<Option<Vec2>> {
        let Some(offset) = self.anchor_offset else {
            return Ok(None);
        };
        let footprint = self.shape.footprint_at(pointer_world + offset)?;
        Ok(Some(snapper.snap(&footprint)))
    }

    /// Same as [`DragController::update`] for a pointer given in screen pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the converted pointer position is not finite
    pub fn update_from_screen(
        &self,
        pointer_screen: Vec2,
        camera: &impl ScreenToWorld,
        snapper: &GridSnapper,
    ) -> Result<Option<Vec2>> {
        self.update(camera.screen_to_world(pointer_screen), snapper)
    }
}
