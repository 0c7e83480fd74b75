//! Pointer interaction state.
//!
//! Everything the controller remembers about the gesture in progress lives
//! in one [`InteractionState`] value. It is torn down in a single place,
//! [`InteractionState::reset`], on pointer release.

use horizon_chrome_core::Point;

use super::resize_region::ResizeRegion;

/// Reference points captured when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragAnchor {
    /// Pointer position minus the window's top-left corner, for moves.
    pub move_offset: Point,
    /// Last global pointer position seen by the resize handler.
    pub resize_origin: Point,
}

/// What the pointer is currently doing.
///
/// `moving` and `resizing` are mutually exclusive and both imply `pressed`.
/// A move can only begin after the press was armed by the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pressed: bool,
    move_armed: bool,
    moving: bool,
    resizing: bool,
    region: ResizeRegion,
    anchor: DragAnchor,
}

impl InteractionState {
    /// Idle state: nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the primary button is down.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Check if the press landed on the title bar and may become a move.
    pub fn is_move_armed(&self) -> bool {
        self.move_armed
    }

    /// Check if a title-bar drag is moving the window.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Check if a resize gesture is in progress.
    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// The resize region locked for the current gesture.
    pub fn region(&self) -> ResizeRegion {
        self.region
    }

    /// The anchor points of the current gesture.
    pub fn anchor(&self) -> DragAnchor {
        self.anchor
    }

    /// Record that the primary button went down.
    pub(crate) fn press(&mut self) {
        self.pressed = true;
    }

    /// Lock a resize region for the rest of the gesture.
    ///
    /// Ends any move in progress: resizing takes priority.
    pub(crate) fn lock_resize(&mut self, region: ResizeRegion, origin: Point) {
        debug_assert!(region.is_active());
        self.pressed = true;
        self.moving = false;
        self.resizing = true;
        self.region = region;
        self.anchor.resize_origin = origin;
    }

    /// Arm a title-bar drag with the pointer-to-window offset.
    pub(crate) fn arm_move(&mut self, offset: Point) {
        self.pressed = true;
        self.move_armed = true;
        self.anchor.move_offset = offset;
    }

    /// Replace the pointer-to-window offset of the current drag.
    pub(crate) fn set_move_offset(&mut self, offset: Point) {
        self.anchor.move_offset = offset;
    }

    /// Advance the incremental resize origin.
    pub(crate) fn set_resize_origin(&mut self, origin: Point) {
        self.anchor.resize_origin = origin;
    }

    /// Mark the window as being dragged.
    ///
    /// Returns `false` (and changes nothing) if a resize owns the gesture or
    /// the press was not armed on the title bar.
    pub(crate) fn begin_move(&mut self) -> bool {
        if !self.pressed || !self.move_armed || self.resizing {
            return false;
        }
        self.moving = true;
        true
    }

    /// Return to idle.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
