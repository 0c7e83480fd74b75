//! Screen-edge snapping.
//!
//! Dropping a dragged window near an edge of the work area resizes it:
//!
//! | Pointer near | Result |
//! |---|---|
//! | top edge | maximize |
//! | left edge | left half of the work area |
//! | right edge | right half of the work area |
//!
//! The checks run in that order and the first match wins, so a drop in the
//! top-left corner maximizes.

use std::fmt;

use horizon_chrome_core::{Point, Rect};

/// The geometry change a snap produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapAction {
    /// Enter the maximized state.
    Maximize,
    /// Fill the left half of the work area.
    LeftHalf(Rect),
    /// Fill the right half of the work area.
    RightHalf(Rect),
}

impl SnapAction {
    /// The rectangle the window will occupy, for the half-screen snaps.
    pub fn target(&self) -> Option<Rect> {
        match self {
            SnapAction::Maximize => None,
            SnapAction::LeftHalf(rect) | SnapAction::RightHalf(rect) => Some(*rect),
        }
    }
}

impl fmt::Display for SnapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapAction::Maximize => write!(f, "maximize"),
            SnapAction::LeftHalf(rect) => write!(f, "left half {rect}"),
            SnapAction::RightHalf(rect) => write!(f, "right half {rect}"),
        }
    }
}

/// Decide which snap, if any, a pointer position triggers.
///
/// `avail` is the work area of the screen under the pointer. An empty work
/// area never snaps.
pub fn evaluate_snap(pointer: Point, avail: Rect, threshold: i32) -> Option<SnapAction> {
    if avail.is_empty() {
        return None;
    }

    if pointer.y <= avail.top() + threshold {
        Some(SnapAction::Maximize)
    } else if pointer.x <= avail.left() + threshold {
        Some(SnapAction::LeftHalf(avail.left_half()))
    } else if pointer.x >= avail.right() - threshold {
        Some(SnapAction::RightHalf(avail.right_half()))
    } else {
        None
    }
}
