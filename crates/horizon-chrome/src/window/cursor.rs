//! Cursor feedback for resize borders.
//!
//! While no button is held, hovering a resize border shows the matching
//! resize cursor. The table is fixed: vertical for top/bottom, horizontal for
//! left/right, and the two diagonals for the corners.

use cursor_icon::CursorIcon;

use super::resize_region::ResizeRegion;

/// The cursor shapes window chrome asks the host to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    /// The host's default cursor (cursor unset).
    #[default]
    Default,
    /// North-south resize.
    ResizeVertical,
    /// East-west resize.
    ResizeHorizontal,
    /// Northwest-southeast diagonal resize.
    ResizeNwSe,
    /// Northeast-southwest diagonal resize.
    ResizeNeSw,
}

impl CursorShape {
    /// The cursor for hovering or dragging the given region.
    pub fn for_region(region: ResizeRegion) -> Self {
        match region {
            ResizeRegion::Top | ResizeRegion::Bottom => CursorShape::ResizeVertical,
            ResizeRegion::Left | ResizeRegion::Right => CursorShape::ResizeHorizontal,
            ResizeRegion::TopLeft | ResizeRegion::BottomRight => CursorShape::ResizeNwSe,
            ResizeRegion::TopRight | ResizeRegion::BottomLeft => CursorShape::ResizeNeSw,
            ResizeRegion::None => CursorShape::Default,
        }
    }

    /// Check if this shape means "no explicit cursor".
    pub fn is_default(&self) -> bool {
        matches!(self, CursorShape::Default)
    }

    /// Convert to the cross-platform cursor icon.
    pub fn to_cursor_icon(self) -> CursorIcon {
        match self {
            CursorShape::Default => CursorIcon::Default,
            CursorShape::ResizeVertical => CursorIcon::NsResize,
            CursorShape::ResizeHorizontal => CursorIcon::EwResize,
            CursorShape::ResizeNwSe => CursorIcon::NwseResize,
            CursorShape::ResizeNeSw => CursorIcon::NeswResize,
        }
    }
}

impl From<ResizeRegion> for CursorShape {
    fn from(region: ResizeRegion) -> Self {
        Self::for_region(region)
    }
}
