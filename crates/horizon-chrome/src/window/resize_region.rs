//! Resize-region classification for frameless windows.
//!
//! A frameless window has no native border to grab, so the application
//! treats a thin band along each window edge as an invisible resize handle.
//! [`ResizeRegion::classify`] maps a pointer position in window-local
//! coordinates to the edge or corner under it.
//!
//! # Classification Order
//!
//! 1. Maximized windows are never resizable: always [`ResizeRegion::None`]
//! 2. Corners (top-left, top-right, bottom-left, bottom-right)
//! 3. Edges (left, right, top, bottom)
//! 4. Otherwise [`ResizeRegion::None`]
//!
//! ```
//! use horizon_chrome::window::ResizeRegion;
//! use horizon_chrome_core::{Point, Size};
//!
//! let size = Size::new(800, 600);
//! assert_eq!(
//!     ResizeRegion::classify(Point::new(3, 3), size, 8, false),
//!     ResizeRegion::TopLeft
//! );
//! assert_eq!(
//!     ResizeRegion::classify(Point::new(3, 3), size, 8, true),
//!     ResizeRegion::None
//! );
//! ```

use horizon_chrome_core::{Point, Size};
use winit::window::ResizeDirection;

/// Which edge(s) of the window a resize gesture moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeRegion {
    /// Not on a resize border.
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeRegion {
    /// All regions that start a resize, corners first.
    pub const ACTIVE: [ResizeRegion; 8] = [
        ResizeRegion::TopLeft,
        ResizeRegion::TopRight,
        ResizeRegion::BottomLeft,
        ResizeRegion::BottomRight,
        ResizeRegion::Left,
        ResizeRegion::Right,
        ResizeRegion::Top,
        ResizeRegion::Bottom,
    ];

    /// Classify a window-local pointer position.
    ///
    /// A coordinate within `border_width` of an edge (inclusive) counts as
    /// on that edge. When `maximized` is set the result is always
    /// [`ResizeRegion::None`].
    pub fn classify(pos: Point, window_size: Size, border_width: i32, maximized: bool) -> Self {
        if maximized {
            return ResizeRegion::None;
        }

        let left = pos.x <= border_width;
        let right = pos.x >= window_size.width - border_width;
        let top = pos.y <= border_width;
        let bottom = pos.y >= window_size.height - border_width;

        // Corners override edges
        if top && left {
            return ResizeRegion::TopLeft;
        }
        if top && right {
            return ResizeRegion::TopRight;
        }
        if bottom && left {
            return ResizeRegion::BottomLeft;
        }
        if bottom && right {
            return ResizeRegion::BottomRight;
        }

        if left {
            return ResizeRegion::Left;
        }
        if right {
            return ResizeRegion::Right;
        }
        if top {
            return ResizeRegion::Top;
        }
        if bottom {
            return ResizeRegion::Bottom;
        }

        ResizeRegion::None
    }

    /// Check if this region starts a resize.
    pub fn is_active(&self) -> bool {
        !matches!(self, ResizeRegion::None)
    }

    /// Whether dragging this region moves the window's left edge.
    pub fn moves_left_edge(&self) -> bool {
        matches!(
            self,
            ResizeRegion::Left | ResizeRegion::TopLeft | ResizeRegion::BottomLeft
        )
    }

    /// Whether dragging this region moves the window's right edge.
    pub fn moves_right_edge(&self) -> bool {
        matches!(
            self,
            ResizeRegion::Right | ResizeRegion::TopRight | ResizeRegion::BottomRight
        )
    }

    /// Whether dragging this region moves the window's top edge.
    pub fn moves_top_edge(&self) -> bool {
        matches!(
            self,
            ResizeRegion::Top | ResizeRegion::TopLeft | ResizeRegion::TopRight
        )
    }

    /// Whether dragging this region moves the window's bottom edge.
    pub fn moves_bottom_edge(&self) -> bool {
        matches!(
            self,
            ResizeRegion::Bottom | ResizeRegion::BottomLeft | ResizeRegion::BottomRight
        )
    }

    /// The equivalent winit resize direction, for hosts that prefer to hand
    /// the gesture to the platform via `Window::drag_resize_window`.
    pub fn to_resize_direction(self) -> Option<ResizeDirection> {
        match self {
            ResizeRegion::None => None,
            ResizeRegion::Left => Some(ResizeDirection::West),
            ResizeRegion::Right => Some(ResizeDirection::East),
            ResizeRegion::Top => Some(ResizeDirection::North),
            ResizeRegion::Bottom => Some(ResizeDirection::South),
            ResizeRegion::TopLeft => Some(ResizeDirection::NorthWest),
            ResizeRegion::TopRight => Some(ResizeDirection::NorthEast),
            ResizeRegion::BottomLeft => Some(ResizeDirection::SouthWest),
            ResizeRegion::BottomRight => Some(ResizeDirection::SouthEast),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(800, 600);

    fn classify(x: i32, y: i32) -> ResizeRegion {
        ResizeRegion::classify(Point::new(x, y), SIZE, 8, false)
    }

    #[test]
    fn test_client_area() {
        assert_eq!(classify(400, 300), ResizeRegion::None);
        assert_eq!(classify(9, 9), ResizeRegion::None);
        assert_eq!(classify(791, 591), ResizeRegion::None);
    }

    #[test]
    fn test_edges() {
        assert_eq!(classify(400, 3), ResizeRegion::Top);
        assert_eq!(classify(400, 597), ResizeRegion::Bottom);
        assert_eq!(classify(3, 300), ResizeRegion::Left);
        assert_eq!(classify(797, 300), ResizeRegion::Right);
    }

    #[test]
    fn test_border_is_inclusive() {
        assert_eq!(classify(8, 300), ResizeRegion::Left);
        assert_eq!(classify(792, 300), ResizeRegion::Right);
        assert_eq!(classify(400, 8), ResizeRegion::Top);
        assert_eq!(classify(400, 592), ResizeRegion::Bottom);
    }

    #[test]
    fn test_corners() {
        assert_eq!(classify(3, 3), ResizeRegion::TopLeft);
        assert_eq!(classify(797, 3), ResizeRegion::TopRight);
        assert_eq!(classify(3, 597), ResizeRegion::BottomLeft);
        assert_eq!(classify(797, 597), ResizeRegion::BottomRight);
    }

    #[test]
    fn test_maximized_never_resizes() {
        for (x, y) in [(3, 3), (400, 3), (797, 597), (3, 300), (400, 300)] {
            assert_eq!(
                ResizeRegion::classify(Point::new(x, y), SIZE, 8, true),
                ResizeRegion::None
            );
        }
    }

    #[test]
    fn test_symmetry() {
        // Mirrored positions classify to mirrored regions
        for offset in 0..=8 {
            assert_eq!(classify(offset, 300), ResizeRegion::Left);
            assert_eq!(classify(SIZE.width - offset, 300), ResizeRegion::Right);
            assert_eq!(classify(400, offset), ResizeRegion::Top);
            assert_eq!(classify(400, SIZE.height - offset), ResizeRegion::Bottom);
        }
    }

    #[test]
    fn test_edge_flags() {
        assert!(ResizeRegion::TopLeft.moves_left_edge());
        assert!(ResizeRegion::TopLeft.moves_top_edge());
        assert!(!ResizeRegion::TopLeft.moves_right_edge());
        assert!(ResizeRegion::BottomRight.moves_right_edge());
        assert!(ResizeRegion::BottomRight.moves_bottom_edge());
        assert!(!ResizeRegion::None.is_active());
        assert!(ResizeRegion::ACTIVE.iter().all(|r| r.is_active()));
    }

    #[test]
    fn test_resize_direction() {
        assert_eq!(ResizeRegion::None.to_resize_direction(), None);
        assert_eq!(
            ResizeRegion::TopRight.to_resize_direction(),
            Some(ResizeDirection::NorthEast)
        );
        assert_eq!(
            ResizeRegion::Left.to_resize_direction(),
            Some(ResizeDirection::West)
        );
    }
}
