//! Integer geometry in screen pixels.
//!
//! Window chrome works on whole pixels: window rectangles, pointer positions
//! and screen work areas all come from the windowing system as integers, and
//! the maximize/restore round trip must reproduce a rectangle exactly. These
//! types therefore use `i32` throughout, including for sizes, so that resize
//! deltas can be applied before clamping without overflow games.
//!
//! # Edge convention
//!
//! [`Rect::right`] and [`Rect::bottom`] return the last column/row *inside*
//! the rectangle (`x + width - 1`). Snap thresholds and border detection are
//! measured against those edges.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A point in screen or window-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in pixels.
///
/// The default rectangle is empty and is used to mean "unset" wherever a
/// geometry snapshot may not have been taken yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from a top-left corner and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Last column inside the rectangle.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Last row inside the rectangle.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Top-left corner.
    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Size of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if a point is inside this rectangle (right/bottom exclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// The same rectangle moved so its top-left corner is at `origin`.
    #[inline]
    pub fn with_top_left(&self, origin: Point) -> Self {
        Self::from_origin_size(origin, self.size())
    }

    /// The left half of this rectangle.
    pub fn left_half(&self) -> Self {
        Self::new(self.x, self.y, self.width / 2, self.height)
    }

    /// The right half of this rectangle.
    ///
    /// Starts at `x + width / 2` and has the same width as [`left_half`](Self::left_half).
    pub fn right_half(&self) -> Self {
        Self::new(self.x + self.width / 2, self.y, self.width / 2, self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {}x{}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10, 20);
        let b = Point::new(3, 5);
        assert_eq!(a - b, Point::new(7, 15));
        assert_eq!(a + b, Point::new(13, 25));

        let mut c = a;
        c -= b;
        c += Point::new(1, 1);
        assert_eq!(c, Point::new(8, 16));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(0, 0, 1920, 1080);
        assert_eq!(rect.left(), 0);
        assert_eq!(rect.top(), 0);
        assert_eq!(rect.right(), 1919);
        assert_eq!(rect.bottom(), 1079);
        assert_eq!(rect.center(), Point::new(960, 540));
    }

    #[test]
    fn test_rect_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(10, 10, 0, 50).is_empty());
        assert!(Rect::new(10, 10, 50, -1).is_empty());
        assert!(!Rect::new(10, 10, 1, 1).is_empty());
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(100, 100, 200, 100);
        assert!(rect.contains(Point::new(100, 100)));
        assert!(rect.contains(Point::new(299, 199)));
        assert!(!rect.contains(Point::new(300, 150)));
        assert!(!rect.contains(Point::new(150, 200)));
        assert!(!rect.contains(Point::new(99, 150)));
    }

    #[test]
    fn test_rect_halves() {
        let avail = Rect::new(0, 0, 1920, 1080);
        assert_eq!(avail.left_half(), Rect::new(0, 0, 960, 1080));
        assert_eq!(avail.right_half(), Rect::new(960, 0, 960, 1080));

        // Odd widths and offset origins
        let avail = Rect::new(1920, 40, 1281, 1000);
        assert_eq!(avail.left_half(), Rect::new(1920, 40, 640, 1000));
        assert_eq!(avail.right_half(), Rect::new(2560, 40, 640, 1000));
    }

    #[test]
    fn test_rect_with_top_left() {
        let rect = Rect::new(10, 20, 300, 200);
        let moved = rect.with_top_left(Point::new(-50, 5));
        assert_eq!(moved, Rect::new(-50, 5, 300, 200));
        assert_eq!(moved.size(), rect.size());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "{1, 2, 3x4}");
        assert_eq!(Point::new(-1, 7).to_string(), "(-1, 7)");
    }
}
