//! Screens and their available work areas.
//!
//! Maximizing and snapping target the *available* area of a screen: its
//! bounds minus whatever the OS reserves for taskbars and docks. The host
//! reports the connected screens; [`available_geometry_at`] picks the one
//! under a point with the usual fallbacks.

use horizon_chrome_core::logging::targets;
use horizon_chrome_core::{Point, Rect};

/// A connected display as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Human-readable name (e.g., "DP-1").
    name: String,
    /// Full bounds in the virtual desktop.
    geometry: Rect,
    /// Work area (excluding taskbar/dock).
    work_area: Rect,
    /// Whether this is the primary screen.
    is_primary: bool,
}

impl Screen {
    /// Create a screen description.
    pub fn new(name: impl Into<String>, geometry: Rect, work_area: Rect, is_primary: bool) -> Self {
        Self {
            name: name.into(),
            geometry,
            work_area,
            is_primary,
        }
    }

    /// Create a screen whose work area is its full bounds.
    pub fn without_reserved_area(name: impl Into<String>, geometry: Rect, is_primary: bool) -> Self {
        Self::new(name, geometry, geometry, is_primary)
    }

    /// Get the name of the screen.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the full screen bounds.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Get the work area (usable area excluding taskbar/dock).
    pub fn work_area(&self) -> Rect {
        self.work_area
    }

    /// Check if this is the primary screen.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

/// Find the screen containing `point`, falling back to the primary screen.
///
/// If no screen is marked primary the first one is used. Returns `None`
/// only when `screens` is empty.
pub fn screen_at(screens: &[Screen], point: Point) -> Option<&Screen> {
    if let Some(screen) = screens.iter().find(|s| s.geometry.contains(point)) {
        return Some(screen);
    }

    tracing::trace!(target: targets::HOST, %point, "no screen under point, using primary");
    screens
        .iter()
        .find(|s| s.is_primary)
        .or_else(|| screens.first())
}

/// Work area of the screen under `point`.
///
/// Degrades to an empty rectangle when there are no screens at all, which
/// turns maximize and snap into no-ops.
pub fn available_geometry_at(screens: &[Screen], point: Point) -> Rect {
    match screen_at(screens, point) {
        Some(screen) => screen.work_area,
        None => {
            tracing::warn!(target: targets::HOST, "host reported no screens");
            Rect::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dual_head() -> Vec<Screen> {
        vec![
            Screen::new(
                "left",
                Rect::new(-1280, 0, 1280, 1024),
                Rect::new(-1280, 0, 1280, 1024),
                false,
            ),
            Screen::new(
                "main",
                Rect::new(0, 0, 1920, 1080),
                Rect::new(0, 0, 1920, 1040),
                true,
            ),
        ]
    }

    #[test]
    fn test_screen_under_point() {
        let screens = dual_head();
        assert_eq!(screen_at(&screens, Point::new(-10, 10)).unwrap().name(), "left");
        assert_eq!(screen_at(&screens, Point::new(10, 10)).unwrap().name(), "main");
    }

    #[test]
    fn test_falls_back_to_primary() {
        let screens = dual_head();
        let screen = screen_at(&screens, Point::new(5000, 5000)).unwrap();
        assert!(screen.is_primary());
        assert_eq!(
            available_geometry_at(&screens, Point::new(5000, 5000)),
            Rect::new(0, 0, 1920, 1040)
        );
    }

    #[test]
    fn test_falls_back_to_first_without_primary() {
        let screens = vec![Screen::without_reserved_area(
            "only",
            Rect::new(0, 0, 800, 600),
            false,
        )];
        assert_eq!(
            available_geometry_at(&screens, Point::new(-1, -1)),
            Rect::new(0, 0, 800, 600)
        );
    }

    #[test]
    fn test_no_screens_is_empty() {
        assert!(available_geometry_at(&[], Point::new(0, 0)).is_empty());
    }
}
