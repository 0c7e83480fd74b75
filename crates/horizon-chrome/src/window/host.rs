//! The seam between the chrome controller and a windowing toolkit.
//!
//! The controller never talks to a toolkit directly. Everything it needs
//! (window geometry, screens, the cursor, and the two chrome buttons) goes
//! through [`ChromeHost`], so the same state machine runs against winit (see
//! [`WinitChromeHost`](super::WinitChromeHost)) or a test double.

use horizon_chrome_core::{Rect, Size};

use super::chrome_config::FrameCosmetics;
use super::cursor::CursorShape;
use super::screen::Screen;

/// Which of the two mutually exclusive chrome buttons is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeButtons {
    /// Normal window: the maximize button is shown, restore is hidden.
    Maximize,
    /// Maximized window: the restore button is shown, maximize is hidden.
    Restore,
}

impl ChromeButtons {
    /// The button set matching the maximized flag.
    pub fn for_maximized(maximized: bool) -> Self {
        if maximized {
            ChromeButtons::Restore
        } else {
            ChromeButtons::Maximize
        }
    }

    /// Check if the maximize button is visible.
    pub fn shows_maximize(&self) -> bool {
        matches!(self, ChromeButtons::Maximize)
    }

    /// Check if the restore button is visible.
    pub fn shows_restore(&self) -> bool {
        matches!(self, ChromeButtons::Restore)
    }
}

/// Decorations the application should draw around the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStyle {
    /// Drop-shadow blur radius in pixels.
    pub shadow_radius: i32,
    /// Corner rounding radius in pixels.
    pub corner_radius: f32,
}

impl FrameStyle {
    /// No shadow, square corners.
    pub const FLAT: Self = Self {
        shadow_radius: 0,
        corner_radius: 0.0,
    };

    /// The style for the given cosmetics and maximized state.
    ///
    /// A maximized window fills the work area, so it is always flat.
    pub fn for_state(cosmetics: &FrameCosmetics, maximized: bool) -> Self {
        if maximized {
            Self::FLAT
        } else {
            Self {
                shadow_radius: cosmetics.shadow_radius,
                corner_radius: cosmetics.corner_radius,
            }
        }
    }

    /// Check if the style draws nothing.
    pub fn is_flat(&self) -> bool {
        self.shadow_radius == 0 && self.corner_radius == 0.0
    }
}

/// Everything the chrome controller consumes from the windowing toolkit.
///
/// All coordinates are screen pixels in the virtual desktop.
pub trait ChromeHost {
    /// The window's current outer rectangle.
    fn geometry(&self) -> Rect;

    /// Move and resize the window.
    fn set_geometry(&mut self, rect: Rect);

    /// The smallest size the window may be resized to.
    fn minimum_size(&self) -> Size;

    /// All connected screens.
    fn screens(&self) -> Vec<Screen>;

    /// Show a cursor shape over the window.
    fn set_cursor(&mut self, shape: CursorShape);

    /// Return to the toolkit's default cursor.
    fn unset_cursor(&mut self);

    /// Show one chrome button and hide the other.
    fn set_chrome_buttons(&mut self, buttons: ChromeButtons);

    /// Apply shadow and corner decorations.
    ///
    /// Only called when cosmetics are configured. The default does nothing.
    fn apply_frame_style(&mut self, style: FrameStyle) {
        let _ = style;
    }

    /// Close the window.
    fn close(&mut self);

    /// Minimize the window.
    fn minimize(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_follow_flag() {
        let normal = ChromeButtons::for_maximized(false);
        assert!(normal.shows_maximize());
        assert!(!normal.shows_restore());

        let maximized = ChromeButtons::for_maximized(true);
        assert!(maximized.shows_restore());
        assert!(!maximized.shows_maximize());
    }

    #[test]
    fn test_frame_style_flat_when_maximized() {
        let cosmetics = FrameCosmetics {
            shadow_radius: 12,
            corner_radius: 8.0,
        };
        let normal = FrameStyle::for_state(&cosmetics, false);
        assert_eq!(normal.shadow_radius, 12);
        assert_eq!(normal.corner_radius, 8.0);
        assert!(!normal.is_flat());

        assert!(FrameStyle::for_state(&cosmetics, true).is_flat());
    }
}
