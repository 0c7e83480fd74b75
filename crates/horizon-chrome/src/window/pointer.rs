//! Pointer state tracking for winit windows.
//!
//! winit reports raw cursor positions and button transitions. The chrome
//! needs a little more: the global position of every event and a
//! double-click notification, which winit does not synthesize.
//! [`PointerTracker`] keeps the last position and click and turns winit input
//! into [`PointerEvent`]s.
//!
//! Cursor positions are relative to where the platform has the window, not
//! where the chrome last asked it to be. Moves are applied asynchronously, so
//! the tracker derives global positions from the origin the platform last
//! reported (`WindowEvent::Moved`) and never from requested geometry.

use std::time::{Duration, Instant};

use horizon_chrome_core::Point;
use winit::event::{ElementState, MouseButton};

use super::dispatch::{PointerButton, PointerEvent};

/// Default double-click time threshold in milliseconds.
///
/// Two clicks must occur within this time to be considered a double-click.
pub const DEFAULT_DOUBLE_CLICK_TIME_MS: u64 = 500;

/// Default double-click distance threshold in pixels.
///
/// Two clicks must occur within this distance to be considered a double-click.
pub const DEFAULT_DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// State for tracking a potential double-click.
#[derive(Debug, Clone)]
struct ClickState {
    button: PointerButton,
    position: Point,
    time: Instant,
}

/// Converts winit cursor and button input into chrome pointer events.
#[derive(Debug)]
pub struct PointerTracker {
    /// Current cursor position in window coordinates.
    position: Point,
    /// Whether the primary button is down.
    primary_down: bool,
    last_click: Option<ClickState>,
    double_click_time: Duration,
    double_click_distance: f64,
    cursor_in_window: bool,
    /// Window top-left as last reported by the platform.
    window_origin: Point,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    /// Creates a tracker with the default double-click thresholds.
    pub fn new() -> Self {
        Self {
            position: Point::ZERO,
            primary_down: false,
            last_click: None,
            double_click_time: Duration::from_millis(DEFAULT_DOUBLE_CLICK_TIME_MS),
            double_click_distance: DEFAULT_DOUBLE_CLICK_DISTANCE,
            cursor_in_window: false,
            window_origin: Point::ZERO,
        }
    }

    /// Sets the double-click time threshold.
    pub fn set_double_click_time(&mut self, duration: Duration) {
        self.double_click_time = duration;
    }

    /// Sets the double-click distance threshold.
    pub fn set_double_click_distance(&mut self, distance: f64) {
        self.double_click_distance = distance;
    }

    /// Last cursor position in window coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Check if the primary button is held.
    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    /// Check if the cursor is inside the window.
    pub fn is_cursor_in_window(&self) -> bool {
        self.cursor_in_window
    }

    /// The window origin global positions are measured from.
    pub fn window_origin(&self) -> Point {
        self.window_origin
    }

    /// Records where the platform reports the window's top-left corner.
    pub fn set_window_origin(&mut self, origin: Point) {
        self.window_origin = origin;
    }

    /// Handles a cursor motion.
    pub fn handle_cursor_moved(&mut self, local: Point) -> PointerEvent {
        self.position = local;
        self.cursor_in_window = true;
        PointerEvent::moved(local, self.window_origin + local)
    }

    /// Handles a button transition.
    ///
    /// A press of the same button close in time and space to the previous
    /// press becomes a double-click instead.
    pub fn handle_mouse_input(
        &mut self,
        state: ElementState,
        button: MouseButton,
    ) -> PointerEvent {
        let button = PointerButton::from(button);
        let local = self.position;
        let global = self.window_origin + local;

        match state {
            ElementState::Pressed => {
                if button == PointerButton::Primary {
                    self.primary_down = true;
                }

                let is_double_click = self.last_click.as_ref().is_some_and(|last| {
                    last.button == button
                        && last.time.elapsed() < self.double_click_time
                        && self.distance_to(last.position) < self.double_click_distance
                });

                if is_double_click {
                    // A third click starts over
                    self.last_click = None;
                    PointerEvent::double_click(local, global, button)
                } else {
                    self.last_click = Some(ClickState {
                        button,
                        position: local,
                        time: Instant::now(),
                    });
                    PointerEvent::press(local, global, button)
                }
            }
            ElementState::Released => {
                if button == PointerButton::Primary {
                    self.primary_down = false;
                }
                PointerEvent::release(local, global, button)
            }
        }
    }

    /// Handles the cursor leaving the window.
    pub fn handle_cursor_left(&mut self) -> PointerEvent {
        self.cursor_in_window = false;
        self.last_click = None;
        PointerEvent::leave(self.position, self.window_origin + self.position)
    }

    fn distance_to(&self, point: Point) -> f64 {
        let dx = f64::from(self.position.x - point.x);
        let dy = f64::from(self.position.y - point.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Clears button state and double-click tracking. The window origin is
    /// kept.
    pub fn reset(&mut self) {
        self.position = Point::ZERO;
        self.primary_down = false;
        self.last_click = None;
        self.cursor_in_window = false;
    }
}
