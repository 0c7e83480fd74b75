//! The window chrome controller.
//!
//! [`WindowChromeController`] turns pointer events into window geometry
//! changes for a frameless window: resizing from the borders, dragging by
//! the title bar, the application-defined maximized state, and snapping to
//! screen edges on drop.
//!
//! # States
//!
//! The window is either **normal** or **maximized**. The maximized flag is the
//! single source of truth for which chrome button is visible and disables
//! resize-border detection.
//!
//! ```text
//!            maximize / double-click / snap to top / F11
//!   Normal ───────────────────────────────────────────────▶ Maximized
//!          ◀───────────────────────────────────────────────
//!            restore / double-click / drag title bar / F11
//! ```
//!
//! # Gestures
//!
//! A gesture is press, any number of moves, then release. Window-scoped
//! presses on a border lock a resize region; title-bar presses arm a drag.
//! Resizing wins: once a region is locked the title bar never moves the
//! window during that gesture. Release is the only place gesture state is
//! torn down.
//!
//! # Example
//!
//! ```ignore
//! use horizon_chrome::window::{ChromeConfig, WindowChromeController};
//!
//! let mut controller = WindowChromeController::new(ChromeConfig::new());
//! controller.maximized_changed.connect(|maximized| {
//!     println!("maximized: {maximized}");
//! });
//!
//! controller.on_first_show(&mut host);
//! controller.toggle_maximized(&mut host);
//! ```

use std::fmt;

use horizon_chrome_core::logging::{gesture_span, targets};
use horizon_chrome_core::{Point, Property, Rect, Signal, Size};
use horizon_chrome_core::{chrome_debug, chrome_trace, chrome_warn};

use super::chrome_config::ChromeConfig;
use super::cursor::CursorShape;
use super::dispatch::PointerEvent;
use super::host::{ChromeButtons, ChromeHost, FrameStyle};
use super::interaction::InteractionState;
use super::resize_region::ResizeRegion;
use super::screen::available_geometry_at;
use super::shortcuts::ChromeAction;
use super::snap::{SnapAction, evaluate_snap};

/// Interaction state machine for a frameless window's chrome.
pub struct WindowChromeController {
    config: ChromeConfig,
    interaction: InteractionState,
    maximized: Property<bool>,
    restore_geometry: Rect,
    initialized: bool,
    hover_cursor: CursorShape,
    snap_candidate: Option<SnapAction>,

    /// Emitted with the new flag whenever the maximized state changes.
    pub maximized_changed: Signal<bool>,
    /// Emitted with the new rectangle whenever the controller moves or resizes
    /// the window.
    pub geometry_changed: Signal<Rect>,
    /// Emitted after a snap has been applied.
    pub snapped: Signal<SnapAction>,
    /// Emitted during a drag when the snap that a drop would trigger changes.
    /// Only active with [`ChromeConfig::snap_while_moving`].
    pub snap_preview: Signal<Option<SnapAction>>,
}

static_assertions::assert_impl_all!(WindowChromeController: Send, Sync);

impl fmt::Debug for WindowChromeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowChromeController")
            .field("interaction", &self.interaction)
            .field("maximized", &self.maximized.get())
            .field("restore_geometry", &self.restore_geometry)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

impl Default for WindowChromeController {
    fn default() -> Self {
        Self::new(ChromeConfig::default())
    }
}

impl WindowChromeController {
    /// Create a controller for a window that has not been shown yet.
    pub fn new(config: ChromeConfig) -> Self {
        Self {
            config,
            interaction: InteractionState::new(),
            maximized: Property::new(false),
            restore_geometry: Rect::ZERO,
            initialized: false,
            hover_cursor: CursorShape::Default,
            snap_candidate: None,
            maximized_changed: Signal::new(),
            geometry_changed: Signal::new(),
            snapped: Signal::new(),
            snap_preview: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The configuration this controller was created with.
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    /// The gesture in progress.
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// The rectangle a restore returns to. Empty when unset.
    pub fn restore_geometry(&self) -> Rect {
        self.restore_geometry
    }

    /// The resize region locked for the current gesture.
    pub fn resize_region(&self) -> ResizeRegion {
        self.interaction.region()
    }

    /// Check if the window is in the application-defined maximized state.
    pub fn is_custom_maximized(&self) -> bool {
        self.maximized.get()
    }

    /// The chrome button that should currently be visible.
    pub fn chrome_buttons(&self) -> ChromeButtons {
        ChromeButtons::for_maximized(self.is_custom_maximized())
    }

    /// The snap a drop at the last drag position would trigger.
    pub fn snap_candidate(&self) -> Option<SnapAction> {
        self.snap_candidate
    }

    /// Check if [`on_first_show`](Self::on_first_show) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Seed the restore geometry from the window's first-shown rectangle.
    ///
    /// Only the first call has any effect.
    pub fn on_first_show(&mut self, host: &mut dyn ChromeHost) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.restore_geometry = host.geometry();
        self.sync_chrome(host);
        chrome_debug!(
            targets::CONTROLLER,
            geometry = %self.restore_geometry,
            "window shown"
        );
    }

    /// Classify a window-local position against the current window size.
    pub fn classify(&self, host: &dyn ChromeHost, local: Point) -> ResizeRegion {
        ResizeRegion::classify(
            local,
            host.geometry().size(),
            self.config.border_width,
            self.is_custom_maximized(),
        )
    }

    // =========================================================================
    // Window-scoped Pointer Events
    // =========================================================================

    /// Primary button pressed anywhere in the window.
    ///
    /// Ends any gesture still in progress, then locks the resize region
    /// under the pointer, if any, for the whole new gesture.
    pub fn window_press(&mut self, host: &mut dyn ChromeHost, event: &PointerEvent) {
        if !event.is_primary() {
            return;
        }

        self.abandon_gesture(host);
        let region = self.classify(host, event.local);
        self.interaction.press();
        if !region.is_active() {
            return;
        }

        let _span = gesture_span("resize");
        self.interaction.lock_resize(region, event.global);
        self.show_cursor(host, CursorShape::for_region(region));
        chrome_debug!(
            targets::RESIZE,
            ?region,
            origin = %event.global,
            "resize region locked"
        );
    }

    /// Pointer moved anywhere in the window.
    ///
    /// Resizes during a resize gesture; previews the resize cursor while no
    /// button is held.
    pub fn window_move(&mut self, host: &mut dyn ChromeHost, event: &PointerEvent) {
        if self.interaction.is_resizing() {
            self.perform_resize(host, event.global);
        } else if !self.interaction.is_pressed() {
            let shape = CursorShape::for_region(self.classify(host, event.local));
            self.show_cursor(host, shape);
        }
    }

    /// The pointer left the window.
    ///
    /// Resets the cursor unless a resize is still running. Drag state is kept:
    /// the gesture continues until release.
    pub fn pointer_left(&mut self, host: &mut dyn ChromeHost) {
        if !self.interaction.is_resizing() {
            self.show_cursor(host, CursorShape::Default);
        }
    }

    // =========================================================================
    // Title-bar Pointer Events
    // =========================================================================

    /// Primary button pressed on the title bar.
    ///
    /// Arms a drag unless a resize already owns the gesture.
    pub fn title_bar_press(&mut self, host: &mut dyn ChromeHost, event: &PointerEvent) {
        if !event.is_primary() {
            return;
        }
        if self.interaction.is_move_armed() {
            self.abandon_gesture(host);
        }
        if self.interaction.is_resizing() {
            chrome_trace!(targets::CONTROLLER, "title bar press ignored while resizing");
            return;
        }

        let geometry = host.geometry();
        self.interaction.arm_move(event.global - geometry.top_left());
        if !self.is_custom_maximized() {
            self.restore_geometry = geometry;
        }
    }

    /// Pointer moved over the title bar (or anywhere, while the title bar
    /// holds the pointer grab).
    pub fn title_bar_move(&mut self, host: &mut dyn ChromeHost, event: &PointerEvent) {
        let state = &self.interaction;
        if !state.is_pressed() || state.is_resizing() || !state.is_move_armed() {
            return;
        }

        if self.is_custom_maximized() {
            self.drag_restore(host, event.global);
        }
        if !self.interaction.begin_move() {
            return;
        }

        let current = host.geometry();
        let target = current.with_top_left(event.global - self.interaction.anchor().move_offset);
        if target != current {
            host.set_geometry(target);
            self.geometry_changed.emit(target);
            chrome_trace!(targets::CONTROLLER, geometry = %target, "window moved");
        }

        if self.config.snap_enabled && self.config.snap_while_moving {
            let avail = available_geometry_at(&host.screens(), event.global);
            let candidate = evaluate_snap(event.global, avail, self.config.snap_threshold);
            self.set_snap_candidate(candidate);
        }
    }

    /// Primary button released on either source.
    ///
    /// Snaps a dragged window to the edge it was dropped on, then returns to
    /// idle. Calling it again for the same gesture does nothing.
    pub fn release(&mut self, host: &mut dyn ChromeHost, event: &PointerEvent) {
        if !event.is_primary() {
            return;
        }
        if !self.interaction.is_pressed() {
            return;
        }

        if self.interaction.is_moving() && self.config.snap_enabled {
            let avail = available_geometry_at(&host.screens(), event.global);
            if let Some(action) = evaluate_snap(event.global, avail, self.config.snap_threshold) {
                self.apply_snap(host, action);
            }
        }

        self.interaction.reset();
        self.set_snap_candidate(None);
        self.show_cursor(host, CursorShape::Default);
    }

    // =========================================================================
    // Maximize / Restore
    // =========================================================================

    /// Fill the work area of the screen under the window's center.
    ///
    /// Does nothing when already maximized or when no work area is known.
    pub fn maximize(&mut self, host: &mut dyn ChromeHost) {
        if self.is_custom_maximized() {
            return;
        }

        let current = host.geometry();
        let avail = available_geometry_at(&host.screens(), current.center());
        if avail.is_empty() {
            chrome_warn!(targets::CONTROLLER, "no work area available, not maximizing");
            return;
        }

        self.restore_geometry = current;
        self.apply_geometry(host, avail);
        self.set_maximized(host, true);
        chrome_debug!(
            targets::CONTROLLER,
            restore = %current,
            work_area = %avail,
            "maximized"
        );
    }

    /// Leave the maximized state, returning to the restore geometry.
    ///
    /// Does nothing when not maximized. An empty restore geometry leaves the
    /// window where it is.
    pub fn restore(&mut self, host: &mut dyn ChromeHost) {
        if !self.is_custom_maximized() {
            return;
        }

        if self.restore_geometry.is_empty() {
            chrome_debug!(targets::CONTROLLER, "no restore geometry, keeping current");
        } else {
            self.apply_geometry(host, self.restore_geometry);
        }
        self.set_maximized(host, false);
        chrome_debug!(targets::CONTROLLER, geometry = %host.geometry(), "restored");
    }

    /// Maximize when normal, restore when maximized.
    pub fn toggle_maximized(&mut self, host: &mut dyn ChromeHost) {
        if self.is_custom_maximized() {
            self.restore(host);
        } else {
            self.maximize(host);
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Close button or shortcut.
    pub fn request_close(&mut self, host: &mut dyn ChromeHost) {
        chrome_debug!(targets::CONTROLLER, "close requested");
        host.close();
    }

    /// Minimize button or shortcut.
    pub fn request_minimize(&mut self, host: &mut dyn ChromeHost) {
        chrome_debug!(targets::CONTROLLER, "minimize requested");
        host.minimize();
    }

    /// Maximize button or shortcut.
    pub fn request_maximize(&mut self, host: &mut dyn ChromeHost) {
        self.maximize(host);
    }

    /// Restore button or shortcut.
    pub fn request_restore(&mut self, host: &mut dyn ChromeHost) {
        self.restore(host);
    }

    /// Run a chrome action.
    pub fn handle_action(&mut self, host: &mut dyn ChromeHost, action: ChromeAction) {
        match action {
            ChromeAction::Close => self.request_close(host),
            ChromeAction::Minimize => self.request_minimize(host),
            ChromeAction::Maximize => self.request_maximize(host),
            ChromeAction::Restore => self.request_restore(host),
            ChromeAction::ToggleMaximize => self.toggle_maximized(host),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Apply the incremental resize for a pointer at `global`.
    fn perform_resize(&mut self, host: &mut dyn ChromeHost, global: Point) {
        let region = self.interaction.region();
        let delta = global - self.interaction.anchor().resize_origin;
        let current = host.geometry();
        let target = resized_geometry(current, region, delta, host.minimum_size());

        if target != current {
            host.set_geometry(target);
            self.geometry_changed.emit(target);
            chrome_trace!(
                targets::RESIZE,
                ?region,
                %delta,
                geometry = %target,
                "window resized"
            );
        }
        self.interaction.set_resize_origin(global);
    }

    /// Leave the maximized state mid-drag, keeping the pointer at the same
    /// relative spot within the smaller window.
    fn drag_restore(&mut self, host: &mut dyn ChromeHost, global: Point) {
        let _span = gesture_span("drag-restore");
        let current = host.geometry();
        let size = if self.restore_geometry.is_empty() {
            let avail = available_geometry_at(&host.screens(), global);
            let base = if avail.is_empty() { current } else { avail };
            let fraction = self.config.restore_fallback_fraction;
            Size::new(
                current.width.min(scale(base.width, fraction)),
                current.height.min(scale(base.height, fraction)),
            )
        } else {
            self.restore_geometry.size()
        };
        let minimum = host.minimum_size();
        let size = Size::new(size.width.max(minimum.width), size.height.max(minimum.height));

        let rel_x = relative(global.x - current.x, current.width);
        let rel_y = relative(global.y - current.y, current.height);
        let origin = Point::new(
            global.x - scale(size.width, rel_x),
            global.y - scale(size.height, rel_y) - self.config.drag_restore_offset,
        );
        let target = Rect::from_origin_size(origin, size);

        self.apply_geometry(host, target);
        self.set_maximized(host, false);
        self.interaction.set_move_offset(global - origin);
        chrome_debug!(
            targets::CONTROLLER,
            geometry = %target,
            "restored by dragging the title bar"
        );
    }

    fn apply_snap(&mut self, host: &mut dyn ChromeHost, action: SnapAction) {
        match action {
            SnapAction::Maximize => self.maximize(host),
            SnapAction::LeftHalf(target) | SnapAction::RightHalf(target) => {
                self.restore_geometry = host.geometry();
                self.apply_geometry(host, target);
                if !self.set_maximized(host, false) {
                    host.set_chrome_buttons(ChromeButtons::Maximize);
                }
            }
        }
        chrome_debug!(targets::SNAP, %action, "snapped");
        self.snapped.emit(action);
    }

    /// Drop a gesture whose release never arrived.
    fn abandon_gesture(&mut self, host: &mut dyn ChromeHost) {
        if !self.interaction.is_pressed() {
            return;
        }
        chrome_debug!(
            targets::CONTROLLER,
            interaction = ?self.interaction,
            "new press ends unreleased gesture"
        );
        self.interaction.reset();
        self.set_snap_candidate(None);
        self.show_cursor(host, CursorShape::Default);
    }

    fn apply_geometry(&mut self, host: &mut dyn ChromeHost, rect: Rect) {
        host.set_geometry(rect);
        self.geometry_changed.emit(rect);
    }

    /// Update the flag, pushing button and frame changes to the host.
    ///
    /// Returns `false` if the flag already had this value.
    fn set_maximized(&mut self, host: &mut dyn ChromeHost, maximized: bool) -> bool {
        if !self.maximized.set(maximized) {
            return false;
        }
        self.sync_chrome(host);
        self.maximized_changed.emit(maximized);
        true
    }

    fn sync_chrome(&self, host: &mut dyn ChromeHost) {
        let maximized = self.is_custom_maximized();
        host.set_chrome_buttons(ChromeButtons::for_maximized(maximized));
        if let Some(cosmetics) = &self.config.cosmetics {
            host.apply_frame_style(FrameStyle::for_state(cosmetics, maximized));
        }
    }

    fn show_cursor(&mut self, host: &mut dyn ChromeHost, shape: CursorShape) {
        if shape == self.hover_cursor {
            return;
        }
        self.hover_cursor = shape;
        if shape.is_default() {
            host.unset_cursor();
        } else {
            host.set_cursor(shape);
        }
    }

    fn set_snap_candidate(&mut self, candidate: Option<SnapAction>) {
        if self.snap_candidate == candidate {
            return;
        }
        self.snap_candidate = candidate;
        chrome_trace!(targets::SNAP, ?candidate, "snap candidate changed");
        self.snap_preview.emit(candidate);
    }
}

/// The rectangle after dragging `region` by `delta`, never smaller than
/// `minimum`.
///
/// When a left or top edge hits the minimum, the right or bottom edge stays
/// where it was.
pub fn resized_geometry(current: Rect, region: ResizeRegion, delta: Point, minimum: Size) -> Rect {
    let min_width = minimum.width.max(1);
    let min_height = minimum.height.max(1);
    let mut target = current;

    if region.moves_left_edge() {
        let right = current.x + current.width;
        target.width = (current.width - delta.x).max(min_width);
        target.x = right - target.width;
    } else if region.moves_right_edge() {
        target.width = (current.width + delta.x).max(min_width);
    }

    if region.moves_top_edge() {
        let bottom = current.y + current.height;
        target.height = (current.height - delta.y).max(min_height);
        target.y = bottom - target.height;
    } else if region.moves_bottom_edge() {
        target.height = (current.height + delta.y).max(min_height);
    }

    target
}

fn scale(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor).round() as i32
}

fn relative(offset: i32, extent: i32) -> f64 {
    if extent <= 0 {
        return 0.5;
    }
    (f64::from(offset) / f64::from(extent)).clamp(0.0, 1.0)
}
