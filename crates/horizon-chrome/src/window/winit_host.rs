//! winit integration.
//!
//! [`WinitChromeHost`] implements [`ChromeHost`] over a winit window, and
//! [`WinitEventAdapter`] feeds that window's events through the dispatch
//! table into a [`WindowChromeController`].
//!
//! ```ignore
//! let window = Arc::new(event_loop.create_window(
//!     Window::default_attributes().with_decorations(false),
//! )?);
//! let mut host = WinitChromeHost::new(window).with_minimum_size(Size::new(400, 300));
//! let mut adapter = WinitEventAdapter::new(ChromeConfig::new())?;
//! adapter.on_first_show(&mut host);
//!
//! // In ApplicationHandler::window_event:
//! adapter.handle_window_event(&mut host, &event);
//! if host.take_close_request() {
//!     event_loop.exit();
//! }
//! ```
//!
//! # Platform Notes
//!
//! - winit does not report a monitor's work area, so screens are reported
//!   with their full bounds as the work area. Maximized windows may cover a
//!   taskbar.
//! - Wayland does not let clients position their own windows; drags and
//!   left-edge resizes only change the size there.
//! - Position requests land asynchronously on X11 and Windows. The adapter
//!   measures pointer positions from the origin in the latest
//!   `WindowEvent::Moved`, which is the outer position; a window without
//!   decorations has its client area at that same corner.

use std::sync::Arc;

use horizon_chrome_core::logging::targets;
use horizon_chrome_core::{Point, Rect, Size};
use horizon_chrome_core::{chrome_debug, chrome_trace};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, ModifiersState};
use winit::monitor::MonitorHandle;
use winit::window::{CursorIcon, Window};

use super::chrome_config::ChromeConfig;
use super::controller::WindowChromeController;
use super::cursor::CursorShape;
use super::dispatch::{DispatchTable, EventDisposition, EventSource, PointerEvent, PointerEventKind};
use super::host::{ChromeButtons, ChromeHost, FrameStyle};
use super::pointer::PointerTracker;
use super::screen::Screen;
use super::shortcuts::ShortcutMap;
use crate::error::Result;

/// A [`ChromeHost`] backed by a winit window.
///
/// Geometry requests are remembered so that back-to-back moves during a
/// gesture see the rectangle they asked for, even when the platform applies
/// it asynchronously.
pub struct WinitChromeHost {
    window: Arc<Window>,
    geometry: Rect,
    minimum_size: Size,
    buttons: ChromeButtons,
    frame_style: FrameStyle,
    close_requested: bool,
}

impl WinitChromeHost {
    /// Wrap a window.
    pub fn new(window: Arc<Window>) -> Self {
        let geometry = window_geometry(&window);
        Self {
            window,
            geometry,
            minimum_size: Size::ZERO,
            buttons: ChromeButtons::Maximize,
            frame_style: FrameStyle::FLAT,
            close_requested: false,
        }
    }

    /// Set the minimum size, also applying it to the native window.
    pub fn with_minimum_size(mut self, size: Size) -> Self {
        self.minimum_size = size;
        self.window
            .set_min_inner_size(Some(PhysicalSize::new(to_u32(size.width), to_u32(size.height))));
        self
    }

    /// The wrapped window.
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// The chrome button the application should draw.
    pub fn chrome_buttons(&self) -> ChromeButtons {
        self.buttons
    }

    /// The frame decorations the application should draw.
    pub fn frame_style(&self) -> FrameStyle {
        self.frame_style
    }

    /// Check if a close was requested.
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Check and clear the close request.
    pub fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.close_requested)
    }

    /// Re-read the window rectangle from the platform.
    pub fn sync_geometry(&mut self) {
        self.geometry = window_geometry(&self.window);
    }
}

impl std::fmt::Debug for WinitChromeHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinitChromeHost")
            .field("id", &self.window.id())
            .field("geometry", &self.geometry)
            .field("buttons", &self.buttons)
            .field("close_requested", &self.close_requested)
            .finish()
    }
}

impl ChromeHost for WinitChromeHost {
    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn set_geometry(&mut self, rect: Rect) {
        if rect.top_left() != self.geometry.top_left() {
            self.window
                .set_outer_position(PhysicalPosition::new(rect.x, rect.y));
        }
        if rect.size() != self.geometry.size() {
            let _ = self
                .window
                .request_inner_size(PhysicalSize::new(to_u32(rect.width), to_u32(rect.height)));
        }
        self.geometry = rect;
    }

    fn minimum_size(&self) -> Size {
        self.minimum_size
    }

    fn screens(&self) -> Vec<Screen> {
        let primary = self.window.primary_monitor();
        self.window
            .available_monitors()
            .map(|monitor| {
                let is_primary = primary.as_ref() == Some(&monitor);
                monitor_screen(&monitor, is_primary)
            })
            .collect()
    }

    fn set_cursor(&mut self, shape: CursorShape) {
        self.window.set_cursor(shape.to_cursor_icon());
    }

    fn unset_cursor(&mut self) {
        self.window.set_cursor(CursorIcon::Default);
    }

    fn set_chrome_buttons(&mut self, buttons: ChromeButtons) {
        if self.buttons != buttons {
            self.buttons = buttons;
            self.window.request_redraw();
        }
    }

    fn apply_frame_style(&mut self, style: FrameStyle) {
        if self.frame_style != style {
            self.frame_style = style;
            self.window.request_redraw();
        }
    }

    fn close(&mut self) {
        self.close_requested = true;
    }

    fn minimize(&mut self) {
        self.window.set_minimized(true);
    }
}

fn window_geometry(window: &Window) -> Rect {
    let position = match window.outer_position() {
        Ok(position) => position,
        Err(_) => {
            chrome_debug!(targets::HOST, "window position unavailable, assuming origin");
            PhysicalPosition::new(0, 0)
        }
    };
    let size = window.inner_size();
    Rect::new(position.x, position.y, to_i32(size.width), to_i32(size.height))
}

fn monitor_screen(monitor: &MonitorHandle, is_primary: bool) -> Screen {
    let position = monitor.position();
    let size = monitor.size();
    let bounds = Rect::new(position.x, position.y, to_i32(size.width), to_i32(size.height));
    Screen::without_reserved_area(monitor.name().unwrap_or_default(), bounds, is_primary)
}

fn to_u32(value: i32) -> u32 {
    u32::try_from(value.max(1)).unwrap_or(1)
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Feeds winit window events to a chrome controller.
///
/// Each pointer event is routed to the window source first and then, if it
/// falls in the title bar (or the title bar holds the pointer grab), to the
/// title-bar source. Window-first ordering lets a press on the top resize
/// border lock the resize before the title bar can arm a drag.
#[derive(Debug)]
pub struct WinitEventAdapter {
    controller: WindowChromeController,
    table: DispatchTable,
    shortcuts: ShortcutMap,
    tracker: PointerTracker,
    modifiers: ModifiersState,
    grab: Option<EventSource>,
}

impl WinitEventAdapter {
    /// Create an adapter with the standard dispatch table.
    ///
    /// Fails if a configured shortcut does not parse.
    pub fn new(config: ChromeConfig) -> Result<Self> {
        let shortcuts = config.shortcut_map()?;
        Ok(Self {
            controller: WindowChromeController::new(config),
            table: DispatchTable::standard(),
            shortcuts,
            tracker: PointerTracker::new(),
            modifiers: ModifiersState::empty(),
            grab: None,
        })
    }

    /// Replace the dispatch table.
    pub fn with_dispatch_table(mut self, table: DispatchTable) -> Self {
        self.table = table;
        self
    }

    /// The controller.
    pub fn controller(&self) -> &WindowChromeController {
        &self.controller
    }

    /// The controller, for connecting signals or issuing actions.
    pub fn controller_mut(&mut self) -> &mut WindowChromeController {
        &mut self.controller
    }

    /// The dispatch table.
    pub fn dispatch_table_mut(&mut self) -> &mut DispatchTable {
        &mut self.table
    }

    /// The shortcut bindings.
    pub fn shortcuts_mut(&mut self) -> &mut ShortcutMap {
        &mut self.shortcuts
    }

    /// The source holding the pointer grab, if a button is down.
    pub fn grab(&self) -> Option<EventSource> {
        self.grab
    }

    /// The pointer tracker.
    pub fn pointer_tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    /// Call once the window is first visible.
    ///
    /// Takes the host's current origin as the platform-reported origin.
    pub fn on_first_show(&mut self, host: &mut dyn ChromeHost) {
        self.tracker.set_window_origin(host.geometry().top_left());
        self.controller.on_first_show(host);
    }

    /// Handle a winit window event.
    pub fn handle_window_event(
        &mut self,
        host: &mut WinitChromeHost,
        event: &WindowEvent,
    ) -> EventDisposition {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let local = Point::new(position.x.round() as i32, position.y.round() as i32);
                self.cursor_moved(host, local)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_input(host, *state, *button)
            }
            WindowEvent::CursorLeft { .. } => self.cursor_left(host),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                EventDisposition::Propagate
            }
            WindowEvent::KeyboardInput { event, .. } if !event.repeat => self.handle_key(
                host,
                &event.logical_key,
                event.state == ElementState::Pressed,
            ),
            WindowEvent::Moved(position) => {
                self.window_moved(Point::new(position.x, position.y));
                if !self.controller.interaction().is_pressed() {
                    host.sync_geometry();
                }
                EventDisposition::Propagate
            }
            WindowEvent::Resized(_) => {
                // Mid-gesture reports may lag behind our own requests
                if !self.controller.interaction().is_pressed() {
                    host.sync_geometry();
                }
                EventDisposition::Propagate
            }
            WindowEvent::CloseRequested => {
                host.close();
                EventDisposition::Consumed
            }
            _ => EventDisposition::Propagate,
        }
    }

    /// The cursor moved to `local`, in coordinates of the window as the
    /// platform currently places it.
    pub fn cursor_moved(&mut self, host: &mut dyn ChromeHost, local: Point) -> EventDisposition {
        let pointer = self.tracker.handle_cursor_moved(local);
        self.route_pointer(host, pointer)
    }

    /// A mouse button changed state at the last cursor position.
    pub fn mouse_input(
        &mut self,
        host: &mut dyn ChromeHost,
        state: ElementState,
        button: MouseButton,
    ) -> EventDisposition {
        let pointer = self.tracker.handle_mouse_input(state, button);
        self.route_pointer(host, pointer)
    }

    /// The cursor left the window.
    pub fn cursor_left(&mut self, host: &mut dyn ChromeHost) -> EventDisposition {
        let pointer = self.tracker.handle_cursor_left();
        self.route_pointer(host, pointer)
    }

    /// The platform reports the window's top-left corner at `origin`.
    ///
    /// Global pointer positions are measured from this origin, not from the
    /// geometry the chrome requested, which the platform may not have
    /// applied yet.
    pub fn window_moved(&mut self, origin: Point) {
        self.tracker.set_window_origin(origin);
    }

    /// Run the action bound to a key, if any.
    pub fn handle_key(
        &mut self,
        host: &mut dyn ChromeHost,
        key: &Key,
        pressed: bool,
    ) -> EventDisposition {
        if !pressed {
            return EventDisposition::Propagate;
        }
        match self.shortcuts.lookup(key, self.modifiers) {
            Some(action) => {
                chrome_debug!(targets::DISPATCH, ?action, "shortcut triggered");
                self.controller.handle_action(host, action);
                EventDisposition::Consumed
            }
            None => EventDisposition::Propagate,
        }
    }

    /// Set the held modifiers directly.
    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Route a pointer event to the window and title-bar sources.
    pub fn route_pointer(
        &mut self,
        host: &mut dyn ChromeHost,
        event: PointerEvent,
    ) -> EventDisposition {
        let title_bar = self
            .controller
            .config()
            .title_bar_rect(host.geometry().width);
        let in_title_bar = title_bar.contains(event.local);

        let to_title_bar = match event.kind {
            PointerEventKind::Press | PointerEventKind::DoubleClick => {
                if event.is_primary() {
                    self.grab = Some(if in_title_bar {
                        EventSource::TitleBar
                    } else {
                        EventSource::Window
                    });
                }
                in_title_bar
            }
            PointerEventKind::Move | PointerEventKind::Release => match self.grab {
                Some(source) => source == EventSource::TitleBar,
                None => in_title_bar,
            },
            PointerEventKind::Leave => false,
        };

        let mut disposition =
            self.table
                .dispatch(EventSource::Window, &mut self.controller, host, &event);
        if to_title_bar {
            let title = self
                .table
                .dispatch(EventSource::TitleBar, &mut self.controller, host, &event);
            if title.is_consumed() {
                disposition = EventDisposition::Consumed;
            }
        }

        if event.kind == PointerEventKind::Release && event.is_primary() {
            self.grab = None;
        }
        chrome_trace!(targets::DISPATCH, kind = ?event.kind, in_title_bar, "pointer routed");
        disposition
    }
}
