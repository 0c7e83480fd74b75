//! Window chrome for frameless windows.
//!
//! This module implements the behavior a native title bar and frame would
//! otherwise provide: resizing from invisible borders, dragging by a custom
//! title bar, an application-defined maximized state with mutually exclusive
//! maximize/restore buttons, and snapping to screen edges.
//!
//! # Wiring
//!
//! ```ignore
//! use horizon_chrome::window::{ChromeConfig, WinitChromeHost, WinitEventAdapter};
//!
//! let mut host = WinitChromeHost::new(window);
//! let mut adapter = WinitEventAdapter::new(ChromeConfig::new())?;
//! adapter.on_first_show(&mut host);
//!
//! adapter.controller().maximized_changed.connect(|maximized| {
//!     // Swap the maximize/restore button
//! });
//! ```
//!
//! Other toolkits implement [`ChromeHost`] and route their pointer events
//! through a [`DispatchTable`] themselves.

mod chrome_config;
mod controller;
mod cursor;
mod dispatch;
mod host;
mod interaction;
mod pointer;
mod resize_region;
mod screen;
mod shortcuts;
mod snap;
mod winit_host;

pub use chrome_config::{
    ChromeConfig, DEFAULT_BORDER_WIDTH, DEFAULT_DRAG_RESTORE_OFFSET,
    DEFAULT_RESTORE_FALLBACK_FRACTION, DEFAULT_SNAP_THRESHOLD, DEFAULT_TITLE_BAR_HEIGHT,
    FrameCosmetics,
};
pub use controller::{WindowChromeController, resized_geometry};
pub use cursor::CursorShape;
pub use dispatch::{
    DispatchTable, EventDisposition, EventSource, PointerButton, PointerEvent, PointerEventKind,
    PointerHandler,
};
pub use host::{ChromeButtons, ChromeHost, FrameStyle};
pub use interaction::{DragAnchor, InteractionState};
pub use pointer::{DEFAULT_DOUBLE_CLICK_DISTANCE, DEFAULT_DOUBLE_CLICK_TIME_MS, PointerTracker};
pub use resize_region::ResizeRegion;
pub use screen::{Screen, available_geometry_at, screen_at};
pub use shortcuts::{ChromeAction, KeyCombination, ShortcutMap};
pub use snap::{SnapAction, evaluate_snap};
pub use winit_host::{WinitChromeHost, WinitEventAdapter};
