//! Shared test double for the chrome integration tests.

#![allow(dead_code)]

use horizon_chrome::window::{ChromeButtons, ChromeHost, CursorShape, FrameStyle, Screen};
use horizon_chrome::{Point, Rect, Size};

/// The single 1920x1080 screen most tests run on.
pub const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

/// A host that records everything the controller asks of it.
#[derive(Debug, Clone)]
pub struct MockHost {
    pub geometry: Rect,
    pub minimum: Size,
    pub screens: Vec<Screen>,
    pub cursor: CursorShape,
    pub buttons: Option<ChromeButtons>,
    pub frame_style: Option<FrameStyle>,
    pub geometry_requests: Vec<Rect>,
    pub closed: bool,
    pub minimized: bool,
}

impl MockHost {
    /// A window at `geometry` on one primary 1920x1080 screen.
    pub fn new(geometry: Rect) -> Self {
        Self {
            geometry,
            minimum: Size::new(200, 150),
            screens: vec![Screen::without_reserved_area("primary", SCREEN, true)],
            cursor: CursorShape::Default,
            buttons: None,
            frame_style: None,
            geometry_requests: Vec::new(),
            closed: false,
            minimized: false,
        }
    }

    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = minimum;
        self
    }

    pub fn with_screens(mut self, screens: Vec<Screen>) -> Self {
        self.screens = screens;
        self
    }

    /// Convert a window-local point to global coordinates.
    pub fn global(&self, local: Point) -> Point {
        self.geometry.top_left() + local
    }

    /// Convert a global point to window-local coordinates.
    pub fn local(&self, global: Point) -> Point {
        global - self.geometry.top_left()
    }
}

impl ChromeHost for MockHost {
    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
        self.geometry_requests.push(rect);
    }

    fn minimum_size(&self) -> Size {
        self.minimum
    }

    fn screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }

    fn set_cursor(&mut self, shape: CursorShape) {
        self.cursor = shape;
    }

    fn unset_cursor(&mut self) {
        self.cursor = CursorShape::Default;
    }

    fn set_chrome_buttons(&mut self, buttons: ChromeButtons) {
        self.buttons = Some(buttons);
    }

    fn apply_frame_style(&mut self, style: FrameStyle) {
        self.frame_style = Some(style);
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn minimize(&mut self) {
        self.minimized = true;
    }
}
