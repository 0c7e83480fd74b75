//! Routing pointer events from their source to the controller.
//!
//! A toolkit delivers pointer events from two places: the title-bar strip and
//! the window as a whole. Instead of subclassing an event filter, the host
//! looks the pair `(source, kind)` up in a [`DispatchTable`] and calls the
//! handler it finds. Unmapped pairs propagate to the application untouched.
//!
//! [`DispatchTable::standard`] wires the stock behavior:
//!
//! | Source | Press | Move | Release | DoubleClick | Leave |
//! |---|---|---|---|---|---|
//! | Window | arm resize | resize / cursor preview | release | arm resize | reset cursor |
//! | TitleBar | arm move | drag | release | toggle maximize (consumed) | - |
//!
//! A double-click replaces the second press of the pair, so the window
//! source treats it as a press: a quick second grab of a border still resizes.

use std::collections::HashMap;
use std::sync::Arc;

use horizon_chrome_core::Point;
use horizon_chrome_core::logging::targets;
use winit::event::MouseButton;

use super::controller::WindowChromeController;
use super::host::ChromeHost;

/// Where a pointer event was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    /// The title-bar strip.
    TitleBar,
    /// Anywhere in the window.
    Window,
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Press,
    Move,
    Release,
    DoubleClick,
    /// The pointer left the window.
    Leave,
}

/// Which mouse button an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The button that starts gestures (usually the left button).
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Back => PointerButton::Other(4),
            MouseButton::Forward => PointerButton::Other(5),
            MouseButton::Other(n) => PointerButton::Other(n),
        }
    }
}

/// A pointer event as seen by the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Position relative to the window's top-left corner.
    pub local: Point,
    /// Position in the virtual desktop.
    pub global: Point,
    /// The button that changed state. `None` for moves and leaves.
    pub button: Option<PointerButton>,
}

impl PointerEvent {
    /// A button press.
    pub fn press(local: Point, global: Point, button: PointerButton) -> Self {
        Self {
            kind: PointerEventKind::Press,
            local,
            global,
            button: Some(button),
        }
    }

    /// A button release.
    pub fn release(local: Point, global: Point, button: PointerButton) -> Self {
        Self {
            kind: PointerEventKind::Release,
            local,
            global,
            button: Some(button),
        }
    }

    /// A second press in quick succession.
    pub fn double_click(local: Point, global: Point, button: PointerButton) -> Self {
        Self {
            kind: PointerEventKind::DoubleClick,
            local,
            global,
            button: Some(button),
        }
    }

    /// A pointer motion.
    pub fn moved(local: Point, global: Point) -> Self {
        Self {
            kind: PointerEventKind::Move,
            local,
            global,
            button: None,
        }
    }

    /// The pointer left the window at its last known position.
    pub fn leave(local: Point, global: Point) -> Self {
        Self {
            kind: PointerEventKind::Leave,
            local,
            global,
            button: None,
        }
    }

    /// Check if the event concerns the primary button.
    pub fn is_primary(&self) -> bool {
        self.button == Some(PointerButton::Primary)
    }
}

/// Whether the chrome swallowed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The application should not see the event.
    Consumed,
    /// The application should handle the event as usual.
    Propagate,
}

impl EventDisposition {
    /// Check if the event was consumed.
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventDisposition::Consumed)
    }
}

/// A handler stored in the dispatch table.
pub type PointerHandler = Arc<
    dyn Fn(&mut WindowChromeController, &mut dyn ChromeHost, &PointerEvent) -> EventDisposition
        + Send
        + Sync,
>;

/// Handlers keyed by event source and kind.
#[derive(Clone, Default)]
pub struct DispatchTable {
    handlers: HashMap<(EventSource, PointerEventKind), PointerHandler>,
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.handlers.keys().collect();
        keys.sort_by_key(|(source, kind)| (*source as u8, *kind as u8));
        f.debug_struct("DispatchTable")
            .field("handlers", &keys)
            .finish()
    }
}

impl DispatchTable {
    /// An empty table: every event propagates.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock wiring of both sources to the controller.
    pub fn standard() -> Self {
        let mut table = Self::new();

        table.set(EventSource::Window, PointerEventKind::Press, |c, h, e| {
            c.window_press(h, e);
            EventDisposition::Propagate
        });
        table.set(EventSource::Window, PointerEventKind::Move, |c, h, e| {
            c.window_move(h, e);
            EventDisposition::Propagate
        });
        table.set(EventSource::Window, PointerEventKind::Release, |c, h, e| {
            c.release(h, e);
            EventDisposition::Propagate
        });
        table.set(EventSource::Window, PointerEventKind::DoubleClick, |c, h, e| {
            c.window_press(h, e);
            EventDisposition::Propagate
        });
        table.set(EventSource::Window, PointerEventKind::Leave, |c, h, _| {
            c.pointer_left(h);
            EventDisposition::Propagate
        });

        table.set(EventSource::TitleBar, PointerEventKind::Press, |c, h, e| {
            c.title_bar_press(h, e);
            EventDisposition::Propagate
        });
        table.set(EventSource::TitleBar, PointerEventKind::Move, |c, h, e| {
            c.title_bar_move(h, e);
            EventDisposition::Propagate
        });
        table.set(EventSource::TitleBar, PointerEventKind::Release, |c, h, e| {
            c.release(h, e);
            EventDisposition::Propagate
        });
        table.set(
            EventSource::TitleBar,
            PointerEventKind::DoubleClick,
            |c, h, e| {
                // A double-click that grabbed a border resizes instead
                if e.is_primary() && !c.interaction().is_resizing() {
                    c.toggle_maximized(h);
                    EventDisposition::Consumed
                } else {
                    EventDisposition::Propagate
                }
            },
        );

        table
    }

    /// Install or replace the handler for a source/kind pair.
    pub fn set<F>(&mut self, source: EventSource, kind: PointerEventKind, handler: F)
    where
        F: Fn(&mut WindowChromeController, &mut dyn ChromeHost, &PointerEvent) -> EventDisposition
            + Send
            + Sync
            + 'static,
    {
        self.handlers.insert((source, kind), Arc::new(handler));
    }

    /// Remove the handler for a source/kind pair.
    ///
    /// Returns `true` if a handler was installed.
    pub fn remove(&mut self, source: EventSource, kind: PointerEventKind) -> bool {
        self.handlers.remove(&(source, kind)).is_some()
    }

    /// Check if a handler is installed for a source/kind pair.
    pub fn contains(&self, source: EventSource, kind: PointerEventKind) -> bool {
        self.handlers.contains_key(&(source, kind))
    }

    /// Number of installed handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are installed.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route one event.
    pub fn dispatch(
        &self,
        source: EventSource,
        controller: &mut WindowChromeController,
        host: &mut dyn ChromeHost,
        event: &PointerEvent,
    ) -> EventDisposition {
        let Some(handler) = self.handlers.get(&(source, event.kind)) else {
            return EventDisposition::Propagate;
        };

        let disposition = handler(controller, host, event);
        tracing::trace!(
            target: targets::DISPATCH,
            ?source,
            kind = ?event.kind,
            global = %event.global,
            ?disposition,
            "pointer event dispatched"
        );
        disposition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_conversion() {
        assert_eq!(PointerButton::from(MouseButton::Left), PointerButton::Primary);
        assert_eq!(
            PointerButton::from(MouseButton::Right),
            PointerButton::Secondary
        );
        assert_eq!(PointerButton::from(MouseButton::Middle), PointerButton::Middle);
        assert_eq!(
            PointerButton::from(MouseButton::Other(9)),
            PointerButton::Other(9)
        );
    }

    #[test]
    fn test_event_constructors() {
        let press = PointerEvent::press(Point::new(1, 2), Point::new(11, 12), PointerButton::Primary);
        assert_eq!(press.kind, PointerEventKind::Press);
        assert!(press.is_primary());

        let moved = PointerEvent::moved(Point::new(1, 2), Point::new(11, 12));
        assert_eq!(moved.kind, PointerEventKind::Move);
        assert_eq!(moved.button, None);
        assert!(!moved.is_primary());
    }

    #[test]
    fn test_standard_table_entries() {
        let table = DispatchTable::standard();
        assert_eq!(table.len(), 9);
        assert!(table.contains(EventSource::TitleBar, PointerEventKind::DoubleClick));
        assert!(table.contains(EventSource::Window, PointerEventKind::DoubleClick));
        assert!(!table.contains(EventSource::TitleBar, PointerEventKind::Leave));
    }

    #[test]
    fn test_remove_entry() {
        let mut table = DispatchTable::standard();
        assert!(table.remove(EventSource::TitleBar, PointerEventKind::DoubleClick));
        assert!(!table.remove(EventSource::TitleBar, PointerEventKind::DoubleClick));
        assert_eq!(table.len(), 8);
        assert!(DispatchTable::new().is_empty());
    }
}
