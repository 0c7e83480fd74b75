//! Borderless window with application-drawn chrome behavior.
//!
//! Run with: cargo run -p horizon-chrome --example borderless
//!
//! Optionally pass a TOML configuration file:
//!   cargo run -p horizon-chrome --example borderless -- chrome.toml
//!
//! Try:
//!   - Drag the top 30px to move the window
//!   - Drop it on the top edge to maximize, left/right edge for half-screen
//!   - Double-click the top strip (or press F11) to toggle maximize
//!   - Drag a maximized window down to restore it
//!   - Drag the edges and corners to resize
//!
//! Set RUST_LOG=horizon_chrome=debug to see the state transitions.

use std::sync::Arc;

use horizon_chrome::window::{ChromeConfig, WinitChromeHost, WinitEventAdapter};
use horizon_chrome::Size;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

struct App {
    config: ChromeConfig,
    state: Option<(WinitChromeHost, WinitEventAdapter)>,
}

impl App {
    fn create(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let attrs = Window::default_attributes()
            .with_title("Horizon Chrome - Borderless")
            .with_inner_size(LogicalSize::new(900, 600))
            .with_decorations(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let mut host = WinitChromeHost::new(window).with_minimum_size(Size::new(400, 300));
        let mut adapter = WinitEventAdapter::new(self.config.clone())?;

        let controller = adapter.controller_mut();
        controller.maximized_changed.connect(|maximized| {
            tracing::info!(maximized = *maximized, "maximized state changed");
        });
        controller.snapped.connect(|action| {
            tracing::info!(%action, "snapped");
        });

        adapter.on_first_show(&mut host);
        self.state = Some((host, adapter));
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(err) = self.create(event_loop) {
            tracing::error!(%err, "failed to create window");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some((host, adapter)) = self.state.as_mut() else {
            return;
        };

        adapter.handle_window_event(host, &event);
        if host.take_close_request() {
            event_loop.exit();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("horizon_chrome=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ChromeConfig::load(path)?,
        None => ChromeConfig::new(),
    };

    let event_loop = EventLoop::new()?;
    let mut app = App {
        config,
        state: None,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
