//! Horizon Chrome - custom window chrome for frameless windows.
//!
//! Borderless windows lose the title bar, resize frame and maximize button
//! the window manager would normally draw. This crate puts the behavior
//! back under application control:
//!
//! - **Resize borders**: invisible bands along each edge, with cursor feedback
//! - **Title-bar dragging**, including pulling a maximized window back out
//! - **Maximize/restore** as an application-defined state driving two
//!   mutually exclusive chrome buttons
//! - **Edge snapping**: drop on the top edge to maximize, left or right edge
//!   for half-screen
//! - **Shortcuts** and TOML **configuration**
//!
//! The state machine lives in [`window::WindowChromeController`]; it talks to
//! the toolkit through the [`window::ChromeHost`] trait. A winit host and
//! event adapter are included.
//!
//! # Example
//!
//! ```no_run
//! use horizon_chrome::window::ChromeConfig;
//!
//! fn main() -> Result<(), horizon_chrome::ChromeError> {
//!     let config = ChromeConfig::load("chrome.toml")?;
//!     println!("title bar: {}px", config.title_bar_height);
//!     Ok(())
//! }
//! ```

pub use horizon_chrome_core::*;

mod error;
pub mod window;

pub use error::{ChromeError, Result, ShortcutParseError};
