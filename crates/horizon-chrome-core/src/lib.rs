//! Core types for Horizon Chrome.
//!
//! This crate provides the toolkit-independent building blocks used by the
//! `horizon-chrome` window chrome controller:
//!
//! - **Geometry**: integer [`Point`], [`Size`] and [`Rect`] in screen pixels
//! - **Signals**: [`Signal`] for notifying the cosmetic layer of state changes
//! - **Properties**: [`Property`] with change detection
//! - **Logging**: `tracing` targets and macros shared by the chrome crates
//!
//! # Example
//!
//! ```
//! use horizon_chrome_core::{Property, Rect, Signal};
//!
//! let geometry = Property::new(Rect::new(100, 100, 800, 600));
//! let geometry_changed = Signal::<Rect>::new();
//!
//! let new_rect = Rect::new(0, 0, 1920, 1080);
//! if geometry.set(new_rect) {
//!     geometry_changed.emit(new_rect);
//! }
//! ```

pub mod geometry;
pub mod logging;
pub mod property;
pub mod signal;

pub use geometry::{Point, Rect, Size};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
