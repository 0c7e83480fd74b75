//! Change-tracking properties.
//!
//! A [`Property`] pairs with a [`Signal`](crate::Signal): `set` reports
//! whether the value actually changed, and the owner emits its notification
//! only in that case. The chrome controller uses this for the maximized flag,
//! which makes "maximize while maximized" a no-op by construction.
//!
//! # Example
//!
//! ```
//! use horizon_chrome_core::{Property, Signal};
//!
//! struct Toggle {
//!     on: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn set_on(&self, on: bool) {
//!         if self.on.set(on) {
//!             self.toggled.emit(on);
//!         }
//!     }
//! }
//!
//! let toggle = Toggle { on: Property::new(false), toggled: Signal::new() };
//! toggle.set_on(true);
//! assert!(toggle.on.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value holder with change detection.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_reports_change() {
        let prop = Property::new(false);
        assert!(!prop.set(false));
        assert!(prop.set(true));
        assert!(!prop.set(true));
        assert!(prop.get());
    }

    #[test]
    fn test_property_clone_and_default() {
        let prop = Property::new(true);
        let copy = prop.clone();
        assert!(prop.set(false));
        assert!(copy.get());
        assert!(!Property::<bool>::default().get());
    }
}
