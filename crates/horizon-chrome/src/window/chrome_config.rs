//! Chrome configuration.
//!
//! [`ChromeConfig`] holds every tunable of the chrome controller. It can be
//! built in code with the `with_*` builder methods or loaded from TOML:
//!
//! ```toml
//! border_width = 6
//! title_bar_height = 36
//! snap_threshold = 12
//!
//! [cosmetics]
//! shadow_radius = 12
//! corner_radius = 8.0
//!
//! [shortcuts]
//! toggle_maximize = "F11"
//! minimize = "Meta+Down"
//! ```
//!
//! Missing keys take their defaults.

use std::collections::BTreeMap;
use std::path::Path;

use horizon_chrome_core::Rect;
use horizon_chrome_core::logging::targets;
use serde::{Deserialize, Serialize};

use super::shortcuts::{ChromeAction, KeyCombination, ShortcutMap};
use crate::error::{ChromeError, Result};

/// Default resize border thickness in pixels.
pub const DEFAULT_BORDER_WIDTH: i32 = 8;
/// Default title bar height in pixels.
pub const DEFAULT_TITLE_BAR_HEIGHT: i32 = 30;
/// Default edge-snap proximity in pixels.
pub const DEFAULT_SNAP_THRESHOLD: i32 = 10;
/// Default fraction of the work area used when a drag-restore has no
/// recorded geometry to return to.
pub const DEFAULT_RESTORE_FALLBACK_FRACTION: f64 = 0.9;
/// Default vertical distance added between the window top and the pointer
/// when a drag pulls a window out of the maximized state.
pub const DEFAULT_DRAG_RESTORE_OFFSET: i32 = 10;

/// Shadow and rounded-corner decorations drawn by the application.
///
/// Decorations are shown while the window is normal and dropped while it is
/// maximized, where a shadow would fall off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameCosmetics {
    /// Drop-shadow blur radius in pixels.
    pub shadow_radius: i32,
    /// Corner rounding radius in pixels.
    pub corner_radius: f32,
}

impl Default for FrameCosmetics {
    fn default() -> Self {
        Self {
            shadow_radius: 10,
            corner_radius: 6.0,
        }
    }
}

/// Configuration for the window chrome controller.
///
/// # Defaults
///
/// - Border width: 8 pixels
/// - Title bar height: 30 pixels
/// - Snap threshold: 10 pixels, snapping on release only
/// - Restore fallback fraction: 0.9
/// - Drag-restore offset: 10 pixels
/// - No cosmetics
/// - `F11` toggles maximize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Thickness of the invisible resize band along each edge.
    pub border_width: i32,
    /// Height of the title-bar strip at the top of the window.
    pub title_bar_height: i32,
    /// Proximity to a screen edge that triggers a snap.
    pub snap_threshold: i32,
    /// Whether edge snapping is enabled at all.
    pub snap_enabled: bool,
    /// Also evaluate edge snapping on every drag move, not just on release.
    pub snap_while_moving: bool,
    /// Fraction of the work area used for a drag-restore with no recorded
    /// restore geometry. Must be in `(0, 1]`.
    pub restore_fallback_fraction: f64,
    /// Extra vertical distance between the restored window's top edge and
    /// the pointer after a drag-restore.
    pub drag_restore_offset: i32,
    /// Optional shadow/rounded-corner decorations.
    pub cosmetics: Option<FrameCosmetics>,
    /// Shortcut strings keyed by action.
    pub shortcuts: BTreeMap<ChromeAction, String>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        let mut shortcuts = BTreeMap::new();
        shortcuts.insert(ChromeAction::ToggleMaximize, "F11".to_string());

        Self {
            border_width: DEFAULT_BORDER_WIDTH,
            title_bar_height: DEFAULT_TITLE_BAR_HEIGHT,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            snap_enabled: true,
            snap_while_moving: false,
            restore_fallback_fraction: DEFAULT_RESTORE_FALLBACK_FRACTION,
            drag_restore_offset: DEFAULT_DRAG_RESTORE_OFFSET,
            cosmetics: None,
            shortcuts,
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded chrome configuration");
        Ok(config)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check every value is in range and every shortcut parses.
    pub fn validate(&self) -> Result<()> {
        non_negative("border_width", self.border_width)?;
        non_negative("title_bar_height", self.title_bar_height)?;
        non_negative("snap_threshold", self.snap_threshold)?;

        let fraction = self.restore_fallback_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ChromeError::InvalidConfig {
                field: "restore_fallback_fraction",
                reason: format!("must be in (0, 1], got {fraction}"),
            });
        }

        if let Some(cosmetics) = &self.cosmetics {
            non_negative("cosmetics.shadow_radius", cosmetics.shadow_radius)?;
            if cosmetics.corner_radius < 0.0 {
                return Err(ChromeError::InvalidConfig {
                    field: "cosmetics.corner_radius",
                    reason: "must not be negative".to_string(),
                });
            }
        }

        self.shortcut_map().map(|_| ())
    }

    /// Build the shortcut map from the configured strings.
    pub fn shortcut_map(&self) -> Result<ShortcutMap> {
        let mut map = ShortcutMap::new();
        for (action, text) in &self.shortcuts {
            let combo: KeyCombination = text.parse()?;
            map.bind(combo, *action);
        }
        Ok(map)
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the resize border thickness.
    pub fn with_border_width(mut self, width: i32) -> Self {
        self.border_width = width.max(0);
        self
    }

    /// Set the title bar height.
    pub fn with_title_bar_height(mut self, height: i32) -> Self {
        self.title_bar_height = height.max(0);
        self
    }

    /// Set the edge-snap proximity.
    pub fn with_snap_threshold(mut self, threshold: i32) -> Self {
        self.snap_threshold = threshold.max(0);
        self
    }

    /// Enable or disable edge snapping.
    pub fn with_snap_enabled(mut self, enabled: bool) -> Self {
        self.snap_enabled = enabled;
        self
    }

    /// Evaluate snapping continuously during drags.
    pub fn with_snap_while_moving(mut self, enabled: bool) -> Self {
        self.snap_while_moving = enabled;
        self
    }

    /// Set the drag-restore fallback fraction, clamped into `(0, 1]`.
    pub fn with_restore_fallback_fraction(mut self, fraction: f64) -> Self {
        self.restore_fallback_fraction = fraction.clamp(f64::EPSILON, 1.0);
        self
    }

    /// Set the drag-restore vertical offset.
    pub fn with_drag_restore_offset(mut self, offset: i32) -> Self {
        self.drag_restore_offset = offset;
        self
    }

    /// Enable shadow/rounded-corner decorations.
    pub fn with_cosmetics(mut self, cosmetics: FrameCosmetics) -> Self {
        self.cosmetics = Some(cosmetics);
        self
    }

    /// Bind a shortcut string to an action.
    pub fn with_shortcut(mut self, action: ChromeAction, shortcut: impl Into<String>) -> Self {
        self.shortcuts.insert(action, shortcut.into());
        self
    }

    // =========================================================================
    // Regions
    // =========================================================================

    /// The title-bar strip of a window of the given width, in window-local
    /// coordinates.
    pub fn title_bar_rect(&self, window_width: i32) -> Rect {
        Rect::new(0, 0, window_width, self.title_bar_height)
    }
}

fn non_negative(field: &'static str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(ChromeError::InvalidConfig {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ChromeConfig::new();
        assert_eq!(config.border_width, 8);
        assert_eq!(config.title_bar_height, 30);
        assert_eq!(config.snap_threshold, 10);
        assert!(config.snap_enabled);
        assert!(!config.snap_while_moving);
        assert!(config.cosmetics.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ChromeConfig::from_toml_str("border_width = 4\n").unwrap();
        assert_eq!(config.border_width, 4);
        assert_eq!(config.title_bar_height, 30);
        assert_eq!(
            config.shortcuts.get(&ChromeAction::ToggleMaximize).map(String::as_str),
            Some("F11")
        );
    }

    #[test]
    fn test_full_toml() {
        let text = r#"
            border_width = 6
            title_bar_height = 36
            snap_threshold = 12
            snap_while_moving = true
            drag_restore_offset = 0

            [cosmetics]
            shadow_radius = 12
            corner_radius = 8.0

            [shortcuts]
            toggle_maximize = "F11"
            minimize = "Meta+Down"
        "#;
        let config = ChromeConfig::from_toml_str(text).unwrap();
        assert_eq!(config.title_bar_height, 36);
        assert!(config.snap_while_moving);
        assert_eq!(
            config.cosmetics,
            Some(FrameCosmetics {
                shadow_radius: 12,
                corner_radius: 8.0
            })
        );
        assert_eq!(config.shortcut_map().unwrap().bindings().len(), 2);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = ChromeConfig::from_toml_str("border_width = -1").unwrap_err();
        assert!(matches!(
            err,
            ChromeError::InvalidConfig {
                field: "border_width",
                ..
            }
        ));

        let err = ChromeConfig::from_toml_str("restore_fallback_fraction = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ChromeError::InvalidConfig {
                field: "restore_fallback_fraction",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_shortcut() {
        let err = ChromeConfig::from_toml_str("[shortcuts]\nclose = \"Ctrl+\"\n").unwrap_err();
        assert!(matches!(err, ChromeError::Shortcut(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = ChromeConfig::from_toml_str("border_width = [").unwrap_err();
        assert!(matches!(err, ChromeError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title_bar_height = 40").unwrap();
        let config = ChromeConfig::load(file.path()).unwrap();
        assert_eq!(config.title_bar_height, 40);

        let missing = ChromeConfig::load(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ChromeError::Io(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ChromeConfig::new()
            .with_border_width(5)
            .with_cosmetics(FrameCosmetics::default())
            .with_shortcut(ChromeAction::Close, "Alt+F4");
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("border_width = 5"));
        let parsed = ChromeConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_builder_clamps() {
        let config = ChromeConfig::new()
            .with_border_width(-3)
            .with_title_bar_height(-1)
            .with_snap_threshold(-10)
            .with_restore_fallback_fraction(2.0);
        assert_eq!(config.border_width, 0);
        assert_eq!(config.title_bar_height, 0);
        assert_eq!(config.snap_threshold, 0);
        assert_eq!(config.restore_fallback_fraction, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_title_bar_rect() {
        let config = ChromeConfig::new();
        assert_eq!(config.title_bar_rect(800), Rect::new(0, 0, 800, 30));
    }
}
