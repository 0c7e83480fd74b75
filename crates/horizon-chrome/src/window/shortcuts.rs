//! Keyboard shortcuts for chrome actions.
//!
//! A frameless window loses the window manager's own key bindings for
//! maximizing and minimizing, so the chrome offers its own. Key combinations
//! are written in the usual human-readable form:
//!
//! - `"F11"`
//! - `"Meta+Up"`
//! - `"Ctrl+Shift+M"`
//!
//! ```
//! use horizon_chrome::window::{ChromeAction, KeyCombination, ShortcutMap};
//! use winit::keyboard::{Key, ModifiersState, NamedKey};
//!
//! let mut map = ShortcutMap::new();
//! map.bind("Meta+Down".parse::<KeyCombination>().unwrap(), ChromeAction::Minimize);
//!
//! assert_eq!(
//!     map.lookup(&Key::Named(NamedKey::ArrowDown), ModifiersState::SUPER),
//!     Some(ChromeAction::Minimize)
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use winit::keyboard::{Key, ModifiersState, NamedKey, SmolStr};

use crate::error::ShortcutParseError;

/// Actions the chrome can perform on behalf of a shortcut or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromeAction {
    Close,
    Minimize,
    Maximize,
    Restore,
    /// Maximize when normal, restore when maximized.
    ToggleMaximize,
}

/// Named keys accepted in shortcut strings, with their display names.
const NAMED_KEYS: &[(&str, NamedKey)] = &[
    ("F1", NamedKey::F1),
    ("F2", NamedKey::F2),
    ("F3", NamedKey::F3),
    ("F4", NamedKey::F4),
    ("F5", NamedKey::F5),
    ("F6", NamedKey::F6),
    ("F7", NamedKey::F7),
    ("F8", NamedKey::F8),
    ("F9", NamedKey::F9),
    ("F10", NamedKey::F10),
    ("F11", NamedKey::F11),
    ("F12", NamedKey::F12),
    ("Up", NamedKey::ArrowUp),
    ("Down", NamedKey::ArrowDown),
    ("Left", NamedKey::ArrowLeft),
    ("Right", NamedKey::ArrowRight),
    ("Enter", NamedKey::Enter),
    ("Escape", NamedKey::Escape),
    ("Space", NamedKey::Space),
    ("Tab", NamedKey::Tab),
    ("Home", NamedKey::Home),
    ("End", NamedKey::End),
];

fn parse_key(name: &str) -> Result<Key, ShortcutParseError> {
    let lower = name.to_lowercase();
    let alias = match lower.as_str() {
        "esc" => "escape",
        "return" => "enter",
        "arrowup" => "up",
        "arrowdown" => "down",
        "arrowleft" => "left",
        "arrowright" => "right",
        other => other,
    };

    if let Some((_, named)) = NAMED_KEYS
        .iter()
        .find(|(display, _)| display.eq_ignore_ascii_case(alias))
    {
        return Ok(Key::Named(*named));
    }

    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(Key::Character(SmolStr::new(
            c.to_lowercase().to_string(),
        ))),
        _ => Err(ShortcutParseError::UnknownKey(name.to_string())),
    }
}

/// A single key with the modifiers that must be held.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    /// The primary key. Character keys are stored lowercase.
    pub key: Key,
    /// The modifier keys that must be held.
    pub modifiers: ModifiersState,
}

impl KeyCombination {
    /// Create a new key combination.
    pub fn new(key: Key, modifiers: ModifiersState) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combination with no modifiers.
    pub fn key_only(key: Key) -> Self {
        Self::new(key, ModifiersState::empty())
    }

    /// Check if a key press matches this combination.
    ///
    /// Character keys compare case-insensitively, so `Ctrl+Shift+M` matches
    /// the `"M"` that winit reports while shift is held.
    pub fn matches(&self, key: &Key, modifiers: ModifiersState) -> bool {
        if self.modifiers != modifiers {
            return false;
        }
        match (&self.key, key) {
            (Key::Character(expected), Key::Character(actual)) => {
                expected.to_lowercase() == actual.to_lowercase()
            }
            (expected, actual) => expected == actual,
        }
    }
}

impl FromStr for KeyCombination {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let mut modifiers = ModifiersState::empty();
        let mut key: Option<Key> = None;

        for part in s.split('+') {
            let part = part.trim();
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= ModifiersState::CONTROL,
                "alt" | "option" => modifiers |= ModifiersState::ALT,
                "shift" => modifiers |= ModifiersState::SHIFT,
                "meta" | "super" | "cmd" | "command" | "win" => modifiers |= ModifiersState::SUPER,
                _ => {
                    if key.is_some() {
                        return Err(ShortcutParseError::MultipleKeys(s.to_string()));
                    }
                    key = Some(parse_key(part)?);
                }
            }
        }

        key.map(|key| Self::new(key, modifiers))
            .ok_or(ShortcutParseError::NoKey)
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if self.modifiers.control_key() {
            parts.push("Ctrl".into());
        }
        if self.modifiers.alt_key() {
            parts.push("Alt".into());
        }
        if self.modifiers.shift_key() {
            parts.push("Shift".into());
        }
        if self.modifiers.super_key() {
            parts.push("Meta".into());
        }

        let key = match &self.key {
            Key::Named(named) => NAMED_KEYS
                .iter()
                .find(|(_, k)| k == named)
                .map(|(display, _)| display.to_string())
                .unwrap_or_else(|| format!("{named:?}")),
            Key::Character(c) => c.to_uppercase(),
            other => format!("{other:?}"),
        };
        parts.push(key);

        write!(f, "{}", parts.join("+"))
    }
}

/// Bindings from key combinations to chrome actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutMap {
    bindings: Vec<(KeyCombination, ChromeAction)>,
}

impl Default for ShortcutMap {
    /// `F11` toggles the maximized state.
    fn default() -> Self {
        let mut map = Self::new();
        map.bind(
            KeyCombination::key_only(Key::Named(NamedKey::F11)),
            ChromeAction::ToggleMaximize,
        );
        map
    }
}

impl ShortcutMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind a combination, replacing any action it was bound to before.
    pub fn bind(&mut self, combo: KeyCombination, action: ChromeAction) {
        self.bindings.retain(|(existing, _)| *existing != combo);
        self.bindings.push((combo, action));
    }

    /// Remove every binding for `action`.
    pub fn unbind_action(&mut self, action: ChromeAction) {
        self.bindings.retain(|(_, bound)| *bound != action);
    }

    /// Find the action bound to a key press.
    pub fn lookup(&self, key: &Key, modifiers: ModifiersState) -> Option<ChromeAction> {
        self.bindings
            .iter()
            .find(|(combo, _)| combo.matches(key, modifiers))
            .map(|(_, action)| *action)
    }

    /// All bindings in insertion order.
    pub fn bindings(&self) -> &[(KeyCombination, ChromeAction)] {
        &self.bindings
    }

    /// Check if the map has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
