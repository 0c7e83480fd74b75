//! Error types for the chrome crate.
//!
//! Pointer handling never fails: degenerate input is clamped or ignored.
//! Errors only come from loading or saving configuration and parsing
//! shortcuts.

use thiserror::Error;

/// Errors that can occur while configuring window chrome.
#[derive(Error, Debug)]
pub enum ChromeError {
    /// The configuration text is not valid TOML or has the wrong shape.
    #[error("failed to parse chrome configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to serialize chrome configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A configuration value is out of range.
    #[error("invalid chrome configuration: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// A shortcut string could not be parsed.
    #[error("invalid shortcut: {0}")]
    Shortcut(#[from] ShortcutParseError),

    /// The configuration file could not be read.
    #[error("failed to read chrome configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced when parsing a key combination such as `"Ctrl+Shift+M"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    /// The string is empty.
    #[error("empty key combination")]
    Empty,

    /// Only modifiers were given.
    #[error("no key specified (only modifiers)")]
    NoKey,

    /// More than one non-modifier key was given.
    #[error("more than one key in `{0}`")]
    MultipleKeys(String),

    /// Unknown key name.
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

/// Result type for chrome configuration operations.
pub type Result<T> = std::result::Result<T, ChromeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChromeError::InvalidConfig {
            field: "border_width",
            reason: "must not be negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid chrome configuration: `border_width` must not be negative"
        );

        let err = ChromeError::from(ShortcutParseError::UnknownKey("Hyper".into()));
        assert!(err.to_string().contains("Hyper"));

        let err = ChromeError::from(<toml::ser::Error as serde::ser::Error>::custom(
            "unsupported value",
        ));
        assert!(matches!(err, ChromeError::ConfigSerialize(_)));
        assert!(err.to_string().starts_with("failed to serialize chrome configuration"));
    }
}
