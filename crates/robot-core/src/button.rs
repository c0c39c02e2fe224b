//! Mouse button names

use crate::normalize::canonicalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mouse button accepted by the `click` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Center,
    Right,
}

impl MouseButton {
    /// All buttons, in display order
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Center, MouseButton::Right];

    /// Canonical name passed to the input backend
    pub fn as_str(&self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Center => "center",
            MouseButton::Right => "right",
        }
    }

    /// Resolve a raw button name.
    ///
    /// The name is canonicalized first; `centre` and `middle` are accepted
    /// as synonyms of `center`.
    pub fn resolve(raw: &str) -> Option<Self> {
        match canonicalize(raw).as_str() {
            "left" => Some(MouseButton::Left),
            "center" | "centre" | "middle" => Some(MouseButton::Center),
            "right" => Some(MouseButton::Right),
            _ => None,
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_canonical_names() {
        assert_eq!(MouseButton::resolve("left"), Some(MouseButton::Left));
        assert_eq!(MouseButton::resolve("center"), Some(MouseButton::Center));
        assert_eq!(MouseButton::resolve("right"), Some(MouseButton::Right));
    }

    #[test]
    fn test_resolve_synonyms_and_case() {
        assert_eq!(MouseButton::resolve("centre"), Some(MouseButton::Center));
        assert_eq!(MouseButton::resolve("middle"), Some(MouseButton::Center));
        assert_eq!(MouseButton::resolve("CENTER"), Some(MouseButton::Center));
        assert_eq!(MouseButton::resolve("  Right "), Some(MouseButton::Right));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(MouseButton::resolve("up"), None);
        assert_eq!(MouseButton::resolve(""), None);
        assert_eq!(MouseButton::resolve("mid"), None);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&MouseButton::Center).unwrap();
        assert_eq!(json, "\"center\"");
        for button in MouseButton::ALL {
            assert_eq!(button.to_string(), button.as_str());
        }
    }
}
