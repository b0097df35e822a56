//! The resolved token map and the semantic token vocabulary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Semantic tokens whose values are colors and get normalized.
///
/// Everything else (radius, font stacks, spacing) passes through verbatim.
pub const COLOR_TOKENS: &[&str] = &[
    "background",
    "foreground",
    "card",
    "popover",
    "primary",
    "secondary",
    "destructive",
    "muted",
    "accent",
    "border",
    "input",
    "ring",
];

/// Base tokens whose `-foreground` partner is computed from contrast
/// when the theme does not define one.
pub const FOREGROUND_PAIRED: &[&str] = &["primary", "secondary", "destructive"];

/// Whether values under this key are color text.
pub fn is_color_token(key: &str) -> bool {
    COLOR_TOKENS.contains(&key) || key.ends_with("-foreground")
}

/// The flattened result of a token resolution.
///
/// Ordered internally so iteration, publication, and export are
/// deterministic. A resolution produces a fresh map; nothing mutates one
/// after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenMap {
    entries: BTreeMap<String, String>,
}

impl TokenMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a token value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|value| value.as_str())
    }

    /// Check whether a token is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set a token value. Empty keys are rejected silently; resolved maps
    /// never carry them.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        self.entries.insert(key, value.into());
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_token_recognition() {
        assert!(is_color_token("primary"));
        assert!(is_color_token("border"));
        assert!(is_color_token("primary-foreground"));
        assert!(is_color_token("muted-foreground"));
        assert!(!is_color_token("radius"));
        assert!(!is_color_token("font-sans"));
    }

    #[test]
    fn empty_keys_are_dropped() {
        let mut map = TokenMap::new();
        map.insert("", "oklch(1 0 0)");
        map.insert("primary", "oklch(0.6 0.2 260)");
        assert_eq!(map.len(), 1);
        assert!(map.contains("primary"));
    }

    #[test]
    fn iteration_is_key_ordered() {
        let mut map = TokenMap::new();
        map.insert("ring", "a");
        map.insert("accent", "b");
        map.insert("muted", "c");
        let keys: Vec<_> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["accent", "muted", "ring"]);
    }
}
