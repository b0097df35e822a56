//! Flattening a theme, mode, and override layer into a token map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::theme::{Theme, ThemeMode};
use crate::tokens::{FOREGROUND_PAIRED, TokenMap, is_color_token};
use livery_color::{contrast_color, normalize};

/// Transient live-preview values layered over the base theme.
///
/// Tagged with the mode it was captured for; a layer tagged for the other
/// mode is ignored. The session discards the layer outright whenever the
/// active theme or mode changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideLayer {
    mode: ThemeMode,
    values: BTreeMap<String, String>,
}

impl OverrideLayer {
    /// Create an empty layer for a mode.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            values: BTreeMap::new(),
        }
    }

    /// Set a preview value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Merge a batch of values, as produced by the external import parser.
    pub fn extend(&mut self, values: impl IntoIterator<Item = (String, String)>) {
        self.values.extend(values);
    }
}

/// A per-field color that is either linked to another token or a literal.
///
/// The two states are mutually exclusive; switching between them is an
/// explicit transition of the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ColorBinding {
    /// Follow another token's resolved value.
    Linked { target: String },
    /// A literal color, normalized on resolution.
    Custom { value: String },
}

/// Resolve a color binding against the current token map.
///
/// A dangling link degrades to the neutral fallback, same as malformed
/// literal text.
pub fn resolve_binding(binding: &ColorBinding, tokens: &TokenMap) -> String {
    match binding {
        ColorBinding::Linked { target } => match tokens.get(target) {
            Some(value) => value.to_string(),
            None => {
                tracing::debug!(target, "linked color target missing from token map");
                livery_color::FALLBACK.to_string()
            }
        },
        ColorBinding::Custom { value } => normalize(value),
    }
}

/// Flatten a theme, active mode, and optional override layer into a fresh
/// token map.
///
/// Color-token values are canonicalized; other values pass verbatim.
/// Overrides win per key when their tagged mode matches. Missing
/// `-foreground` partners for the pairable base tokens are computed from
/// contrast against the authored base value (hex input is judged by
/// perceptual luminance, canonical input by its lightness channel).
pub fn resolve_tokens(
    theme: &Theme,
    mode: ThemeMode,
    overrides: Option<&OverrideLayer>,
) -> TokenMap {
    let base = theme.config_for(mode);

    // Authored values as last seen, for contrast computation.
    let mut authored: BTreeMap<&str, &str> = BTreeMap::new();
    let mut map = TokenMap::new();

    for (key, value) in base {
        authored.insert(key, value);
        map.insert(key.clone(), resolve_value(key, value));
    }

    if let Some(layer) = overrides.filter(|layer| layer.mode == mode) {
        for (key, value) in &layer.values {
            authored.insert(key, value);
            map.insert(key.clone(), resolve_value(key, value));
        }
    }

    for base_key in FOREGROUND_PAIRED {
        let foreground_key = format!("{base_key}-foreground");
        if map.contains(&foreground_key) {
            continue;
        }
        if let Some(source) = authored.get(base_key) {
            map.insert(foreground_key, contrast_color(source).as_oklch());
        }
    }

    map
}

fn resolve_value(key: &str, value: &str) -> String {
    if is_color_token(key) {
        normalize(value)
    } else {
        value.to_string()
    }
}
