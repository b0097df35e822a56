//! Theme records, mode selection, and built-in fallback tables.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A token configuration: semantic kebab-case names to raw values.
pub type TokenConfig = BTreeMap<String, String>;

/// Resolved rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// The operator-facing mode selector: light, dark, or follow the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ModePreference {
    /// Resolve the preference against the embedder-reported system setting.
    pub fn resolve(self, system_prefers_dark: bool) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
            Self::System if system_prefers_dark => ThemeMode::Dark,
            Self::System => ThemeMode::Light,
        }
    }
}

/// A tenant theme record as exchanged with the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub light_mode_config: TokenConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode_config: Option<TokenConfig>,
    pub is_active: bool,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Theme {
    /// The built-in theme used when fetching a real one fails.
    ///
    /// Keeps the rest of the system functioning on neutral values; the
    /// fetch error itself is surfaced separately to the caller.
    pub fn fallback() -> Self {
        let now = Utc::now();
        Self {
            id: "fallback".to_string(),
            company_id: String::new(),
            name: "Fallback".to_string(),
            light_mode_config: fallback_light_config(),
            dark_mode_config: Some(fallback_dark_config()),
            is_active: false,
            is_default: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Select the config for a mode, falling back to light when the theme
    /// defines no dark table.
    pub fn config_for(&self, mode: ThemeMode) -> &TokenConfig {
        match mode {
            ThemeMode::Dark => self.dark_mode_config.as_ref().unwrap_or(&self.light_mode_config),
            ThemeMode::Light => &self.light_mode_config,
        }
    }
}

/// Partial theme fields for persistence patches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_mode_config: Option<TokenConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode_config: Option<TokenConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

fn base_fallback_config() -> TokenConfig {
    let mut config = TokenConfig::new();
    config.insert("radius".to_string(), "0.5rem".to_string());
    config.insert(
        "font-sans".to_string(),
        "ui-sans-serif, system-ui, sans-serif".to_string(),
    );
    config
}

/// Static light-mode token table for the fallback theme.
pub fn fallback_light_config() -> TokenConfig {
    let mut config = base_fallback_config();
    for (key, value) in [
        ("background", "oklch(1 0 0)"),
        ("foreground", "oklch(0.145 0 0)"),
        ("primary", "oklch(0.546 0.215 262.8)"),
        ("primary-foreground", "oklch(1 0 0)"),
        ("secondary", "oklch(0.97 0 0)"),
        ("secondary-foreground", "oklch(0.205 0 0)"),
        ("destructive", "oklch(0.577 0.215 27.3)"),
        ("destructive-foreground", "oklch(1 0 0)"),
        ("muted", "oklch(0.97 0 0)"),
        ("muted-foreground", "oklch(0.556 0 0)"),
        ("accent", "oklch(0.97 0 0)"),
        ("accent-foreground", "oklch(0.205 0 0)"),
        ("border", "oklch(0.922 0 0)"),
        ("ring", "oklch(0.708 0 0)"),
    ] {
        config.insert(key.to_string(), value.to_string());
    }
    config
}

/// Static dark-mode token table for the fallback theme.
pub fn fallback_dark_config() -> TokenConfig {
    let mut config = base_fallback_config();
    for (key, value) in [
        ("background", "oklch(0.145 0 0)"),
        ("foreground", "oklch(0.985 0 0)"),
        ("primary", "oklch(0.623 0.188 259.8)"),
        ("primary-foreground", "oklch(1 0 0)"),
        ("secondary", "oklch(0.269 0 0)"),
        ("secondary-foreground", "oklch(0.985 0 0)"),
        ("destructive", "oklch(0.704 0.191 22.2)"),
        ("destructive-foreground", "oklch(0.985 0 0)"),
        ("muted", "oklch(0.269 0 0)"),
        ("muted-foreground", "oklch(0.708 0 0)"),
        ("accent", "oklch(0.269 0 0)"),
        ("accent-foreground", "oklch(0.985 0 0)"),
        ("border", "oklch(0.269 0 0)"),
        ("ring", "oklch(0.556 0 0)"),
    ] {
        config.insert(key.to_string(), value.to_string());
    }
    config
}
