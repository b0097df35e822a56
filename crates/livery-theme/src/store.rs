//! Persistence collaborator contracts and the in-memory implementation.

use std::collections::BTreeMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::theme::{Theme, ThemePatch};

/// The remote persistence collaborator, seen through a narrow seam.
///
/// Failures are opaque to the engine: it surfaces them to the caller and
/// never retries.
pub trait ThemeStore {
    /// Fetch one theme by id.
    fn fetch_theme(&self, theme_id: &str) -> Result<Theme>;

    /// Fetch all of a company's themes.
    fn fetch_company_themes(&self, company_id: &str) -> Result<Vec<Theme>>;

    /// Apply partial fields to a stored theme and return the updated record.
    fn persist_theme(&self, theme_id: &str, patch: &ThemePatch) -> Result<Theme>;
}

/// Pick the theme an editing session should open with: the active theme,
/// else the default, else the first on record.
pub fn select_company_theme(themes: &[Theme]) -> Option<&Theme> {
    themes
        .iter()
        .find(|theme| theme.is_active)
        .or_else(|| themes.iter().find(|theme| theme.is_default))
        .or_else(|| themes.first())
}

/// In-memory store for tests and embedding demos.
#[derive(Debug, Default)]
pub struct InMemoryThemeStore {
    themes: RwLock<BTreeMap<String, Theme>>,
}

impl InMemoryThemeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a theme record.
    pub fn insert(&self, theme: Theme) {
        self.themes.write().insert(theme.id.clone(), theme);
    }
}

impl ThemeStore for InMemoryThemeStore {
    fn fetch_theme(&self, theme_id: &str) -> Result<Theme> {
        self.themes
            .read()
            .get(theme_id)
            .cloned()
            .ok_or_else(|| Error::unknown_theme(theme_id))
    }

    fn fetch_company_themes(&self, company_id: &str) -> Result<Vec<Theme>> {
        let themes: Vec<Theme> = self
            .themes
            .read()
            .values()
            .filter(|theme| theme.company_id == company_id)
            .cloned()
            .collect();
        if themes.is_empty() {
            return Err(Error::no_company_theme(company_id));
        }
        Ok(themes)
    }

    fn persist_theme(&self, theme_id: &str, patch: &ThemePatch) -> Result<Theme> {
        let mut themes = self.themes.write();
        let theme = themes
            .get_mut(theme_id)
            .ok_or_else(|| Error::unknown_theme(theme_id))?;

        if let Some(name) = &patch.name {
            theme.name = name.clone();
        }
        if let Some(light) = &patch.light_mode_config {
            theme.light_mode_config = light.clone();
        }
        if let Some(dark) = &patch.dark_mode_config {
            theme.dark_mode_config = Some(dark.clone());
        }
        if let Some(is_active) = patch.is_active {
            theme.is_active = is_active;
        }
        theme.updated_at = Utc::now();

        Ok(theme.clone())
    }
}
