//! The editing-session context object and its ordered effect dispatch.
//!
//! A session owns the active theme, mode, override layer, cascade state,
//! and the publication pair. Every mutation runs the same ordered tail:
//! recompute the token map, atomically replace the style block, then
//! toggle the mode marker if the mode flipped. Nothing here is implicit;
//! consumers hold the session by reference rather than reaching for
//! globals.

use crate::cascade::{Breakpoint, CascadeResolver, LayoutPatch, LayoutValues};
use crate::error::{Error, Result};
use crate::export::{self, CssExportOptions};
use crate::publish::{StyleSheetPublisher, StyleSurface};
use crate::resolve::{ColorBinding, OverrideLayer, resolve_binding, resolve_tokens};
use crate::store::{ThemeStore, select_company_theme};
use crate::theme::{ModePreference, Theme, ThemeMode, ThemePatch};
use crate::tokens::TokenMap;

/// The result of starting a session.
///
/// A fetch failure does not prevent the session from starting: it opens on
/// the built-in fallback theme and the opaque error rides along for the
/// caller's error boundary to display.
pub struct SessionStart<S: StyleSurface> {
    pub session: ThemeSession<S>,
    pub fetch_error: Option<Error>,
}

/// One operator's live editing session over a theme and layout tree.
pub struct ThemeSession<S: StyleSurface> {
    theme: Theme,
    preference: ModePreference,
    system_prefers_dark: bool,
    mode: ThemeMode,
    overrides: Option<OverrideLayer>,
    tokens: TokenMap,
    cascade: CascadeResolver,
    publisher: StyleSheetPublisher,
    surface: S,
}

impl<S: StyleSurface> ThemeSession<S> {
    /// Start a session for one theme id.
    pub fn start(
        store: &dyn ThemeStore,
        theme_id: &str,
        preference: ModePreference,
        system_prefers_dark: bool,
        surface: S,
    ) -> SessionStart<S> {
        let (theme, fetch_error) = match store.fetch_theme(theme_id) {
            Ok(theme) => (theme, None),
            Err(error) => {
                tracing::warn!(theme_id, %error, "theme fetch failed, starting on fallback");
                (Theme::fallback(), Some(error))
            }
        };
        Self::start_with(theme, preference, system_prefers_dark, surface, fetch_error)
    }

    /// Start a session on a company's selected theme (active, else
    /// default, else first).
    pub fn start_for_company(
        store: &dyn ThemeStore,
        company_id: &str,
        preference: ModePreference,
        system_prefers_dark: bool,
        surface: S,
    ) -> SessionStart<S> {
        let selected = store.fetch_company_themes(company_id).and_then(|themes| {
            select_company_theme(&themes)
                .cloned()
                .ok_or_else(|| Error::no_company_theme(company_id))
        });
        let (theme, fetch_error) = match selected {
            Ok(theme) => (theme, None),
            Err(error) => {
                tracing::warn!(company_id, %error, "company theme fetch failed, starting on fallback");
                (Theme::fallback(), Some(error))
            }
        };
        Self::start_with(theme, preference, system_prefers_dark, surface, fetch_error)
    }

    fn start_with(
        theme: Theme,
        preference: ModePreference,
        system_prefers_dark: bool,
        surface: S,
        fetch_error: Option<Error>,
    ) -> SessionStart<S> {
        let mut session = Self {
            theme,
            preference,
            system_prefers_dark,
            mode: preference.resolve(system_prefers_dark),
            overrides: None,
            tokens: TokenMap::new(),
            cascade: CascadeResolver::new(),
            publisher: StyleSheetPublisher::new(),
            surface,
        };
        session.republish();
        SessionStart {
            session,
            fetch_error,
        }
    }

    /// The ordered effect tail every mutation runs: token recompute, then
    /// the atomic block write, then the marker toggle.
    fn republish(&mut self) {
        self.tokens = resolve_tokens(&self.theme, self.mode, self.overrides.as_ref());
        self.publisher
            .publish(&mut self.surface, &self.tokens, self.mode);
    }

    fn apply_mode(&mut self, mode: ThemeMode) {
        if mode != self.mode {
            // Override generations are scoped to one base state.
            self.overrides = None;
            self.mode = mode;
        }
        self.republish();
    }

    /// Change the operator's mode preference.
    pub fn set_mode_preference(&mut self, preference: ModePreference) {
        self.preference = preference;
        self.apply_mode(preference.resolve(self.system_prefers_dark));
    }

    /// Record the embedder-reported system dark setting.
    pub fn set_system_prefers_dark(&mut self, system_prefers_dark: bool) {
        self.system_prefers_dark = system_prefers_dark;
        self.apply_mode(self.preference.resolve(system_prefers_dark));
    }

    /// Replace the active theme. Overrides are discarded; layout state is
    /// kept (it belongs to the session, not the theme).
    pub fn switch_theme(&mut self, store: &dyn ThemeStore, theme_id: &str) -> Result<()> {
        let theme = store.fetch_theme(theme_id)?;
        self.theme = theme;
        self.overrides = None;
        self.republish();
        Ok(())
    }

    /// Set one transient preview value on top of the base theme.
    pub fn preview_token(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.overrides
            .get_or_insert_with(|| OverrideLayer::new(self.mode))
            .set(key, value);
        self.republish();
    }

    /// Drop the whole preview layer.
    pub fn clear_preview(&mut self) {
        self.overrides = None;
        self.republish();
    }

    /// Layer an externally parsed partial token map onto the preview,
    /// leaving the base theme untouched until the operator commits it
    /// with [`Self::merge_imported`].
    pub fn preview_imported(&mut self, values: impl IntoIterator<Item = (String, String)>) {
        self.overrides
            .get_or_insert_with(|| OverrideLayer::new(self.mode))
            .extend(values);
        self.republish();
    }

    /// Merge an externally parsed partial token map into the active
    /// mode's base config, as an ordinary update.
    pub fn merge_imported(&mut self, values: impl IntoIterator<Item = (String, String)>) {
        let config = match self.mode {
            ThemeMode::Dark => self
                .theme
                .dark_mode_config
                .get_or_insert_with(|| self.theme.light_mode_config.clone()),
            ThemeMode::Light => &mut self.theme.light_mode_config,
        };
        for (key, value) in values {
            if key.is_empty() {
                continue;
            }
            config.insert(key, value);
        }
        self.republish();
    }

    /// Patch layout fields at one breakpoint.
    pub fn update_breakpoint(&mut self, bp: Breakpoint, patch: &LayoutPatch) {
        self.cascade.update(bp, patch);
    }

    /// String-boundary form of [`Self::update_breakpoint`]; unknown names
    /// are a no-op.
    pub fn update_breakpoint_by_name(&mut self, name: &str, patch: &LayoutPatch) {
        match Breakpoint::from_name(name) {
            Some(bp) => self.update_breakpoint(bp, patch),
            None => tracing::debug!(name, "ignoring patch for unknown breakpoint"),
        }
    }

    /// Copy every effective layout field from one breakpoint to another.
    pub fn copy_breakpoint(&mut self, source: Breakpoint, target: Breakpoint) {
        self.cascade.copy_all(source, target);
    }

    /// Replace the layout tree with the static default.
    pub fn reset_layout(&mut self) {
        self.cascade.reset();
    }

    /// The current resolved token map.
    pub fn tokens(&self) -> &TokenMap {
        &self.tokens
    }

    /// The resolved rendering mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The active theme record.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The effective layout record at a breakpoint.
    pub fn effective_layout(&self, bp: Breakpoint) -> LayoutValues {
        self.cascade.effective(bp)
    }

    /// The cascade state, for editors that inspect inheritance flags.
    pub fn cascade(&self) -> &CascadeResolver {
        &self.cascade
    }

    /// Resolve a linked-or-custom color field against the current tokens.
    pub fn resolve_binding(&self, binding: &ColorBinding) -> String {
        resolve_binding(binding, &self.tokens)
    }

    /// Export the layout frame state as CSS.
    pub fn export_frame_css(&self, options: &CssExportOptions) -> String {
        export::export_frame_css(&self.cascade, options)
    }

    /// Export the resolved tokens as stylesheet text.
    pub fn export_theme_css(&self, include_utilities: bool) -> String {
        export::export_theme_css(&self.tokens, include_utilities)
    }

    /// Export the active theme's name and configs as JSON.
    pub fn export_theme_json(&self) -> Result<String> {
        export::export_theme_json(&self.theme)
    }

    /// Persist the active theme's editable fields through the store.
    pub fn save(&self, store: &dyn ThemeStore) -> Result<Theme> {
        let patch = ThemePatch {
            name: Some(self.theme.name.clone()),
            light_mode_config: Some(self.theme.light_mode_config.clone()),
            dark_mode_config: self.theme.dark_mode_config.clone(),
            is_active: None,
        };
        store.persist_theme(&self.theme.id, &patch)
    }

    /// End the session, removing the owned style block.
    pub fn end(mut self) {
        self.publisher.teardown(&mut self.surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::SharedSurface;
    use crate::store::InMemoryThemeStore;
    use livery_color::normalize;

    fn seeded_store() -> InMemoryThemeStore {
        let store = InMemoryThemeStore::new();
        let mut theme = Theme::fallback();
        theme.id = "t1".to_string();
        theme.company_id = "c1".to_string();
        theme.name = "Seeded".to_string();
        theme
            .light_mode_config
            .insert("primary".to_string(), "#3b82f6".to_string());
        store.insert(theme);
        store
    }

    fn start_session(store: &InMemoryThemeStore) -> (ThemeSession<SharedSurface>, SharedSurface) {
        let surface = SharedSurface::new();
        let start = ThemeSession::start(
            store,
            "t1",
            ModePreference::Light,
            false,
            surface.clone(),
        );
        assert!(start.fetch_error.is_none());
        (start.session, surface)
    }

    #[test]
    fn start_publishes_immediately() {
        let store = seeded_store();
        let (_session, surface) = start_session(&store);
        let block = surface.style_block().unwrap();
        assert!(block.contains("--primary:"));
        assert!(!surface.dark_marker());
    }

    #[test]
    fn fetch_failure_starts_on_fallback_with_error() {
        let store = InMemoryThemeStore::new();
        let surface = SharedSurface::new();
        let start = ThemeSession::start(
            &store,
            "missing",
            ModePreference::Light,
            false,
            surface.clone(),
        );
        assert!(matches!(
            start.fetch_error,
            Some(Error::UnknownTheme { .. })
        ));
        assert_eq!(start.session.theme().id, "fallback");
        assert!(surface.style_block().is_some());
    }

    #[test]
    fn mode_change_clears_preview_and_toggles_marker() {
        let store = seeded_store();
        let (mut session, surface) = start_session(&store);

        session.preview_token("primary", "#ef4444");
        assert_eq!(
            session.tokens().get("primary"),
            Some(normalize("#ef4444").as_str())
        );

        session.set_mode_preference(ModePreference::Dark);
        assert!(surface.dark_marker());
        // The preview belonged to the light base state.
        assert_ne!(
            session.tokens().get("primary"),
            Some(normalize("#ef4444").as_str())
        );

        session.set_mode_preference(ModePreference::Light);
        assert!(!surface.dark_marker());
    }

    #[test]
    fn system_preference_follows_embedder_report() {
        let store = seeded_store();
        let surface = SharedSurface::new();
        let mut session = ThemeSession::start(
            &store,
            "t1",
            ModePreference::System,
            false,
            surface.clone(),
        )
        .session;
        assert_eq!(session.mode(), ThemeMode::Light);

        session.set_system_prefers_dark(true);
        assert_eq!(session.mode(), ThemeMode::Dark);
        assert!(surface.dark_marker());
    }

    #[test]
    fn switch_theme_clears_preview() {
        let store = seeded_store();
        let mut other = Theme::fallback();
        other.id = "t2".to_string();
        other.company_id = "c1".to_string();
        store.insert(other);

        let (mut session, _surface) = start_session(&store);
        session.preview_token("primary", "#ef4444");
        session.switch_theme(&store, "t2").unwrap();

        assert_eq!(session.theme().id, "t2");
        assert_ne!(
            session.tokens().get("primary"),
            Some(normalize("#ef4444").as_str())
        );
    }

    #[test]
    fn failed_switch_keeps_current_state() {
        let store = seeded_store();
        let (mut session, _surface) = start_session(&store);
        assert!(session.switch_theme(&store, "missing").is_err());
        assert_eq!(session.theme().id, "t1");
    }

    #[test]
    fn merge_imported_updates_base_config() {
        let store = seeded_store();
        let (mut session, _surface) = start_session(&store);

        session.merge_imported([("accent".to_string(), "#10b981".to_string())]);
        assert_eq!(
            session.tokens().get("accent"),
            Some(normalize("#10b981").as_str())
        );
        // An import is a base-config edit, so it survives a preview clear.
        session.clear_preview();
        assert_eq!(
            session.tokens().get("accent"),
            Some(normalize("#10b981").as_str())
        );
    }

    #[test]
    fn preview_imported_is_transient() {
        let store = seeded_store();
        let (mut session, _surface) = start_session(&store);

        session.preview_imported([
            ("card".to_string(), "#10b981".to_string()),
            ("muted".to_string(), "#64748b".to_string()),
        ]);
        assert_eq!(
            session.tokens().get("card"),
            Some(normalize("#10b981").as_str())
        );
        assert_eq!(
            session.tokens().get("muted"),
            Some(normalize("#64748b").as_str())
        );
        // Unlike merge_imported, the base config is untouched, so
        // clearing the preview drops the imported values.
        session.clear_preview();
        assert!(!session.tokens().contains("card"));
        assert!(!session.theme().light_mode_config.contains_key("card"));
    }

    #[test]
    fn unknown_breakpoint_name_is_a_no_op() {
        let store = seeded_store();
        let (mut session, _surface) = start_session(&store);
        let before = session.effective_layout(Breakpoint::Medium);

        session.update_breakpoint_by_name(
            "tablet",
            &LayoutPatch {
                gap: Some(99.0),
                ..Default::default()
            },
        );
        assert_eq!(session.effective_layout(Breakpoint::Medium), before);
    }

    #[test]
    fn save_round_trips_through_the_store() {
        let store = seeded_store();
        let (mut session, _surface) = start_session(&store);
        session.merge_imported([("accent".to_string(), "#10b981".to_string())]);

        let persisted = session.save(&store).unwrap();
        assert_eq!(
            persisted.light_mode_config.get("accent"),
            Some(&"#10b981".to_string())
        );
    }

    #[test]
    fn end_removes_the_style_block() {
        let store = seeded_store();
        let (session, surface) = start_session(&store);
        assert!(surface.style_block().is_some());
        session.end();
        assert!(surface.style_block().is_none());
    }
}
