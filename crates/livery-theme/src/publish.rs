//! Stylesheet publication: the one owned style block and the mode marker.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::theme::ThemeMode;
use crate::tokens::TokenMap;

/// The side-effect seam the publisher writes through.
///
/// The product binds this to the document; tests and previews use
/// [`SharedSurface`]. The style block and marker belong exclusively to the
/// publisher, so implementations never need to merge concurrent writers.
pub trait StyleSurface {
    /// Replace the owned style block's entire content in one write.
    fn replace_style_block(&mut self, css: &str);

    /// Set or clear the global dark-mode marker.
    fn set_dark_marker(&mut self, dark: bool);

    /// Remove the owned style block entirely (session teardown).
    fn remove_style_block(&mut self);
}

#[derive(Debug, Default)]
struct SurfaceState {
    style_block: Option<String>,
    dark_marker: bool,
}

/// An in-memory surface embedders and tests can read back.
#[derive(Debug, Clone, Default)]
pub struct SharedSurface {
    state: Arc<RwLock<SurfaceState>>,
}

impl SharedSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently published style block, if any.
    pub fn style_block(&self) -> Option<String> {
        self.state.read().style_block.clone()
    }

    /// Whether the dark-mode marker is set.
    pub fn dark_marker(&self) -> bool {
        self.state.read().dark_marker
    }
}

impl StyleSurface for SharedSurface {
    fn replace_style_block(&mut self, css: &str) {
        self.state.write().style_block = Some(css.to_string());
    }

    fn set_dark_marker(&mut self, dark: bool) {
        self.state.write().dark_marker = dark;
    }

    fn remove_style_block(&mut self) {
        self.state.write().style_block = None;
    }
}

/// Regenerates and atomically replaces the generated style block on every
/// token-map change, and flips the dark marker when the mode changes.
#[derive(Debug, Default)]
pub struct StyleSheetPublisher {
    last_mode: Option<ThemeMode>,
}

impl StyleSheetPublisher {
    /// Create a publisher that has published nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a freshly resolved token map.
    ///
    /// The whole block is rendered first and written in a single
    /// `replace_style_block` call, so the surface never observes a
    /// half-applied variable set. The marker is only touched when the
    /// mode actually flips.
    pub fn publish(&mut self, surface: &mut dyn StyleSurface, tokens: &TokenMap, mode: ThemeMode) {
        surface.replace_style_block(&render_custom_properties(tokens));

        if self.last_mode != Some(mode) {
            surface.set_dark_marker(mode == ThemeMode::Dark);
            self.last_mode = Some(mode);
        }
    }

    /// Remove the owned block and forget published state.
    pub fn teardown(&mut self, surface: &mut dyn StyleSurface) {
        surface.remove_style_block();
        self.last_mode = None;
    }
}

/// Render the full custom-property text for a token map: a `:root` block
/// duplicated under `html` so the generated rules outrank stylesheet
/// defaults of equal specificity.
pub fn render_custom_properties(tokens: &TokenMap) -> String {
    let mut declarations = String::new();
    for (key, value) in tokens.iter() {
        // There is no meaningful fallback for a bad name, so the entry is
        // dropped rather than substituted.
        if !is_safe_custom_property_name(key) {
            tracing::warn!(key, "token key would corrupt the style block, skipping entry");
            continue;
        }
        let value = if is_safe_declaration_value(value) {
            value
        } else {
            tracing::warn!(key, value, "token value would corrupt the style block, substituting fallback");
            livery_color::FALLBACK
        };
        declarations.push_str(&format!("  --{key}: {value};\n"));
    }

    format!(":root {{\n{declarations}}}\n\nhtml {{\n{declarations}}}\n")
}

/// A value is publishable if it cannot terminate the declaration or the
/// block early.
fn is_safe_declaration_value(value: &str) -> bool {
    !value.is_empty() && !value.contains([';', '{', '}', '\n'])
}

/// A key is publishable if it forms a single valid custom-property name.
fn is_safe_custom_property_name(key: &str) -> bool {
    !key.is_empty() && !key.contains([';', '{', '}', ':', '\n', ' '])
}
