//! Exportable serializations of resolved theme and layout state.
//!
//! All exporters are pure: the same resolved state always produces
//! byte-identical text.

mod frame;
mod tailwind;

pub use frame::{CssExportOptions, ExportFlavor, PropertyGroup, export_frame_css};
pub use tailwind::tailwind_config;

use serde::Serialize;

use crate::error::Result;
use crate::publish::render_custom_properties;
use crate::theme::Theme;
use crate::tokens::{TokenMap, is_color_token};

/// Export the resolved token map as stylesheet text.
///
/// The custom-property section is the same text the publisher writes;
/// `include_utilities` appends per-token helper classes for color tokens.
pub fn export_theme_css(tokens: &TokenMap, include_utilities: bool) -> String {
    let mut css = render_custom_properties(tokens);

    if include_utilities {
        css.push('\n');
        for (key, _) in tokens.iter() {
            if !is_color_token(key) {
                continue;
            }
            css.push_str(&format!(
                ".bg-{key} {{ background-color: var(--{key}); }}\n\
                 .text-{key} {{ color: var(--{key}); }}\n\
                 .border-{key} {{ border-color: var(--{key}); }}\n"
            ));
        }
    }

    css
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeJsonExport<'a> {
    name: &'a str,
    light_mode_config: &'a crate::theme::TokenConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark_mode_config: Option<&'a crate::theme::TokenConfig>,
}

/// Export a theme's name and raw configs as pretty-printed JSON.
pub fn export_theme_json(theme: &Theme) -> Result<String> {
    let export = ThemeJsonExport {
        name: &theme.name,
        light_mode_config: &theme.light_mode_config,
        dark_mode_config: theme.dark_mode_config.as_ref(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, &str)]) -> TokenMap {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn css_export_without_utilities_matches_published_text() {
        let map = tokens(&[("primary", "oklch(0.62 0.19 259.8)")]);
        assert_eq!(export_theme_css(&map, false), render_custom_properties(&map));
    }

    #[test]
    fn utility_section_covers_color_tokens_only() {
        let map = tokens(&[
            ("primary", "oklch(0.62 0.19 259.8)"),
            ("radius", "0.5rem"),
        ]);
        let css = export_theme_css(&map, true);
        assert!(css.contains(".bg-primary { background-color: var(--primary); }"));
        assert!(css.contains(".text-primary { color: var(--primary); }"));
        assert!(!css.contains(".bg-radius"));
    }

    #[test]
    fn json_export_shape() {
        let theme = Theme::fallback();
        let json = export_theme_json(&theme).unwrap();
        assert!(json.contains("\"name\": \"Fallback\""));
        assert!(json.contains("\"lightModeConfig\""));
        assert!(json.contains("\"darkModeConfig\""));
        // Record metadata stays out of the export payload.
        assert!(!json.contains("\"companyId\""));
    }

    #[test]
    fn json_export_omits_missing_dark_config() {
        let mut theme = Theme::fallback();
        theme.dark_mode_config = None;
        let json = export_theme_json(&theme).unwrap();
        assert!(!json.contains("darkModeConfig"));
    }
}
