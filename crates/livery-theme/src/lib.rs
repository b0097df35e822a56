//! Theme token resolution and responsive cascade engine for Livery.
//!
//! This crate is the customization core of a multi-tenant product's theme
//! editor, featuring:
//!
//! - **Token resolution**: theme record + mode + preview overrides
//!   flattened into one canonical token map
//! - **Publication**: atomic rewrites of the single generated style block
//!   and the global dark-mode marker, through a narrow surface seam
//! - **Responsive cascade**: breakpoint-scoped layout configuration with
//!   explicit-override tracking and read-time inheritance
//! - **Exports**: deterministic CSS, JSON, and Tailwind-config
//!   serializations of resolved state
//!
//! Everything runs synchronously to completion; side effects fire in a
//! fixed order after each state change.
//!
//! # Example
//!
//! ```
//! use livery_theme::prelude::*;
//!
//! let store = InMemoryThemeStore::new();
//! let surface = SharedSurface::new();
//! let start = ThemeSession::start(&store, "t1", ModePreference::System, false, surface.clone());
//!
//! // The fetch failed (empty store), so the session opened on the
//! // built-in fallback theme and published it.
//! assert!(start.fetch_error.is_some());
//! assert!(surface.style_block().unwrap().contains("--primary:"));
//! ```

pub mod cascade;
pub mod export;
pub mod publish;
pub mod resolve;
pub mod session;
pub mod store;
pub mod theme;
pub mod tokens;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::cascade::{
        Breakpoint, CascadeResolver, LayoutField, LayoutPatch, LayoutValues, LineStyle,
    };
    pub use crate::error::{Error, Result};
    pub use crate::export::{
        CssExportOptions, ExportFlavor, PropertyGroup, export_frame_css, export_theme_css,
        export_theme_json, tailwind_config,
    };
    pub use crate::publish::{SharedSurface, StyleSheetPublisher, StyleSurface};
    pub use crate::resolve::{ColorBinding, OverrideLayer, resolve_binding, resolve_tokens};
    pub use crate::session::{SessionStart, ThemeSession};
    pub use crate::store::{InMemoryThemeStore, ThemeStore};
    pub use crate::theme::{ModePreference, Theme, ThemeMode, ThemePatch};
    pub use crate::tokens::TokenMap;
}
