//! Error types for the theming engine.

/// Result type alias for theming operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the theming engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A store collaborator failed; the payload is opaque to the engine.
    #[error("theme store error: {message}")]
    Store { message: String },

    /// No theme exists under the requested id.
    #[error("unknown theme '{theme_id}'")]
    UnknownTheme { theme_id: String },

    /// A company has no themes to select from.
    #[error("no theme available for company '{company_id}'")]
    NoCompanyTheme { company_id: String },

    /// Serialization of an export payload failed.
    #[error("export serialization failed: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a store error from any collaborator failure.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create an unknown-theme error.
    pub fn unknown_theme(theme_id: impl Into<String>) -> Self {
        Self::UnknownTheme {
            theme_id: theme_id.into(),
        }
    }

    /// Create a no-theme-for-company error.
    pub fn no_company_theme(company_id: impl Into<String>) -> Self {
        Self::NoCompanyTheme {
            company_id: company_id.into(),
        }
    }
}
