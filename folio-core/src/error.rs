/// Structured error types for folio-core.
///
/// The renderer itself cannot fail; errors only come from loading content
/// and configuration. The `folio` binary wraps these in `anyhow`.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio-core operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O operation failed
    #[error("I/O error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    /// TOML parsing failed
    #[error("TOML error in {context}: {source}")]
    Toml {
        context: String,
        source: toml::de::Error,
    },

    /// Required record field missing or blank
    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// Unknown page slug
    #[error("Unknown page '{slug}' (expected one of: publications, projects)")]
    InvalidPage { slug: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create an I/O error tied to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a TOML error with context
    pub fn toml(context: impl Into<String>, source: toml::de::Error) -> Self {
        Self::Toml {
            context: context.into(),
            source,
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Create an unknown page error
    pub fn invalid_page(slug: impl Into<String>) -> Self {
        Self::InvalidPage { slug: slug.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
