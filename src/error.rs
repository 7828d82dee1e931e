//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use std::path::PathBuf;
use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Zip container could not be written or read
    #[error("Package error: {0}")]
    Package(#[from] zip::result::ZipError),

    /// XML part could not be parsed
    #[error("XML error in {part}: {message}")]
    Xml {
        /// Part name inside the package (e.g. `ppt/slides/slide1.xml`).
        part: String,
        /// Description of the parse failure.
        message: String,
    },

    /// Image could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// PDF conversion failed
    #[error("Export error: {message}")]
    Export {
        /// Human-readable error description.
        message: String,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create an XML error for a package part
    pub fn xml(part: impl Into<String>, message: impl ToString) -> Self {
        Self::Xml { part: part.into(), message: message.to_string() }
    }

    /// Create an export error, attaching a hint when the failure looks like a
    /// missing converter
    pub fn export(message: impl Into<String>) -> Self {
        let message = message.into();
        let hint = if message.contains("No such file") || message.contains("not found") {
            Some("Install LibreOffice or point CASEDECK_SOFFICE at the soffice binary")
        } else {
            None
        };
        Self::Export { message, hint }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
