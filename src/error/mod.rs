//! Error types and handling for GloboTicket
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`frontmatter`]: Lookup and document errors raised by the frontmatter core
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod frontmatter;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Reason used when a document does not have the `---` header/body layout.
pub const INVALID_STRUCTURE: &str = "Invalid file structure";

/// Reason used when the header decodes to something other than a mapping.
pub const MAPPING_REQUIRED: &str = "YAML content must be a mapping";

/// Reason used when the header is not valid YAML.
pub const INVALID_YAML: &str = "Invalid YAML (should be a mapping)";

/// Main error type for GloboTicket operations
#[derive(Error, Diagnostic, Debug)]
pub enum GloboticketError {
    // Frontmatter errors
    #[error("Frontmatter not found for product code '{product_code}' in {root}")]
    #[diagnostic(
        code(globoticket::frontmatter::not_found),
        help("Expected a file named <product_code>.yml somewhere under the frontmatter root")
    )]
    FrontmatterNotFound { product_code: String, root: String },

    #[error("Invalid frontmatter: {reason}")]
    #[diagnostic(
        code(globoticket::frontmatter::invalid),
        help(
            "A frontmatter file starts with a '---' line, holds a YAML mapping, \
             and closes the header with another '---' line before the body"
        )
    )]
    InvalidFrontmatter {
        reason: String,
        #[source]
        source: Option<serde_yaml::Error>,
    },

    #[error("Frontmatter check found {count} problem(s)")]
    #[diagnostic(
        code(globoticket::frontmatter::check_failed),
        help("Fix the files listed above and run 'globoticket check' again")
    )]
    CheckFailed { count: usize },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(globoticket::config::invalid))]
    ConfigInvalid { message: String },

    // Output errors
    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(globoticket::output::serialization_failed))]
    SerializationFailed { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(globoticket::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl GloboticketError {
    /// True for the structural sub-case of an invalid document
    /// (missing or unterminated `---` markers).
    pub fn is_invalid_structure(&self) -> bool {
        matches!(self, Self::InvalidFrontmatter { reason, .. } if reason == INVALID_STRUCTURE)
    }

    /// True when the requested product code has no frontmatter file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FrontmatterNotFound { .. })
    }
}

impl From<std::io::Error> for GloboticketError {
    fn from(err: std::io::Error) -> Self {
        GloboticketError::IoError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<serde_yaml::Error> for GloboticketError {
    fn from(err: serde_yaml::Error) -> Self {
        GloboticketError::InvalidFrontmatter {
            reason: format!("{INVALID_YAML}: {err}"),
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for GloboticketError {
    fn from(err: serde_json::Error) -> Self {
        GloboticketError::SerializationFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GloboticketError>;
