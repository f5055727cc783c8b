//! File system errors

use std::path::Path;

use super::GloboticketError;

/// Creates an IO error for `path`, keeping the underlying cause
pub fn read_failed(path: &Path, err: std::io::Error) -> GloboticketError {
    GloboticketError::IoError {
        message: format!("Failed to read {}: {err}", path.display()),
        source: Some(err),
    }
}
