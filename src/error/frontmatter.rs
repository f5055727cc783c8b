//! Frontmatter lookup and document errors

use std::path::Path;

use super::{GloboticketError, INVALID_STRUCTURE, MAPPING_REQUIRED};

/// Creates a not-found error for a product code searched under `root`
pub fn not_found(product_code: impl Into<String>, root: &Path) -> GloboticketError {
    GloboticketError::FrontmatterNotFound {
        product_code: product_code.into(),
        root: root.display().to_string(),
    }
}

/// Creates an invalid frontmatter error without an underlying cause
pub fn invalid(reason: impl Into<String>) -> GloboticketError {
    GloboticketError::InvalidFrontmatter {
        reason: reason.into(),
        source: None,
    }
}

/// Creates the structural invalid frontmatter error (markers missing)
pub fn invalid_structure() -> GloboticketError {
    invalid(INVALID_STRUCTURE)
}

/// Creates the invalid frontmatter error for a header that is not a mapping
pub fn mapping_required() -> GloboticketError {
    invalid(MAPPING_REQUIRED)
}
