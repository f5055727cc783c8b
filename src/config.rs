//! Frontmatter configuration
//!
//! The root directory is resolved once at startup and injected into
//! [`crate::FrontmatterStore`]. Resolution order: the `--root` flag, then
//! [`ROOT_ENV_VAR`], then [`DEFAULT_ROOT`] relative to the working directory.

use std::path::{Path, PathBuf};

/// Environment variable overriding the frontmatter root directory.
pub const ROOT_ENV_VAR: &str = "GLOBOTICKET_FRONTMATTER_DIR";

/// Directory searched when no root is configured.
pub const DEFAULT_ROOT: &str = "product_info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterConfig {
    /// Directory tree holding `<product_code>.yml` files
    pub root: PathBuf,
}

impl FrontmatterConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build the configuration from an optional explicit root.
    ///
    /// The CLI passes the value clap resolved from `--root` or the
    /// environment; `None` falls back to [`DEFAULT_ROOT`].
    pub fn resolve(root: Option<PathBuf>) -> Self {
        Self::new(root.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for FrontmatterConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
