//! Common test utilities for GloboTicket integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Checked-in frontmatter tree mirroring the catalog used by the API tests
#[allow(dead_code)]
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("product_info")
}

/// A throwaway frontmatter root for integration tests
pub struct TestCatalog {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the frontmatter root
    pub path: PathBuf,
}

impl TestCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the catalog root
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a frontmatter document with the given header and body
    #[allow(dead_code)]
    pub fn write_frontmatter(&self, path: &str, header: &str, body: &str) -> PathBuf {
        self.write_file(path, &format!("---\n{header}---\n{body}"))
    }

    /// Root as a string, for passing to `--root`
    #[allow(dead_code)]
    pub fn root_arg(&self) -> &str {
        self.path.to_str().expect("temp path is not UTF-8")
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real globoticket binary with a clean environment
#[allow(dead_code)]
pub fn globoticket_cmd() -> assert_cmd::Command {
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    let mut cmd = assert_cmd::Command::cargo_bin("globoticket").expect("binary not built");
    cmd.env_remove("GLOBOTICKET_FRONTMATTER_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Command pointed at `root` through the `--root` flag
#[allow(dead_code)]
pub fn globoticket_cmd_for_root(root: &Path) -> assert_cmd::Command {
    let mut cmd = globoticket_cmd();
    cmd.arg("--root").arg(root);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = TestCatalog::new();
        assert!(catalog.path.exists());
    }

    #[test]
    fn test_write_frontmatter() {
        let catalog = TestCatalog::new();
        let path = catalog.write_frontmatter("a/1.yml", "title: x\n", "body");
        assert_eq!(
            std::fs::read_to_string(path).expect("Failed to read file"),
            "---\ntitle: x\n---\nbody"
        );
    }

    #[test]
    fn test_fixture_root_exists() {
        assert!(fixture_root().join("111222.yml").is_file());
    }
}
