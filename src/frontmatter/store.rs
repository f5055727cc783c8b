//! Frontmatter lookups bound to a configured root directory.

use std::path::{Path, PathBuf};

use super::document::Frontmatter;
use super::locator::{self, FRONTMATTER_EXTENSION};
use super::parser::parse_frontmatter;
use crate::config::FrontmatterConfig;
use crate::error::{Result, fs as fs_errors};

/// Resolves product codes to their parsed frontmatter.
///
/// Holds nothing but the root path: every lookup scans the tree and
/// reads the file again. Tests point a store at a temporary directory
/// instead of touching process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterStore {
    root: PathBuf,
}

/// Outcome of validating a single file during [`FrontmatterStore::check`].
#[derive(Debug)]
pub struct CheckedFile {
    pub product_code: String,
    pub path: PathBuf,
    pub result: Result<Frontmatter>,
}

impl FrontmatterStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &FrontmatterConfig) -> Self {
        Self::new(config.root.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the frontmatter file for `product_code`.
    pub fn find(&self, product_code: &str) -> Result<PathBuf> {
        locator::find_frontmatter_file(product_code, &self.root)
    }

    /// Locate, read and parse the frontmatter for `product_code`.
    pub fn get(&self, product_code: &str) -> Result<Frontmatter> {
        let path = self.find(product_code)?;
        let text =
            std::fs::read_to_string(&path).map_err(|e| fs_errors::read_failed(&path, e))?;
        parse_frontmatter(&text)
    }

    /// Parse every frontmatter file under the root, in walk order
    /// (entries sorted by file name).
    pub fn check(&self) -> Result<Vec<CheckedFile>> {
        let checked = locator::walk_files(&self.root)?
            .into_iter()
            .filter_map(|entry| {
                let path = entry.into_path();
                let product_code = product_code_of(&path)?;
                let result = std::fs::read_to_string(&path)
                    .map_err(|e| fs_errors::read_failed(&path, e))
                    .and_then(|text| parse_frontmatter(&text));
                Some(CheckedFile {
                    product_code,
                    path,
                    result,
                })
            })
            .collect();
        Ok(checked)
    }
}

fn product_code_of(path: &Path) -> Option<String> {
    if path.extension()?.to_str()? != FRONTMATTER_EXTENSION {
        return None;
    }
    path.file_stem()?.to_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GloboticketError;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn catalog() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "111222.yml", "---\ntitle: \"Show\"\n---\nConcert info");
        write(
            temp.path(),
            "hiphop/123456.yml",
            "---\ntitle: Beats\ngenre: hiphop\n---\nHip hop night\n",
        );
        write(temp.path(), "reggae/654321.yml", "---\ntitle: Riddim\n---\n");
        temp
    }

    #[test]
    fn test_get_toplevel() {
        let temp = catalog();
        let store = FrontmatterStore::new(temp.path());
        let fm = store.get("111222").unwrap();

        let expected: serde_yaml::Mapping =
            serde_yaml::from_str("title: Show\ncontent: Concert info\n").unwrap();
        assert_eq!(fm.as_mapping(), &expected);
    }

    #[test]
    fn test_get_nested() {
        let temp = catalog();
        let store = FrontmatterStore::new(temp.path());
        let fm = store.get("123456").unwrap();
        assert_eq!(fm.get_str("genre").as_deref(), Some("hiphop"));
        assert_eq!(fm.content(), "Hip hop night\n");
    }

    #[test]
    fn test_find_nested_is_distinct_from_sibling() {
        let temp = catalog();
        let store = FrontmatterStore::new(temp.path());
        let hiphop = store.find("123456").unwrap();
        let reggae = store.find("654321").unwrap();
        assert_eq!(hiphop, temp.path().join("hiphop/123456.yml"));
        assert_eq!(reggae, temp.path().join("reggae/654321.yml"));
        assert_ne!(hiphop, reggae);
    }

    #[test]
    fn test_get_not_found() {
        let temp = catalog();
        let store = FrontmatterStore::new(temp.path());
        assert!(store.get("000000").unwrap_err().is_not_found());
    }

    #[test]
    fn test_get_propagates_parse_errors() {
        let temp = catalog();
        write(temp.path(), "broken.yml", "title: no markers\n");
        let store = FrontmatterStore::new(temp.path());
        assert!(store.get("broken").unwrap_err().is_invalid_structure());
    }

    #[test]
    fn test_get_non_utf8_is_io_error() {
        let temp = catalog();
        std::fs::write(temp.path().join("binary.yml"), [0xff, 0xfe, 0x00]).unwrap();
        let store = FrontmatterStore::new(temp.path());
        assert!(matches!(
            store.get("binary").unwrap_err(),
            GloboticketError::IoError { .. }
        ));
    }

    #[test]
    fn test_store_from_config() {
        let config = FrontmatterConfig::new("/srv/product_info");
        let store = FrontmatterStore::from_config(&config);
        assert_eq!(store.root(), Path::new("/srv/product_info"));
    }

    #[test]
    fn test_check_reports_every_yml_file() {
        let temp = catalog();
        write(temp.path(), "notes.txt", "ignored");
        write(temp.path(), "broken/999.yml", "---\n- a\n---\n");
        let store = FrontmatterStore::new(temp.path());

        let checked = store.check().unwrap();
        let codes: Vec<&str> = checked.iter().map(|c| c.product_code.as_str()).collect();
        assert_eq!(codes, vec!["111222", "999", "123456", "654321"]);

        let broken = checked.iter().find(|c| c.product_code == "999").unwrap();
        assert!(broken.result.is_err());
        assert_eq!(checked.iter().filter(|c| c.result.is_ok()).count(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_skipped() {
        let temp = catalog();
        std::fs::create_dir_all(temp.path().join("archive")).unwrap();
        std::os::unix::fs::symlink("..", temp.path().join("archive/up")).unwrap();
        let store = FrontmatterStore::new(temp.path());

        assert_eq!(store.get("111222").unwrap().content(), "Concert info");
        assert_eq!(store.check().unwrap().len(), 3);
    }

    #[test]
    fn test_product_code_of() {
        assert_eq!(
            product_code_of(Path::new("a/b/123.yml")).as_deref(),
            Some("123")
        );
        assert_eq!(product_code_of(Path::new("a/b/123.yaml")), None);
        assert_eq!(product_code_of(Path::new("README")), None);
    }
}
