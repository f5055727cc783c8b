//! Recursive lookup of `<product_code>.yml` files under a root directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{GloboticketError, Result, frontmatter as errors};

/// Extension of frontmatter files, without the dot.
pub const FRONTMATTER_EXTENSION: &str = "yml";

/// File name holding the frontmatter for `product_code`.
pub fn frontmatter_file_name(product_code: &str) -> String {
    format!("{product_code}.{FRONTMATTER_EXTENSION}")
}

/// Find the frontmatter file for `product_code` anywhere under `root`.
///
/// The product code is compared literally against file names. When more
/// than one file matches, the shallowest wins and ties go to the smallest
/// path, so the result never depends on directory listing order.
///
/// A missing `root` behaves like an empty tree and yields a not-found error.
/// See [`walk_files`] for how unreadable subtrees are handled.
pub fn find_frontmatter_file(product_code: &str, root: &Path) -> Result<PathBuf> {
    let file_name = frontmatter_file_name(product_code);
    let mut matches = walk_files(root)?
        .into_iter()
        .filter(|entry| entry.file_name().to_str() == Some(file_name.as_str()))
        .collect::<Vec<_>>();

    matches.sort_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| a.path().cmp(b.path())));

    let mut matches = matches.into_iter().map(DirEntry::into_path);
    let Some(found) = matches.next() else {
        tracing::debug!(product_code, root = %root.display(), "no frontmatter file found");
        return Err(errors::not_found(product_code, root));
    };

    let ignored: Vec<PathBuf> = matches.collect();
    if !ignored.is_empty() {
        tracing::warn!(
            product_code,
            chosen = %found.display(),
            ?ignored,
            "several frontmatter files match product code"
        );
    }

    tracing::debug!(product_code, path = %found.display(), "resolved frontmatter file");
    Ok(found)
}

/// Every file under `root`, including symlinks that resolve to a file.
///
/// Symlinked directories are not descended into, and subtrees that cannot
/// be read are skipped with a warning, so one bad directory never hides
/// the rest of the tree. Returns an empty list when `root` does not exist;
/// an unreadable `root` is an IO error.
pub fn walk_files(root: &Path) -> Result<Vec<DirEntry>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) if is_file(&entry) => files.push(entry),
            Ok(_) => {}
            Err(err) if is_missing_root(&err) => {
                tracing::debug!(root = %root.display(), "frontmatter root does not exist");
            }
            Err(err) if err.depth() == 0 => return Err(walk_error(err)),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable part of frontmatter tree");
            }
        }
    }
    Ok(files)
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn is_missing_root(err: &walkdir::Error) -> bool {
    err.depth() == 0 && err.io_error().is_some_and(|e| e.kind() == ErrorKind::NotFound)
}

fn walk_error(err: walkdir::Error) -> GloboticketError {
    let path = err
        .path()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let message = format!("Failed to scan {path}: {err}");
    GloboticketError::IoError {
        message,
        source: err.into_io_error(),
    }
}
