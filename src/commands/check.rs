//! Check command implementation
//!
//! Parses every `*.yml` file under the root and reports documents that fail
//! to parse and product codes claimed by more than one file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::CheckArgs;
use crate::error::{GloboticketError, Result};
use crate::frontmatter::{CheckedFile, FrontmatterStore};

/// A problem found while checking the frontmatter tree
#[derive(Debug, PartialEq, Eq)]
pub enum Problem {
    Invalid { path: PathBuf, message: String },
    Duplicate { product_code: String, paths: Vec<PathBuf> },
}

pub fn run(store: &FrontmatterStore, args: &CheckArgs) -> Result<()> {
    let checked = store.check()?;
    let problems = find_problems(&checked);

    let ok = Style::new().green();
    let bad = Style::new().red().bold();
    let dim = Style::new().dim();
    let root = store.root();

    if args.detailed {
        for file in checked.iter().filter(|f| f.result.is_ok()) {
            println!(
                "{} {} {}",
                ok.apply_to("✓"),
                file.product_code,
                dim.apply_to(relative(&file.path, root).display())
            );
        }
    }

    for problem in &problems {
        match problem {
            Problem::Invalid { path, message } => {
                println!(
                    "{} {}: {}",
                    bad.apply_to("✗"),
                    relative(path, root).display(),
                    message
                );
            }
            Problem::Duplicate {
                product_code,
                paths,
            } => {
                let paths: Vec<String> = paths
                    .iter()
                    .map(|p| relative(p, root).display().to_string())
                    .collect();
                println!(
                    "{} {}: defined by {} files: {}",
                    bad.apply_to("✗"),
                    product_code,
                    paths.len(),
                    paths.join(", ")
                );
            }
        }
    }

    println!(
        "Checked {} frontmatter file(s) under {}: {} problem(s)",
        checked.len(),
        root.display(),
        problems.len()
    );

    if problems.is_empty() {
        Ok(())
    } else {
        Err(GloboticketError::CheckFailed {
            count: problems.len(),
        })
    }
}

/// Invalid documents in walk order, then duplicated product codes by code.
pub fn find_problems(checked: &[CheckedFile]) -> Vec<Problem> {
    let mut problems: Vec<Problem> = checked
        .iter()
        .filter_map(|file| match &file.result {
            Ok(_) => None,
            Err(err) => Some(Problem::Invalid {
                path: file.path.clone(),
                message: err.to_string(),
            }),
        })
        .collect();

    let mut by_code: BTreeMap<&str, Vec<PathBuf>> = BTreeMap::new();
    for file in checked {
        by_code
            .entry(file.product_code.as_str())
            .or_default()
            .push(file.path.clone());
    }
    problems.extend(
        by_code
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(code, paths)| Problem::Duplicate {
                product_code: code.to_string(),
                paths,
            }),
    );

    problems
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
