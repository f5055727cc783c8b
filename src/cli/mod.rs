//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - show: Show command arguments
//! - locate: Locate command arguments
//! - check: Check command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{FrontmatterConfig, ROOT_ENV_VAR};

pub mod check;
pub mod completions;
pub mod locate;
pub mod show;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use locate::LocateArgs;
pub use show::{OutputFormat, ShowArgs};

/// GloboTicket - event catalog frontmatter
///
/// Look up and validate the descriptive content attached to catalog events.
#[derive(Parser, Debug)]
#[command(
    name = "globoticket",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Frontmatter lookups for the GloboTicket event catalog",
    long_about = "GloboTicket keeps human-authored event content in <product_code>.yml files: \
                  a YAML header between '---' lines followed by a free-text body. \
                  This tool locates, parses and validates those files.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  globoticket show 111222                 \x1b[90m# Print the merged frontmatter\x1b[0m\n   \
                  globoticket show 111222 --format json   \x1b[90m# Same, as JSON\x1b[0m\n   \
                  globoticket locate 123456               \x1b[90m# Print the file path\x1b[0m\n   \
                  globoticket --root ./product_info check \x1b[90m# Validate every file\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Frontmatter root directory (defaults to ./product_info)
    #[arg(long, short = 'r', global = true, env = ROOT_ENV_VAR)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Frontmatter configuration resolved from the flags and environment.
    pub fn config(&self) -> FrontmatterConfig {
        FrontmatterConfig::resolve(self.root.clone())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the merged frontmatter for a product code
    Show(ShowArgs),

    /// Print the path of the frontmatter file for a product code
    Locate(LocateArgs),

    /// Validate every frontmatter file under the root
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
