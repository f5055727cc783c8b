//! GloboTicket - event catalog frontmatter
//!
//! Command line access to the frontmatter files that enrich catalog events:
//! look one up by product code, find its path, or validate the whole tree.

use clap::Parser;

use globoticket::cli::{Cli, Commands};
use globoticket::commands;
use globoticket::error::GloboticketError;
use globoticket::frontmatter::FrontmatterStore;
use globoticket::logging;

/// Exit code for a product code without a frontmatter file.
const EXIT_NOT_FOUND: i32 = 2;

fn exit_code(err: &GloboticketError) -> i32 {
    if err.is_not_found() { EXIT_NOT_FOUND } else { 1 }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();
    tracing::debug!(root = %config.root().display(), "using frontmatter root");
    let store = FrontmatterStore::from_config(&config);

    let result = match &cli.command {
        Commands::Show(args) => commands::show::run(&store, args),
        Commands::Locate(args) => commands::locate::run(&store, args),
        Commands::Check(args) => commands::check::run(&store, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}
