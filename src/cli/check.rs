use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate every frontmatter file:\n    globoticket check\n\n\
                  Also list the files that passed:\n    globoticket check --detailed")]
pub struct CheckArgs {
    /// List valid files as well as problems
    #[arg(long)]
    pub detailed: bool,
}
