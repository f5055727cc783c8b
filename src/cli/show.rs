use clap::{Parser, ValueEnum};

/// Output format for the show command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML mapping, as stored on disk
    #[default]
    Yaml,
    /// JSON object, as merged into API responses
    Json,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show frontmatter for an event:\n    globoticket show 111222\n\n\
                  Show it as JSON:\n    globoticket show 111222 --format json\n\n\
                  Print only the body:\n    globoticket show 111222 --content-only")]
pub struct ShowArgs {
    /// Product code of the event
    pub product_code: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Print only the document body
    #[arg(long, conflicts_with = "format")]
    pub content_only: bool,
}
