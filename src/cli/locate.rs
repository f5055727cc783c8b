use clap::Parser;

/// Arguments for the locate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the file holding an event's frontmatter:\n    globoticket locate 123456\n\n\
                  Search a different root:\n    globoticket --root tests/product_info locate 123456")]
pub struct LocateArgs {
    /// Product code of the event
    pub product_code: String,
}
