//! Show command implementation

use std::io::Write;

use crate::cli::{OutputFormat, ShowArgs};
use crate::error::{GloboticketError, Result};
use crate::frontmatter::{Frontmatter, FrontmatterStore};

pub fn run(store: &FrontmatterStore, args: &ShowArgs) -> Result<()> {
    let frontmatter = store.get(&args.product_code)?;
    let rendered = render(&frontmatter, args)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}

fn render(frontmatter: &Frontmatter, args: &ShowArgs) -> Result<String> {
    if args.content_only {
        return Ok(frontmatter.content().to_string());
    }
    match args.format {
        OutputFormat::Yaml => frontmatter.to_yaml(),
        OutputFormat::Json => {
            let json = serde_json::Value::Object(frontmatter.to_json()?);
            serde_json::to_string_pretty(&json).map_err(GloboticketError::from)
        }
    }
}
