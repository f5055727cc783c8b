//! Locate command implementation

use crate::cli::LocateArgs;
use crate::error::Result;
use crate::frontmatter::FrontmatterStore;

pub fn run(store: &FrontmatterStore, args: &LocateArgs) -> Result<()> {
    let path = store.find(&args.product_code)?;
    println!("{}", path.display());
    Ok(())
}
