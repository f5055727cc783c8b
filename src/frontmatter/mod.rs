//! Frontmatter metadata for catalog events
//!
//! Each event's descriptive content lives in a `<product_code>.yml` file
//! somewhere under a root directory: a YAML header between `---` lines,
//! then a free-text body. Lookups locate the file, parse it, and hand back
//! the header fields plus the body under `content`.

mod document;
mod locator;
mod parser;
mod store;

pub use document::{CONTENT_KEY, Frontmatter};
pub use locator::{FRONTMATTER_EXTENSION, find_frontmatter_file, frontmatter_file_name};
pub use parser::{DELIMITER, parse_frontmatter, split_frontmatter};
pub use store::{CheckedFile, FrontmatterStore};
