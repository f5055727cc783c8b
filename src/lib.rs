//! GloboTicket frontmatter layer
//!
//! Enriches catalog events with human-authored content kept as
//! YAML-prefixed text files on disk, keyed by product code.
//!
//! ```no_run
//! use globoticket::FrontmatterStore;
//!
//! let store = FrontmatterStore::new("product_info");
//! let frontmatter = store.get("111222")?;
//! println!("{}", frontmatter.content());
//! # Ok::<(), globoticket::GloboticketError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod logging;

pub use config::FrontmatterConfig;
pub use error::{GloboticketError, Result};
pub use frontmatter::{Frontmatter, FrontmatterStore, find_frontmatter_file, parse_frontmatter};
