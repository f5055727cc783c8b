//! Split a frontmatter document into its YAML header and body.
//!
//! A document looks like:
//!
//! ```text
//! ---
//! title: Show
//! ---
//! Free text body, kept verbatim.
//! ```
//!
//! The header ends at the first `---\n` after the opening line. That
//! marker is not required to start a line, so `title: a---\n` also closes
//! the header.

use serde_yaml::{Mapping, Value};

use super::document::{CONTENT_KEY, Frontmatter};
use crate::error::{Result, frontmatter as errors};

/// Marker line opening and closing the header, newline included.
pub const DELIMITER: &str = "---\n";

/// Split `text` into `(header, body)` without decoding the header.
///
/// Returns `None` if the document does not start with [`DELIMITER`] or
/// never closes the header.
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix(DELIMITER)?;
    let end = rest.find(DELIMITER)?;
    Some((&rest[..end], &rest[end + DELIMITER.len()..]))
}

/// Parse a frontmatter document into a single mapping: the header fields
/// plus the body stored under `content`. Merge keys (`<<: *anchor`) in the
/// header are resolved.
///
/// Fails with an invalid frontmatter error if the markers are missing, the
/// header is not valid YAML, or the header is not a mapping.
pub fn parse_frontmatter(text: &str) -> Result<Frontmatter> {
    let (header, body) = split_frontmatter(text).ok_or_else(errors::invalid_structure)?;

    let mut decoded: Value = serde_yaml::from_str(header)?;
    decoded.apply_merge()?;
    let Value::Mapping(mut mapping) = decoded else {
        return Err(errors::mapping_required());
    };

    insert_content(&mut mapping, body);
    Ok(Frontmatter::new(mapping))
}

fn insert_content(mapping: &mut Mapping, body: &str) {
    let previous = mapping.insert(Value::from(CONTENT_KEY), Value::from(body));
    if previous.is_some() {
        tracing::warn!("frontmatter header defines '{CONTENT_KEY}', replaced by the document body");
    }
}
