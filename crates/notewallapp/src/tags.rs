//! Tag and hashtag extraction.
//!
//! Notes carry two flavors of labels: explicit tags typed into a
//! comma-separated field, and inline hashtags written into the body
//! (`#cs124`). [`extract`] merges both into one deduplicated picture:
//! the tag field is split and trimmed, the body is scanned for `#` tokens,
//! and the hashtag set is the union of inline hashtags, `#`-prefixed tag
//! entries (prefix stripped), and every other non-empty tag entry.
//!
//! Case is preserved as written; comparisons elsewhere (the tag filter, the
//! tag cloud) are case-insensitive instead. Extraction is pure and never
//! consults a registry.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `#` immediately followed by word characters or hyphens, no embedded
/// whitespace. The `#` itself is not captured.
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([\w-]+)").unwrap());

/// Result of parsing a note's tag field and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTags {
    /// Explicit tag entries, in input order.
    pub tags: Vec<String>,
    /// Union of inline hashtags and tag entries, `#` stripped.
    pub hashtags: Vec<String>,
}

/// Parses the raw tag input and scans the body for inline hashtags.
pub fn extract(body: &str, raw_tag_input: &str) -> ExtractedTags {
    let mut tags: Vec<String> = Vec::new();
    let mut hashtags: Vec<String> = Vec::new();

    for capture in HASHTAG.captures_iter(body) {
        push_unique(&mut hashtags, &capture[1]);
    }

    for entry in raw_tag_input.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if let Some(stripped) = entry.strip_prefix('#') {
            if !stripped.is_empty() {
                push_unique(&mut hashtags, stripped);
            }
        } else {
            push_unique(&mut tags, entry);
            push_unique(&mut hashtags, entry);
        }
    }

    ExtractedTags { tags, hashtags }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
