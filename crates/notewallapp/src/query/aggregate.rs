//! Collection-wide aggregates for the listing sidebar.
//!
//! Both aggregates run over the entire unfiltered collection so the author
//! dropdown and tag cloud stay stable while filters narrow the page.

use std::collections::BTreeSet;

use crate::model::Note;

/// Distinct author names across the whole collection, ascending.
pub fn unique_authors(notes: &[Note]) -> Vec<String> {
    let set: BTreeSet<&str> = notes.iter().map(|n| n.author.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Tag occurrence counts across the whole collection, descending by count.
///
/// Counting groups case-insensitively; the first-seen casing is the one
/// displayed. Hashtags are not counted, only explicit tags.
pub fn tag_cloud(notes: &[Note]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for note in notes {
        for tag in &note.tags {
            let key = tag.to_lowercase();
            match order.iter().position(|t| t.to_lowercase() == key) {
                Some(i) => counts[i] += 1,
                None => {
                    order.push(tag.clone());
                    counts.push(1);
                }
            }
        }
    }
    let mut cloud: Vec<(String, usize)> = order.into_iter().zip(counts).collect();
    cloud.sort_by(|a, b| b.1.cmp(&a.1));
    cloud
}
