//! The five-stage note filter pipeline.
//!
//! Stages compose in a fixed order (class, author, search, tag, date);
//! each is a pure intersection over the remaining set, so an empty result
//! is an ordinary outcome, never an error.

use chrono::{DateTime, Duration, Utc};

use super::{DateRange, NoteQuery};
use crate::model::Note;

/// Applies every selector of `query` to `notes`. Result order is whatever
/// the input order was; sorting is a separate stage.
pub fn filter(mut notes: Vec<Note>, query: &NoteQuery, now: DateTime<Utc>) -> Vec<Note> {
    if let Some(class) = query.class.as_deref() {
        notes.retain(|n| n.class_code == class);
    }

    if let Some(author) = query.author.as_deref() {
        notes.retain(|n| n.author == author);
    }

    let search = query.search.trim().to_lowercase();
    if !search.is_empty() {
        notes.retain(|n| {
            n.title.to_lowercase().contains(&search) || n.body.to_lowercase().contains(&search)
        });
    }

    if let Some(tag) = query.tag.as_deref() {
        let tag = tag.to_lowercase();
        notes.retain(|n| n.tags.iter().any(|t| t.to_lowercase() == tag));
    }

    if let Some(cutoff) = cutoff_for(query.date, now) {
        notes.retain(|n| n.created >= cutoff);
    }

    notes
}

fn cutoff_for(range: DateRange, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match range {
        DateRange::All => None,
        DateRange::Today => now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|start| start.and_utc()),
        DateRange::Week => Some(now - Duration::days(7)),
        DateRange::Month => Some(now - Duration::days(30)),
    }
}
