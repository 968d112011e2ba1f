//! Stable note ordering.
//!
//! Every key uses a stable sort so ties preserve the incoming relative
//! order, which matters for the like/comment counts where ties are common.
//! `popular` ranks by comment count, then likes, then id, all descending.

use std::cmp::Reverse;

use super::SortKey;
use crate::model::Note;

/// Orders `notes` in place. `None` (an unrecognized sort key) leaves the
/// incoming order untouched.
pub fn sort(notes: &mut [Note], key: Option<SortKey>) {
    let Some(key) = key else {
        return;
    };
    match key {
        SortKey::Recent => notes.sort_by_key(|n| Reverse(n.id)),
        SortKey::Oldest => notes.sort_by_key(|n| n.id),
        SortKey::Title => notes.sort_by_key(|n| n.title.to_lowercase()),
        SortKey::Author => notes.sort_by_key(|n| n.author.to_lowercase()),
        SortKey::MostLiked => notes.sort_by_key(|n| Reverse(n.likes)),
        SortKey::MostCommented => notes.sort_by_key(|n| Reverse(n.comments.len())),
        SortKey::Popular => {
            notes.sort_by_key(|n| Reverse((n.comments.len(), n.likes, n.id)));
        }
    }
}
