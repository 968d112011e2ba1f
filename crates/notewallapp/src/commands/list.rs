use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::Note;
use crate::query::{self, NoteQuery};
use crate::store::NoteStore;

/// One rendered listing: the requested page plus the collection-wide
/// aggregates for the filter controls.
#[derive(Debug, Clone)]
pub struct Listing {
    pub notes: Vec<Note>,
    pub total: usize,
    pub page: u32,
    pub has_more: bool,
    /// Distinct authors over the unfiltered collection, ascending.
    pub authors: Vec<String>,
    /// Tag occurrence counts over the unfiltered collection, descending.
    pub tag_cloud: Vec<(String, usize)>,
}

/// Filter, sort, and paginate the collection per `query`. Aggregates are
/// computed over the unfiltered set so the selector options stay stable
/// while filters narrow the page.
pub fn run<S: NoteStore>(
    store: &S,
    query: &NoteQuery,
    now: DateTime<Utc>,
    page_size: usize,
) -> Result<Listing> {
    let all = store.list()?;
    let authors = query::unique_authors(&all);
    let tag_cloud = query::tag_cloud(&all);

    let mut notes = query::filter(all, query, now);
    query::sort(&mut notes, query.sort);
    let page = query::paginate(notes, query.page, page_size);

    Ok(Listing {
        notes: page.items,
        total: page.total,
        page: page.page,
        has_more: page.has_more,
        authors,
        tag_cloud,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortKey;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_default_query_lists_recent_first() {
        let fixture = StoreFixture::new().with_notes(3);
        let listing = run(&fixture.store, &NoteQuery::default(), Utc::now(), 5).unwrap();
        let ids: Vec<u64> = listing.notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(listing.total, 3);
        assert!(!listing.has_more);
    }

    #[test]
    fn test_pagination_with_fixed_page_size() {
        let fixture = StoreFixture::new().with_notes(12);
        let page1 = run(&fixture.store, &NoteQuery::default(), Utc::now(), 5).unwrap();
        assert_eq!(page1.notes.len(), 5);
        assert!(page1.has_more);

        let query = NoteQuery {
            page: 3,
            ..Default::default()
        };
        let page3 = run(&fixture.store, &query, Utc::now(), 5).unwrap();
        assert_eq!(page3.notes.len(), 2);
        assert!(!page3.has_more);
    }

    #[test]
    fn test_out_of_range_page_is_empty_success() {
        let fixture = StoreFixture::new().with_notes(3);
        let query = NoteQuery {
            page: 999,
            ..Default::default()
        };
        let listing = run(&fixture.store, &query, Utc::now(), 5).unwrap();
        assert!(listing.notes.is_empty());
        assert!(!listing.has_more);
        assert_eq!(listing.total, 3);
    }

    #[test]
    fn test_aggregates_ignore_filters() {
        let fixture = StoreFixture::new()
            .with_note("ana", "A", "body one", "CS124")
            .with_note("ben", "B", "body two", "PHY211");
        let query = NoteQuery {
            class: Some("CS124".into()),
            ..Default::default()
        };
        let listing = run(&fixture.store, &query, Utc::now(), 5).unwrap();
        assert_eq!(listing.notes.len(), 1);
        // The author dropdown still offers both.
        assert_eq!(listing.authors, vec!["ana", "ben"]);
    }

    #[test]
    fn test_tag_cloud_counts_tags() {
        let mut fixture = StoreFixture::new().with_notes(2);
        let mut note = fixture.store.get(1).unwrap();
        note.tags = vec!["review".into()];
        fixture.store.update(&note).unwrap();
        let mut note = fixture.store.get(2).unwrap();
        note.tags = vec!["review".into(), "hw".into()];
        fixture.store.update(&note).unwrap();

        let listing = run(&fixture.store, &NoteQuery::default(), Utc::now(), 5).unwrap();
        assert_eq!(listing.tag_cloud[0], ("review".to_string(), 2));
    }

    #[test]
    fn test_popular_sort_through_listing() {
        let fixture = StoreFixture::new()
            .with_popular_note("quiet", 0, 0)
            .with_popular_note("liked", 7, 0)
            .with_popular_note("debated", 2, 4);
        let query = NoteQuery {
            sort: Some(SortKey::Popular),
            ..Default::default()
        };
        let listing = run(&fixture.store, &query, Utc::now(), 5).unwrap();
        let titles: Vec<&str> = listing.notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["debated", "liked", "quiet"]);
    }

    #[test]
    fn test_empty_store_lists_cleanly() {
        let fixture = StoreFixture::new();
        let listing = run(&fixture.store, &NoteQuery::default(), Utc::now(), 5).unwrap();
        assert!(listing.notes.is_empty());
        assert!(listing.authors.is_empty());
        assert!(listing.tag_cloud.is_empty());
        assert_eq!(listing.total, 0);
    }
}
