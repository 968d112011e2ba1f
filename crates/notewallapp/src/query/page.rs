//! Fixed-size pagination over an ordered note sequence.

/// One page of an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// True iff items exist beyond the end of this slice.
    pub has_more: bool,
    /// Size of the full sequence before slicing.
    pub total: usize,
    /// The page actually served, after coercion.
    pub page: u32,
}

/// Slices `items` into its 1-based `page` of `page_size` entries.
///
/// Bad input never errors: a non-positive page is coerced to 1 and an
/// out-of-range page yields an empty slice.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let total = items.len();
    let start = (page as usize - 1).saturating_mul(page_size);
    if start >= total {
        return Page {
            items: Vec::new(),
            has_more: false,
            total,
            page,
        };
    }
    let end = (start + page_size).min(total);
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();
    Page {
        items,
        has_more: end < total,
        total,
        page,
    }
}
