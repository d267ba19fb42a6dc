//! Keyword filtering and page slicing over child summaries.

use crate::core::types::ChildSummary;

/// Keep children whose name contains `keyword`, ignoring case
///
/// An empty keyword keeps everything. Children without a name never
/// match a non-empty keyword.
pub fn filter_by_keyword(children: Vec<ChildSummary>, keyword: &str) -> Vec<ChildSummary> {
    if keyword.is_empty() {
        return children;
    }

    let needle = keyword.to_lowercase();
    children
        .into_iter()
        .filter(|child| {
            child
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Chunk `items` into pages of `page_size` and return page `page_num`
///
/// A zero page size, a negative argument or a page past the end all
/// yield an empty page.
pub fn paginate<T>(items: Vec<T>, page_num: i64, page_size: i64) -> Vec<T> {
    let (Ok(page_num), Ok(page_size)) = (usize::try_from(page_num), usize::try_from(page_size))
    else {
        return Vec::new();
    };
    if page_size == 0 {
        return Vec::new();
    }

    match page_num.checked_mul(page_size) {
        Some(start) if start < items.len() => {
            items.into_iter().skip(start).take(page_size).collect()
        }
        _ => Vec::new(),
    }
}
