//! Search Filter
//!
//! Substring projection used by the store's filtered view.

use crate::models::Item;

/// Search terms shorter than this (in UTF-16 code units, like a JS string
/// length) do not filter at all
pub const MIN_SEARCH_LEN: usize = 3;

/// Items whose title contains `term`, in their original order.
/// Case-sensitive. Returns everything while the term is too short.
pub fn filter_items(items: &[Item], term: &str) -> Vec<Item> {
    if term.encode_utf16().count() < MIN_SEARCH_LEN {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.title.contains(term))
        .cloned()
        .collect()
}
