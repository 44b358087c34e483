//! Page categories for pages rendered inside a tab.
//!
//! Every tab page root carries an `id` of the form `{entity}--{category}`
//! (e.g. `"a009_transaction--list"`) and `data-page-category`.

/// Paginated list with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Account and session pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_needs_both_parts() {
        assert!(is_valid_page_id("a008_trolley--list"));
        assert!(!is_valid_page_id("a008_trolley"));
        assert!(!is_valid_page_id("--list"));
    }
}
