//! Page category constants for page standardization.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_order--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector and it leads straight to `domain/a001_order/`.

/// List of records: table or grid.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Free-form page (not found, errors).
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_order--list"));
        assert!(is_valid_page_id("a002_product--list"));
        assert!(!is_valid_page_id("a001_order"));
        assert!(!is_valid_page_id("--list"));
    }
}
