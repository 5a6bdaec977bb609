use serde::{Deserialize, Serialize};

/// Query parameters accepted by the storefront list endpoints.
///
/// Absent fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Sort key in `field-direction` form, e.g. `createdAt-desc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl PaginationParams {
    pub fn first_page(limit: u32) -> Self {
        Self {
            page: Some(1),
            limit: Some(limit),
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: Option<String>) -> Self {
        self.sort = sort;
        self
    }
}
