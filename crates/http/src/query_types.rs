//! Request/query types (Deserialize)

use serde::Deserialize;
use tasklist_core::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest};

const fn default_page() -> u32 {
    DEFAULT_PAGE
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: u32,
}

impl ListQuery {
    /// Page request exactly as asked for. `pageSize` has no upper bound so the
    /// envelope always echoes the size the caller paginates with.
    pub const fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_query_defaults() {
        let q: ListQuery = serde_json::from_value(json!({})).expect("valid ListQuery");
        assert_eq!(q.page_request(), PageRequest::new(1, 10));
    }

    #[test]
    fn test_list_query_camel_case_page_size() {
        let q: ListQuery = serde_json::from_value(json!({"page": 3, "pageSize": 25}))
            .expect("valid ListQuery");
        assert_eq!(q.page_request(), PageRequest::new(3, 25));
    }

    #[test]
    fn test_list_query_large_page_size_is_kept() {
        let q: ListQuery =
            serde_json::from_value(json!({"pageSize": 50_000})).expect("valid ListQuery");
        assert_eq!(q.page_request().page_size, 50_000);
    }

    #[test]
    fn test_list_query_zero_passes_through() {
        let q: ListQuery =
            serde_json::from_value(json!({"page": 0, "pageSize": 0})).expect("valid ListQuery");
        assert!(!q.page_request().is_valid());
    }
}
