//! Paging query parameters and the paged response envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Query parameters for `GET /api/users`.
///
/// Uses `serde_with` to parse numbers from query strings. Out-of-range
/// values are not errors: they are normalized by [`ListUsersQuery::page`]
/// and [`ListUsersQuery::page_size`].
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Substring matched against first name, last name and email.
    pub search: Option<String>,

    /// 1-based page number (default 1).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    /// Items per page, 1 to 100 (default 10).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl ListUsersQuery {
    /// Requested page, with anything below 1 treated as 1.
    pub fn page(&self) -> u64 {
        match self.page {
            Some(page) if page >= 1 => page as u64,
            _ => 1,
        }
    }

    /// Requested page size, with anything outside `1..=100` treated as 10.
    pub fn page_size(&self) -> u64 {
        match self.page_size {
            Some(size) if (1..=MAX_PAGE_SIZE as i64).contains(&size) => size as u64,
            _ => DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    /// Number of matches before pagination.
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<i64>, page_size: Option<i64>) -> ListUsersQuery {
        ListUsersQuery {
            search: None,
            page,
            page_size,
        }
    }

    #[test]
    fn test_defaults() {
        let q = query(None, None);
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_below_one_becomes_one() {
        assert_eq!(query(Some(0), None).page(), 1);
        assert_eq!(query(Some(-3), None).page(), 1);
        assert_eq!(query(Some(4), None).page(), 4);
    }

    #[test]
    fn test_page_size_out_of_range_becomes_default() {
        assert_eq!(query(None, Some(0)).page_size(), 10);
        assert_eq!(query(None, Some(500)).page_size(), 10);
        assert_eq!(query(None, Some(-1)).page_size(), 10);
    }

    #[test]
    fn test_page_size_bounds_are_inclusive() {
        assert_eq!(query(None, Some(1)).page_size(), 1);
        assert_eq!(query(None, Some(100)).page_size(), 100);
        assert_eq!(query(None, Some(101)).page_size(), 10);
    }

    #[test]
    fn test_parses_camel_case_query_values() {
        let json = r#"{"search": "Alan", "page": "2", "pageSize": "25"}"#;
        let q: ListUsersQuery = serde_json::from_str(json).unwrap();
        assert_eq!(q.search.as_deref(), Some("Alan"));
        assert_eq!(q.page(), 2);
        assert_eq!(q.page_size(), 25);
    }

    #[test]
    fn test_non_numeric_page_is_error() {
        let json = r#"{"page": "two"}"#;
        assert!(serde_json::from_str::<ListUsersQuery>(json).is_err());
    }

    #[test]
    fn test_paged_result_field_names() {
        let page = PagedResult {
            items: vec![1, 2],
            total_count: 25,
            page: 3,
            page_size: 2,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalCount"], 25);
        assert_eq!(json["pageSize"], 2);
    }
}
