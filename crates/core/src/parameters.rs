//! Query parameters for the employee listing endpoint.

use serde::Deserialize;

/// Largest page a client may request; larger values are clamped.
pub const MAX_PAGE_SIZE: u32 = 50;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_age() -> i32 {
    i32::MAX
}

/// `?pageNumber=&pageSize=&minAge=&maxAge=&searchTerm=&orderBy=&fields=`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeParameters {
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub min_age: i32,
    #[serde(default = "default_max_age")]
    pub max_age: i32,
    pub search_term: Option<String>,
    pub order_by: Option<String>,
    /// Comma-separated field list for data shaping.
    pub fields: Option<String>,
}

impl Default for EmployeeParameters {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
            min_age: 0,
            max_age: default_max_age(),
            search_term: None,
            order_by: None,
            fields: None,
        }
    }
}

impl EmployeeParameters {
    /// Page number, never below 1.
    pub fn page_number(&self) -> u32 {
        self.page_number.max(1)
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`.
    pub fn page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page_number() - 1) * i64::from(self.page_size())
    }

    pub fn valid_age_range(&self) -> bool {
        self.max_age >= self.min_age
    }

    /// Trimmed search term; `None` when blank. Case folding happens in SQL so
    /// both sides of the comparison fold the same way.
    pub fn trimmed_search_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
