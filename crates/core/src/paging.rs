//! Paged result sets and the metadata sent in the `X-Pagination` header.

use serde::Serialize;

/// Paging metadata for one page of a larger result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub total_count: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl MetaData {
    pub fn new(total_count: i64, page_number: u32, page_size: u32) -> Self {
        let size = i64::from(page_size.max(1));
        let total_pages = u32::try_from((total_count + size - 1) / size).unwrap_or(u32::MAX);
        Self {
            current_page: page_number,
            total_pages,
            page_size,
            total_count,
            has_previous: page_number > 1,
            has_next: page_number < total_pages,
        }
    }
}

/// One page of items plus its [`MetaData`].
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub meta: MetaData,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, total_count: i64, page_number: u32, page_size: u32) -> Self {
        Self {
            items,
            meta: MetaData::new(total_count, page_number, page_size),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_for_middle_page() {
        let meta = MetaData::new(25, 2, 10);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_previous);
        assert!(meta.has_next);
    }

    #[test]
    fn metadata_for_empty_set() {
        let meta = MetaData::new(0, 1, 10);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_previous);
        assert!(!meta.has_next);
    }

    #[test]
    fn metadata_serializes_camel_case() {
        let json = serde_json::to_value(MetaData::new(10, 1, 10)).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["hasNext"], false);
    }
}
