use database::services::admin::Page;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SearchParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    pub search: Option<String>,
}

impl SearchParams {
    pub fn page(&self) -> Page {
        clamp_page(self.page, self.per_page)
    }
}

/// Clamps the requested page into the supported range
pub fn clamp_page(page: u64, per_page: u64) -> Page {
    Page {
        page: page.max(1),
        per_page: per_page.clamp(1, MAX_PER_PAGE),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: Page, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(page.per_page);
        Self {
            page: page.page,
            per_page: page.per_page,
            total_pages,
            total_items,
            has_next: page.page < total_pages,
            has_prev: page.page > 1,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new<R>(rows: Vec<R>, total_items: u64, page: Page) -> Self
    where
        R: Into<T>,
    {
        Self {
            items: rows.into_iter().map(Into::into).collect(),
            pagination: PaginationMeta::new(page, total_items),
        }
    }
}

pub fn default_page() -> u64 {
    1
}

pub fn default_per_page() -> u64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_clamped() {
        let params = SearchParams {
            page: 0,
            per_page: 500,
            search: None,
        };
        assert_eq!(
            params.page(),
            Page {
                page: 1,
                per_page: MAX_PER_PAGE
            }
        );

        assert_eq!(clamp_page(3, 0), Page { page: 3, per_page: 1 });
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(Page { page: 2, per_page: 20 }, 45);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(meta.has_prev);

        let empty = PaginationMeta::new(clamp_page(default_page(), default_per_page()), 0);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next);
        assert!(!empty.has_prev);
    }
}
