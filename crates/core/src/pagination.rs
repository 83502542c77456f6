//! Page requests, pages, and the page envelope returned to clients.
//!
//! The store reports a slice plus the total row count; [`Page`] carries
//! both alongside the originating [`PageRequest`], and [`PageResponse`] is
//! the serialized envelope. Any element type can be paged, and
//! [`Page::map`] converts entities to response DTOs without touching the
//! metadata.

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::CoreError;

/// Default zero-based page index when `?page=` is omitted.
pub const DEFAULT_PAGE: i64 = 0;

/// Default page size when `?size=` is omitted.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

/// A validated zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    /// Validate user-supplied paging parameters.
    ///
    /// Missing values take the defaults. A negative page or a size below 1
    /// is rejected. Any larger size is honored as requested.
    pub fn new(page: Option<i64>, size: Option<i64>) -> Result<Self, CoreError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 0 {
            return Err(CoreError::InvalidData(format!(
                "page must be greater than or equal to 0, got {page}"
            )));
        }
        if size < 1 {
            return Err(CoreError::InvalidData(format!(
                "size must be greater than or equal to 1, got {size}"
            )));
        }

        let request = Self { page, size };
        // Reject indices whose offset would overflow before any query runs.
        request.checked_offset().ok_or_else(|| {
            CoreError::InvalidData(format!("page {page} is out of range"))
        })?;
        Ok(request)
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        self.checked_offset().unwrap_or(i64::MAX)
    }

    /// Number of rows to fetch.
    pub fn limit(&self) -> i64 {
        self.size
    }

    fn checked_offset(&self) -> Option<i64> {
        self.page.checked_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the store's total count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub request: PageRequest,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// Convert every element, keeping paging metadata intact.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }

    /// `ceil(total / size)`, zero for an empty result set.
    pub fn total_pages(&self) -> i64 {
        let size = self.request.size();
        if self.total_elements <= 0 {
            0
        } else {
            (self.total_elements + size - 1) / size
        }
    }
}

/// Page envelope sent to clients.
///
/// ```json
/// { "content": [...], "page": 0, "size": 3, "totalElements": 5, "totalPages": 2 }
/// ```
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        Self {
            page: page.request.page(),
            size: page.request.size(),
            total_elements: page.total_elements,
            total_pages,
            content: page.content,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
