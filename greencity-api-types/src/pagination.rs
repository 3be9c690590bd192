//! Pagination envelope and page request types
//!
//! Pages are zero-based. The envelope invariant is that the returned
//! slice never exceeds the requested page size.

use serde::{Deserialize, Serialize};

/// Default page size applied when the client omits `size`
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Hard upper bound on page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// A zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page index, starting at 0
    pub page: u32,
    /// Number of items per page
    pub size: u32,
}

impl PageRequest {
    /// Build a request, clamping the size into `1..=MAX_PAGE_SIZE`
    pub fn of(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Offset of the first item of this page
    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination envelope returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageableDto<T> {
    /// Contents of the requested page
    pub page: Vec<T>,
    /// Total number of matching items across all pages
    pub total_elements: u64,
    /// Zero-based index of this page
    pub current_page: u32,
    /// Requested page size
    pub page_size: u32,
}

impl<T> PageableDto<T> {
    pub fn new(page: Vec<T>, total_elements: u64, current_page: u32, page_size: u32) -> Self {
        Self {
            page,
            total_elements,
            current_page,
            page_size,
        }
    }

    /// Slice `items` according to `request` and wrap the result
    pub fn paginate(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len() as u64;
        let page: Vec<T> = items
            .into_iter()
            .skip(request.offset())
            .take(request.size as usize)
            .collect();
        Self::new(page, total, request.page, request.size)
    }

    /// Map page contents, preserving the envelope
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageableDto<U> {
        PageableDto {
            page: self.page.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            current_page: self.current_page,
            page_size: self.page_size,
        }
    }
}
