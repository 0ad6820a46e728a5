//! Pagination state derived from a returned page.
//!
//! The catalog is queried with offset paging and the storefront never asks
//! for a count of remaining items, so "has next" is a heuristic: a full page
//! implies there may be more. When the total is an exact multiple of the page
//! size the last page still reports `has_next`, and the following page comes
//! back empty.

use serde::{Deserialize, Serialize};

/// Previous/next availability for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Zero-based index of the page being shown.
    pub current_page: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PaginationState {
    /// Derive pagination from the page index, page size and the number of
    /// items the catalog actually returned.
    #[must_use]
    pub fn derive(page_index: u32, page_size: u32, returned: usize) -> Self {
        Self {
            current_page: page_index,
            has_prev: page_index > 0,
            has_next: u32::try_from(returned).is_ok_and(|n| n == page_size),
        }
    }

    /// Index of the previous page, if there is one.
    #[must_use]
    pub const fn prev_page(&self) -> Option<u32> {
        if self.has_prev {
            Some(self.current_page - 1)
        } else {
            None
        }
    }

    /// Index of the next page, if there may be one.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}
