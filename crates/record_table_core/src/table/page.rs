//! Pagination of rendered rows.
//!
//! # Invariants
//! - Pages are 1-based and `page_count >= 1`, even for an empty table.
//! - The effective page is clamped into `[1, page_count]`.

use serde::{Deserialize, Serialize};

/// Pagination summary shown under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Effective (clamped) 1-based page.
    pub page: usize,
    pub page_size: usize,
    /// Number of filtered rows across all pages.
    pub total: usize,
    pub page_count: usize,
}

impl PageInfo {
    pub fn new(requested_page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = total.div_ceil(page_size).max(1);
        Self {
            page: requested_page.clamp(1, page_count),
            page_size,
            total,
            page_count,
        }
    }

    /// Index range of this page within the full row list.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total);
        start.min(end)..end
    }
}

/// Returns the rows of the requested page and the effective page info.
pub fn paginate<T>(rows: Vec<T>, requested_page: usize, page_size: usize) -> (Vec<T>, PageInfo) {
    let info = PageInfo::new(requested_page, page_size, rows.len());
    let range = info.range();
    let page_rows = rows
        .into_iter()
        .skip(range.start)
        .take(range.len())
        .collect();
    (page_rows, info)
}
