//! Page-by-page view over a locally held list
//!
//! The paginator never fetches; it only derives page counts and slice bounds
//! from the number of rows it is given.

use tracing::warn;

/// Rows shown per page in every paginated table
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `count` rows. Zero rows gives zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Contiguous slice of `data` for the 1-based `page`
pub fn rows_for_page<T>(data: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(data.len());
    let end = page.saturating_mul(page_size).min(data.len());
    &data[start..end]
}

/// Current page of one table.
///
/// `1 <= current_page <= max(1, total_pages)` holds after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    total_pages: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Recompute the page count for `count` rows, pulling the current page
    /// back into range if the list shrank.
    pub fn set_row_count(&mut self, count: usize) {
        self.total_pages = total_pages(count, self.page_size);
        self.current_page = self.current_page.clamp(1, self.last_page());
    }

    fn last_page(&self) -> usize {
        self.total_pages.max(1)
    }

    /// Jump to page `n`. Out-of-range requests are clamped; returns the page
    /// actually selected.
    pub fn set_page(&mut self, n: usize) -> usize {
        let clamped = n.clamp(1, self.last_page());
        if clamped != n {
            warn!(
                requested = n,
                total = self.total_pages,
                "Page out of range, clamping to {}",
                clamped
            );
        }
        self.current_page = clamped;
        clamped
    }

    /// Prev control is disabled on the first page
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Next control is disabled on the last page, and when there are no pages
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Rows of `data` visible on the current page
    pub fn visible<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        rows_for_page(data, self.current_page, self.page_size)
    }
}
