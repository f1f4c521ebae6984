//! This module defines the common functionality for paging records.

use std::num::NonZeroUsize;

/// The number of pages needed to show `len` items, at least 1 so that an
/// empty table still has a page to show.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Returns page `page` (1-indexed) of `items`.
///
/// The last page may be shorter than `page_size`. Page 0 and pages past the
/// end are empty.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, page: usize) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };

    let start = index.saturating_mul(page_size.get()).min(items.len());
    let end = start.saturating_add(page_size.get()).min(items.len());

    &items[start..end]
}

/// Tracks the page the user is viewing.
///
/// Moving below page 1 or above the last page leaves the cursor where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    page_size: NonZeroUsize,
    len: usize,
}

impl PageCursor {
    /// A cursor on the first page of a sequence of `len` items.
    pub fn new(page_size: NonZeroUsize, len: usize) -> Self {
        Self {
            page: 1,
            page_size,
            len,
        }
    }

    /// The current page number, starting at 1.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The number of items per page.
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// See [total_pages].
    pub fn total_pages(&self) -> usize {
        total_pages(self.len, self.page_size)
    }

    /// Go to `page`. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() || page == self.page {
            return false;
        }

        self.page = page;
        true
    }

    /// Go to the next page, if there is one.
    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    /// Go to the previous page, if there is one.
    pub fn previous(&mut self) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to(page),
            None => false,
        }
    }

    /// Update the item count, e.g. after the records were re-filtered.
    ///
    /// The current page is clamped to the new last page.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.page = self.page.min(self.total_pages());
    }

    /// The items on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page_size, self.page)
    }
}
