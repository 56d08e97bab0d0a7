//! Page slicing for ordered collections.
//!
//! Pages are 1-based. A requested page beyond the end clamps to the last
//! page, so a non-empty collection never yields an empty page.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DocketError, Result};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages for `total_items` at `page_size`, never less than one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_items: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(total_items, page_size))
}

/// Index range of a page after clamping.
pub fn page_range(total_items: usize, page: usize, page_size: usize) -> Range<usize> {
    let size = page_size.max(1);
    let page = clamp_page(page, total_items, size);
    let start = (page - 1) * size;
    let end = (page * size).min(total_items);
    start..end
}

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page.
    pub items: &'a [T],
    /// 1-based page number after clamping.
    pub number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// 1-based position of the first item shown, 0 when empty.
    pub fn first_item_number(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.number - 1) * self.page_size + 1
        }
    }

    /// 1-based position of the last item shown, 0 when empty.
    pub fn last_item_number(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_item_number() + self.items.len() - 1
        }
    }
}

/// Stored page and page size for one list view.
///
/// Deserialization goes through the same checks as the setters, so a stored
/// page size of 0 is rejected and the page is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredPaginator")]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

impl Paginator {
    /// Create a paginator on page 1.
    pub fn new(page_size: usize) -> Result<Self> {
        validate_page_size(page_size)?;
        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    /// Current page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Record a new source length and clamp the current page into range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = clamp_page(self.page, self.total_items, self.page_size);
    }

    /// Move to a page, clamped into range. Returns the page actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = clamp_page(page, self.total_items, self.page_size);
        self.page
    }

    /// Change the page size, recomputing total pages and clamping the page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        validate_page_size(page_size)?;
        self.page_size = page_size;
        self.page = clamp_page(self.page, self.total_items, self.page_size);
        debug!(
            page_size,
            page = self.page,
            total_pages = self.total_pages(),
            "page size changed"
        );
        Ok(())
    }

    /// Advance one page if possible.
    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page + 1)
    }

    /// Go back one page if possible.
    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    /// Index range of the current page.
    pub fn range(&self) -> Range<usize> {
        page_range(self.total_items, self.page, self.page_size)
    }

    /// Slice `items` at the stored page and size without changing state.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[page_range(items.len(), self.page, self.page_size)]
    }

    /// Sync with `items` and return the current page.
    pub fn paginate<'a, T>(&mut self, items: &'a [T]) -> Page<'a, T> {
        self.set_total_items(items.len());
        Page {
            items: &items[self.range()],
            number: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages(),
            total_items: self.total_items,
        }
    }
}

#[derive(Deserialize)]
struct StoredPaginator {
    page: usize,
    page_size: usize,
    #[serde(default)]
    total_items: usize,
}

impl TryFrom<StoredPaginator> for Paginator {
    type Error = DocketError;

    fn try_from(stored: StoredPaginator) -> Result<Self> {
        let mut paginator = Paginator::new(stored.page_size)?;
        paginator.set_total_items(stored.total_items);
        paginator.set_page(stored.page);
        Ok(paginator)
    }
}

fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(DocketError::Validation(
            "Page size must be at least 1".to_string(),
        ));
    }
    Ok(())
}
