use std::ops::Range;

use serde::Serialize;

pub const PAGE_SIZE: usize = 10;

/// Number of pages for `len` items. Never below 1, so an empty result is "page 1 of 1".
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of `page` (1-indexed), bounded by `len`.
pub fn page_window(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_window(items.len(), page, page_size)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageInfo {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}
