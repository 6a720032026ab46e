//! Paged views over the ledger and the page-selector window

use crate::{LedgerError, LedgerResult};

/// Page sizes offered to the user
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 15, 30];

/// Most numbered page buttons shown at once
pub const MAX_VISIBLE_PAGES: usize = 10;

/// One page of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    /// Index of `items[0]` in the full list
    pub first_index: usize,
}

impl<T> Page<'_, T> {
    /// Items paired with their index in the full list
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (self.first_index + i, item))
    }
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice `records` to the 1-based `page`.
///
/// Pages outside `[1, total_pages]` come back empty.
pub fn paginate<T>(records: &[T], page: usize, page_size: usize) -> LedgerResult<Page<'_, T>> {
    if page_size == 0 {
        return Err(LedgerError::InvalidPageSize);
    }

    let total = total_pages(records.len(), page_size);
    if page == 0 || page > total {
        return Ok(Page {
            items: &[],
            page,
            total_pages: total,
            first_index: 0,
        });
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(records.len());
    Ok(Page {
        items: &records[start..end],
        page,
        total_pages: total,
        first_index: start,
    })
}

/// Numbered buttons for a page selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Consecutive page numbers, at most `MAX_VISIBLE_PAGES`
    pub pages: Vec<usize>,
    /// Last page, shown after an ellipsis when the window stops well short of it
    pub trailing: Option<usize>,
}

/// Which page buttons to show for `page` out of `total`
pub fn page_window(page: usize, total: usize) -> PageWindow {
    let (start, end) = if total <= MAX_VISIBLE_PAGES {
        (1, total)
    } else if page <= 3 {
        (1, MAX_VISIBLE_PAGES)
    } else if page + 2 >= total {
        (total - MAX_VISIBLE_PAGES + 1, total)
    } else {
        // Two before `page`, pulled back so the last page stays behind an ellipsis
        let start = (page - 2)
            .min(total.saturating_sub(MAX_VISIBLE_PAGES + 2))
            .max(1);
        (start, start + MAX_VISIBLE_PAGES - 1)
    };

    let trailing = (end + 2 < total).then_some(total);

    PageWindow {
        pages: (start..=end).collect(),
        trailing,
    }
}

/// Current page and page size of a paged list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl Pager {
    pub fn new(page_size: usize) -> LedgerResult<Self> {
        if page_size == 0 {
            return Err(LedgerError::InvalidPageSize);
        }
        Ok(Self { page: 1, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn next_page(&mut self, len: usize) {
        if self.page < total_pages(len, self.page_size) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jump to `page`; ignored when outside `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize, len: usize) {
        if (1..=total_pages(len, self.page_size)).contains(&page) {
            self.page = page;
        }
    }

    /// Change the page size and go back to page 1
    pub fn set_page_size(&mut self, page_size: usize) -> LedgerResult<()> {
        if page_size == 0 {
            return Err(LedgerError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    /// Pull the current page back in range after the list shrank
    pub fn clamp(&mut self, len: usize) {
        let total = total_pages(len, self.page_size);
        self.page = self.page.clamp(1, total.max(1));
    }

    pub fn slice<'a, T>(&self, records: &'a [T]) -> Page<'a, T> {
        let start = (self.page - 1) * self.page_size;
        let start = start.min(records.len());
        let end = (start + self.page_size).min(records.len());
        Page {
            items: &records[start..end],
            page: self.page,
            total_pages: total_pages(records.len(), self.page_size),
            first_index: start,
        }
    }

    pub fn window(&self, len: usize) -> PageWindow {
        page_window(self.page, total_pages(len, self.page_size))
    }

    /// "Menampilkan 11-20 dari 30 hari"
    pub fn range_label(&self, len: usize) -> String {
        if len == 0 {
            return "Menampilkan 0 dari 0 hari".to_string();
        }
        let first = ((self.page - 1) * self.page_size + 1).min(len);
        let last = (self.page * self.page_size).min(len);
        format!("Menampilkan {}-{} dari {} hari", first, last, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_paginate_25_by_10() {
        let all = records(25);

        let first = paginate(&all, 1, 10).unwrap();
        assert_eq!(first.items, &all[0..10]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.first_index, 0);

        let last = paginate(&all, 3, 10).unwrap();
        assert_eq!(last.items, &all[20..25]);
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.first_index, 20);
        assert_eq!(last.indexed().next(), Some((20, &20)));
    }

    #[test]
    fn test_paginate_edges() {
        let empty: Vec<usize> = Vec::new();
        let page = paginate(&empty, 1, 10).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);

        let all = records(25);
        assert!(paginate(&all, 0, 10).unwrap().items.is_empty());
        assert!(paginate(&all, 4, 10).unwrap().items.is_empty());
        assert!(matches!(paginate(&all, 1, 0), Err(LedgerError::InvalidPageSize)));

        assert_eq!(paginate(&all, 1, 30).unwrap().total_pages, 1);
    }

    #[test]
    fn test_window_small_total() {
        let window = page_window(2, 3);
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert_eq!(window.trailing, None);
    }

    #[test]
    fn test_window_first_pages() {
        let window = page_window(1, 15);
        assert_eq!(window.pages, (1..=10).collect::<Vec<_>>());
        assert_eq!(window.trailing, Some(15));
    }

    #[test]
    fn test_window_last_pages() {
        let window = page_window(15, 15);
        assert_eq!(window.pages, (6..=15).collect::<Vec<_>>());
        assert_eq!(window.trailing, None);

        assert_eq!(page_window(13, 15).pages, (6..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_middle() {
        let window = page_window(8, 15);
        assert_eq!(window.pages.len(), 10);
        assert!(window.pages.contains(&8));
        assert_eq!(window.pages, (3..=12).collect::<Vec<_>>());
        assert_eq!(window.trailing, Some(15));
    }

    #[test]
    fn test_window_starts_two_before_page() {
        let window = page_window(8, 30);
        assert_eq!(window.pages, (6..=15).collect::<Vec<_>>());
        assert_eq!(window.trailing, Some(30));

        assert_eq!(page_window(4, 30).pages, (2..=11).collect::<Vec<_>>());
        assert_eq!(page_window(18, 30).pages, (16..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_middle_near_end() {
        // Pulled back from 10..=19 to keep the trailing button
        let window = page_window(12, 15);
        assert_eq!(window.pages, (3..=12).collect::<Vec<_>>());
        assert_eq!(window.trailing, Some(15));
    }

    #[test]
    fn test_window_always_shows_page() {
        for total in 1..=40 {
            for page in 1..=total {
                let window = page_window(page, total);
                assert!(window.pages.contains(&page), "page {} of {}", page, total);
                assert!(window.pages.len() <= MAX_VISIBLE_PAGES);
                if let Some(last) = window.trailing {
                    assert_eq!(last, total);
                    assert!(!window.pages.contains(&last));
                }
            }
        }
    }

    #[test]
    fn test_pager_boundaries() {
        let mut pager = Pager::new(10).unwrap();
        pager.prev_page();
        assert_eq!(pager.page(), 1);

        pager.next_page(25);
        pager.next_page(25);
        assert_eq!(pager.page(), 3);
        pager.next_page(25);
        assert_eq!(pager.page(), 3);

        pager.go_to_page(7, 25);
        assert_eq!(pager.page(), 3);
        pager.go_to_page(2, 25);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_pager_page_size_change_resets() {
        let mut pager = Pager::new(10).unwrap();
        pager.go_to_page(3, 30);
        pager.set_page_size(15).unwrap();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_size(), 15);
        assert!(pager.set_page_size(0).is_err());
        assert!(Pager::new(0).is_err());
    }

    #[test]
    fn test_pager_slice_and_label() {
        let all = records(25);
        let mut pager = Pager::default();
        pager.go_to_page(2, all.len());

        let page = pager.slice(&all);
        assert_eq!(page.items, &all[10..20]);
        assert_eq!(pager.range_label(all.len()), "Menampilkan 11-20 dari 25 hari");

        pager.go_to_page(3, all.len());
        assert_eq!(pager.range_label(all.len()), "Menampilkan 21-25 dari 25 hari");

        // List shrinks under the pager
        pager.clamp(12);
        assert_eq!(pager.page(), 2);
        pager.clamp(0);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.range_label(0), "Menampilkan 0 dari 0 hari");
    }
}
