//! Page-number window for offset based result lists.

use serde::{Deserialize, Serialize};

use crate::search_const::{PAGE_SIZE, PAGINATION_OFFSET};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page_size: u64,
    /// Pages shown on each side of `current_page`.
    pub offset: u64,
    pub total_pages: u64,
    /// 1-based.
    pub current_page: u64,
    pub pages: Vec<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE, PAGINATION_OFFSET)
    }
}

impl Pagination {
    pub fn new(page_size: u64, offset: u64) -> Self {
        Self { page_size, offset, total_pages: 0, current_page: 0, pages: Vec::new() }
    }

    /// Derives the page counters and the visible window from a result page.
    ///
    /// The window is centred on the current page. Slots that fall before page 1
    /// are appended after the window, slots that fall past the last page are
    /// prepended before it, both still clipped to `[1, total_pages]`.
    pub fn init(&mut self, total: u64, from: u64) {
        self.pages.clear();
        if self.page_size == 0 {
            self.total_pages = 0;
            self.current_page = 0;
            return;
        }
        self.total_pages = total.div_ceil(self.page_size);
        self.current_page = from.div_ceil(self.page_size) + 1;

        let total_pages = self.total_pages as i64;
        let current = self.current_page as i64;
        let offset = self.offset as i64;
        let mut add_to_end = 0;
        let mut add_to_start = 0;
        for i in (current - offset)..(current + 1 + offset) {
            if i < 1 {
                add_to_end += 1;
            }
            if i > total_pages {
                add_to_start += 1;
            }
            if (1..=total_pages).contains(&i) {
                self.pages.push(i as u64);
            }
        }
        for _ in 0..add_to_end {
            if (self.pages.len() as u64) < self.total_pages {
                self.pages.push(self.pages.len() as u64 + 1);
            }
        }
        for _ in 0..add_to_start {
            match self.pages.first() {
                Some(&first) if first > 1 => self.pages.insert(0, first - 1),
                _ => {}
            }
        }
    }

    /// Result offset of a zero-based page index.
    pub fn from_for_page(&self, page_index: u64) -> u64 {
        page_index * self.page_size
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Result offset of the page before the current one.
    pub fn previous_from(&self) -> Option<u64> {
        self.has_previous().then(|| (self.current_page - 2) * self.page_size)
    }

    /// Result offset of the page after the current one.
    pub fn next_from(&self) -> Option<u64> {
        self.has_next().then(|| self.current_page * self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(total: u64, from: u64) -> Pagination {
        let mut pagination = Pagination::new(20, 2);
        pagination.init(total, from);
        pagination
    }

    #[test]
    fn centred_window() {
        let p = window(100, 40);
        assert_eq!(p.total_pages, 5);
        assert_eq!(p.current_page, 3);
        assert_eq!(p.pages, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_at_first_page_extends_to_the_right() {
        let p = window(400, 0);
        assert_eq!(p.current_page, 1);
        assert_eq!(p.pages, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_at_second_page_extends_to_the_right() {
        let p = window(400, 20);
        assert_eq!(p.current_page, 2);
        assert_eq!(p.pages, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_at_last_page_extends_to_the_left() {
        let p = window(200, 180);
        assert_eq!(p.total_pages, 10);
        assert_eq!(p.current_page, 10);
        assert_eq!(p.pages, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_in_the_middle_of_many_pages() {
        let p = window(1000, 200);
        assert_eq!(p.current_page, 11);
        assert_eq!(p.pages, vec![9, 10, 11, 12, 13]);
    }

    #[test]
    fn short_lists_show_every_page() {
        assert_eq!(window(50, 0).pages, vec![1, 2, 3]);
        assert_eq!(window(50, 40).pages, vec![1, 2, 3]);
        assert_eq!(window(1, 0).pages, vec![1]);
    }

    #[test]
    fn empty_results_have_no_pages() {
        let p = window(0, 0);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.current_page, 1);
        assert!(p.pages.is_empty());
        assert_eq!(p.next_from(), None);
        assert_eq!(p.previous_from(), None);
    }

    #[test]
    fn unaligned_offset_rounds_up() {
        let p = window(100, 30);
        assert_eq!(p.current_page, 3);
    }

    #[test]
    fn window_length_property() {
        for page_size in [1_u64, 7, 20] {
            for total in 0..120_u64 {
                let total_pages = total.div_ceil(page_size);
                for page in 1..=total_pages {
                    let mut p = Pagination::new(page_size, 2);
                    p.init(total, (page - 1) * page_size);
                    assert_eq!(p.total_pages, total_pages);
                    assert_eq!(p.pages.len() as u64, total_pages.min(5), "total={total} page={page}");
                    assert!(p.pages.contains(&page));
                    assert!(p.pages.windows(2).all(|w| w[1] == w[0] + 1));
                }
            }
        }
    }

    #[test]
    fn neighbour_offsets() {
        let p = window(100, 40);
        assert_eq!(p.previous_from(), Some(20));
        assert_eq!(p.next_from(), Some(60));
        assert_eq!(p.from_for_page(4), 80);

        let last = window(100, 80);
        assert_eq!(last.next_from(), None);
        let first = window(100, 0);
        assert_eq!(first.previous_from(), None);
    }
}
