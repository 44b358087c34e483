//! Page arithmetic for list pages. Pages are 1-based.

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Current position of a list page plus the last known total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            total: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// New rows are listed first, so a create jumps back to page 1.
    pub fn after_create(&mut self) {
        self.page = 1;
    }

    /// Drops `removed` rows from the total and pulls the page back inside range.
    pub fn after_delete(&mut self, removed: usize) {
        self.total = self.total.saturating_sub(removed);
        self.clamp();
    }

    /// Records a fetched total. Returns `true` when the current page no longer
    /// exists and was clamped, meaning the page must be fetched again.
    pub fn apply_total(&mut self, total: usize) -> bool {
        self.total = total;
        self.clamp()
    }

    fn clamp(&mut self) -> bool {
        let last = self.total_pages();
        if self.page > last {
            self.page = last;
            return true;
        }
        false
    }

    /// "Showing 9–16 of 42"
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "No records".to_string();
        }
        let from = (self.page - 1) * self.page_size + 1;
        let to = (self.page * self.page_size).min(self.total);
        format!("Showing {}–{} of {}", from, to, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(42, 5), 9);
        assert_eq!(total_pages(10, 0), 1);
    }

    #[test]
    fn delete_of_last_row_on_last_page_steps_back() {
        let mut c = PageCursor::new(5);
        c.apply_total(11);
        c.go_to(3);
        assert_eq!(c.page, 3);
        c.after_delete(1);
        assert_eq!(c.total, 10);
        assert_eq!(c.page, 2);
    }

    #[test]
    fn delete_inside_range_keeps_page() {
        let mut c = PageCursor::new(5);
        c.apply_total(20);
        c.go_to(2);
        c.after_delete(1);
        assert_eq!(c.page, 2);
    }

    #[test]
    fn smaller_fetched_total_clamps_and_requests_refetch() {
        let mut c = PageCursor::new(8);
        c.apply_total(40);
        c.go_to(5);
        assert!(c.apply_total(10));
        assert_eq!(c.page, 2);
        assert!(!c.apply_total(10));
    }

    #[test]
    fn create_returns_to_first_page() {
        let mut c = PageCursor::new(6);
        c.apply_total(30);
        c.go_to(4);
        c.after_create();
        assert_eq!(c.page, 1);
        assert!(!c.has_prev());
        assert!(c.has_next());
    }

    #[test]
    fn go_to_is_bounded() {
        let mut c = PageCursor::new(7);
        c.apply_total(15);
        c.go_to(0);
        assert_eq!(c.page, 1);
        c.go_to(99);
        assert_eq!(c.page, 3);
    }

    #[test]
    fn range_label_reads_naturally() {
        let mut c = PageCursor::new(8);
        assert_eq!(c.range_label(), "No records");
        c.apply_total(42);
        c.go_to(2);
        assert_eq!(c.range_label(), "Showing 9–16 of 42");
        c.go_to(6);
        assert_eq!(c.range_label(), "Showing 41–42 of 42");
    }
}
