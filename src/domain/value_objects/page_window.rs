/// Pagination arithmetic over an already-counted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    total_pages: usize,
    start: usize,
    end: usize,
}

impl PageWindow {
    /// `per_page` must be non-zero. Requested pages outside
    /// `[1, total_pages]` are clamped into range.
    pub fn new(total: usize, requested_page: i64, per_page: usize) -> Self {
        debug_assert!(per_page > 0);

        let total_pages = total.div_ceil(per_page).max(1);
        let page = if requested_page < 1 {
            1
        } else {
            usize::try_from(requested_page)
                .unwrap_or(usize::MAX)
                .min(total_pages)
        };

        let start = (page - 1) * per_page;
        let end = start.saturating_add(per_page).min(total);

        Self {
            page,
            total_pages,
            start,
            end,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Takes this window's items out of `items`; empty when the window starts
    /// at or past the end.
    pub fn slice<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if self.start >= items.len() {
            return Vec::new();
        }
        let end = self.end.min(items.len());
        items.truncate(end);
        items.split_off(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PageWindow::new(45, 1, 20).total_pages(), 3);
        assert_eq!(PageWindow::new(40, 1, 20).total_pages(), 2);
        assert_eq!(PageWindow::new(1, 1, 20).total_pages(), 1);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let window = PageWindow::new(0, 1, 20);
        assert_eq!(window.total_pages(), 1);
        assert_eq!(window.page(), 1);
        assert!(window.slice(Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn test_page_is_clamped() {
        assert_eq!(PageWindow::new(45, 0, 20).page(), 1);
        assert_eq!(PageWindow::new(45, -7, 20).page(), 1);
        assert_eq!(PageWindow::new(45, 99, 20).page(), 3);
        assert_eq!(PageWindow::new(45, i64::MAX, 20).page(), 3);
    }

    #[test]
    fn test_slice_bounds() {
        let window = PageWindow::new(45, 3, 20);
        assert_eq!((window.start(), window.end()), (40, 45));

        let items: Vec<usize> = (0..45).collect();
        assert_eq!(window.slice(items), vec![40, 41, 42, 43, 44]);
    }

    #[test]
    fn test_middle_page() {
        let items: Vec<usize> = (0..10).collect();
        let window = PageWindow::new(items.len(), 2, 3);
        assert_eq!(window.slice(items), vec![3, 4, 5]);
    }

    #[test]
    fn test_slice_of_shorter_collection_is_empty() {
        let window = PageWindow::new(10, 4, 3);
        assert!(window.slice(vec![1, 2]).is_empty());
    }
}
