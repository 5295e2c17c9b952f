/// Fixed-size pagination over a slice
pub struct Page<'a, T> {
    items: &'a [T],
    page_size: usize,
    pub current_page: usize,
}

impl<'a, T> Page<'a, T> {
    /// Paginate `items`, starting on the zero-based `page` (clamped to the last page)
    pub fn new(items: &'a [T], page_size: usize, page: usize) -> Self {
        let mut paged = Page {
            items,
            page_size: page_size.max(1),
            current_page: 0,
        };
        paged.current_page = page.min(paged.total_pages() - 1);
        paged
    }

    /// Items on the current page
    pub fn current_items(&self) -> &'a [T] {
        let start = (self.current_page * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Total number of pages; an empty list still has one (empty) page
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// `Page 2/7`
    pub fn footer(&self) -> String {
        format!("Page {}/{}", self.current_page + 1, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_slice_items() {
        let items: Vec<u32> = (1..=25).collect();
        let page = Page::new(&items, 10, 1);
        assert_eq!(page.current_items(), &[11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.footer(), "Page 2/3");
    }

    #[test]
    fn test_page_is_clamped_to_last() {
        let items: Vec<u32> = (1..=25).collect();
        let page = Page::new(&items, 10, 99);
        assert_eq!(page.current_items(), &[21, 22, 23, 24, 25]);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let items: Vec<u32> = Vec::new();
        let page = Page::new(&items, 10, 3);
        assert!(page.current_items().is_empty());
        assert_eq!(page.footer(), "Page 1/1");
        assert_eq!(page.total_items(), 0);
    }
}
