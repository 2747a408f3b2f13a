/// One page of a collection's matching records.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView<'a, R> {
    pub items: Vec<&'a R>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl<R> CollectionView<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }
}

/// `ceil(total / page_size)`; zero matches means zero pages.
pub fn total_pages(total_matches: usize, page_size: usize) -> usize {
    total_matches.div_ceil(page_size)
}

/// Clamp a page number into `1..=max(1, total_pages)`.
pub fn clamp_page(page: usize, total_matches: usize, page_size: usize) -> usize {
    page.min(total_pages(total_matches, page_size)).max(1)
}

/// Slice bounds of `page` over `total_matches` items.
pub fn page_bounds(page: usize, total_matches: usize, page_size: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total_matches);
    let end = start.saturating_add(page_size).min(total_matches);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_round_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(13, 10), 2);
    }

    #[test]
    fn clamp_never_goes_below_one() {
        assert_eq!(clamp_page(3, 0, 10), 1);
        assert_eq!(clamp_page(2, 10, 10), 1);
        assert_eq!(clamp_page(2, 11, 10), 2);
        assert_eq!(clamp_page(0, 25, 10), 1);
    }

    #[test]
    fn bounds_of_last_partial_page() {
        assert_eq!(page_bounds(2, 13, 10), (10, 13));
        assert_eq!(page_bounds(5, 13, 10), (13, 13));
    }
}
