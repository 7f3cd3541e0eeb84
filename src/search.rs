use crate::error::BrowserError;
use crate::model::RecipeSummary;
use crate::source::RecipeSource;
use log::debug;

/// A keyword search and its results.
///
/// A new search replaces the previous one wholesale; results are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub query: String,
    pub results: Vec<RecipeSummary>,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
        }
    }

    pub async fn get_results(&mut self, source: &dyn RecipeSource) -> Result<(), BrowserError> {
        self.results = source.search(&self.query).await?;
        debug!("Search '{}' holds {} results", self.query, self.results.len());
        Ok(())
    }
}

/// Which slice of the results a page shows, and which page buttons exist.
///
/// Computed fresh on every render from the page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub pages: usize,
    pub start: usize,
    pub end: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl Pagination {
    /// Pages are 1-based. Out-of-range pages clamp to the last page.
    pub fn new(total: usize, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let pages = total.div_ceil(per_page);
        let page = page.clamp(1, pages.max(1));

        let start = ((page - 1) * per_page).min(total);
        let end = (page * per_page).min(total);

        let prev = (page > 1).then(|| page - 1);
        let next = (page < pages).then(|| page + 1);

        Self {
            page,
            pages,
            start,
            end,
            prev,
            next,
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_many() {
        let p = Pagination::new(28, 1, 10);
        assert_eq!((p.start, p.end), (0, 10));
        assert_eq!(p.pages, 3);
        assert_eq!(p.prev, None);
        assert_eq!(p.next, Some(2));
    }

    #[test]
    fn test_middle_page_has_both_buttons() {
        let p = Pagination::new(28, 2, 10);
        assert_eq!((p.start, p.end), (10, 20));
        assert_eq!(p.prev, Some(1));
        assert_eq!(p.next, Some(3));
    }

    #[test]
    fn test_last_page_is_partial() {
        let p = Pagination::new(28, 3, 10);
        assert_eq!((p.start, p.end), (20, 28));
        assert_eq!(p.prev, Some(2));
        assert_eq!(p.next, None);
    }

    #[test]
    fn test_single_page_has_no_buttons() {
        let p = Pagination::new(7, 1, 10);
        assert_eq!((p.start, p.end), (0, 7));
        assert_eq!(p.prev, None);
        assert_eq!(p.next, None);
    }

    #[test]
    fn test_page_sizes_match_min_rule() {
        for total in [0usize, 1, 9, 10, 11, 30, 47] {
            let items: Vec<usize> = (0..total).collect();
            let pages = total.div_ceil(10).max(1);
            for page in 1..=pages {
                let shown = Pagination::new(total, page, 10).slice(&items).len();
                let expected = total.saturating_sub((page - 1) * 10).min(10);
                assert_eq!(shown, expected, "total {} page {}", total, page);
            }
        }
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let p = Pagination::new(15, 9, 10);
        assert_eq!(p.page, 2);
        assert_eq!((p.start, p.end), (10, 15));

        let p = Pagination::new(0, 3, 10);
        assert_eq!(p.page, 1);
        assert_eq!((p.start, p.end), (0, 0));
    }
}
