//! One materialized page of a query

use std::ops::Deref;

use crate::query::OrderedQuery;

use super::MAX_LIMIT;

/// A single page sliced out of an ordered query.
///
/// Holds at most `page_size` records taken after `page_index * page_size`,
/// in the query's order. The total count is deliberately not part of the
/// page; count it with a separate query.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiList<T> {
    items: Vec<T>,
    page_index: u32,
    page_size: u32,
}

impl<T> ApiList<T> {
    /// Materializes the page. Bounds are validated by the caller; a page
    /// beyond the end of the data is simply empty.
    pub fn new<'a>(query: OrderedQuery<'a, T>, page_index: u32, page_size: u32) -> Self
    where
        T: 'a,
    {
        let skip = (page_index as usize).saturating_mul(page_size as usize);
        let items = query.slice(skip, page_size as usize);
        Self {
            items,
            page_index,
            page_size,
        }
    }

    /// Zero-based index of this page
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for ApiList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for ApiList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'l, T> IntoIterator for &'l ApiList<T> {
    type Item = &'l T;
    type IntoIter = std::slice::Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Shorthand for the first page at the maximum page size
pub trait ToApiList<T> {
    fn to_api_list(self) -> ApiList<T>;
}

impl<'a, T: 'a> ToApiList<T> for OrderedQuery<'a, T> {
    fn to_api_list(self) -> ApiList<T> {
        ApiList::new(self, 0, MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: u32) -> OrderedQuery<'static, u32> {
        OrderedQuery::from_vec((1..=n).collect())
    }

    #[test]
    fn test_pages_are_contiguous_slices() {
        let first = ApiList::new(numbers(25), 0, 10);
        assert_eq!(first.into_vec(), (1..=10).collect::<Vec<_>>());

        let second = ApiList::new(numbers(25), 1, 10);
        assert_eq!(second.into_vec(), (11..=20).collect::<Vec<_>>());

        let last = ApiList::new(numbers(25), 2, 10);
        assert_eq!(last.len(), 5);
        assert_eq!(last[0], 21);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let page = ApiList::new(numbers(25), 3, 10);
        assert!(page.is_empty());
        assert_eq!(page.page_index(), 3);
        assert_eq!(page.page_size(), 10);
    }

    #[test]
    fn test_huge_page_index_does_not_overflow() {
        let page = ApiList::new(numbers(5), u32::MAX, MAX_LIMIT);
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_never_exceeds_size() {
        for size in 1..=12 {
            for index in 0..6 {
                let page = ApiList::new(numbers(25), index, size);
                assert!(page.len() <= size as usize);
                if let Some(first) = page.first() {
                    assert_eq!(*first, index * size + 1);
                }
            }
        }
    }

    #[test]
    fn test_to_api_list_uses_max_limit() {
        let page = numbers(300).to_api_list();
        assert_eq!(page.len(), MAX_LIMIT as usize);
        assert_eq!(page.page_index(), 0);
    }
}
