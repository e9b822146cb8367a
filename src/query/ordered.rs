//! Lazily evaluated record sequences

use std::collections::HashSet;
use std::fmt;

use crate::domain::Identified;

/// An ordered, lazily evaluated sequence of records.
///
/// Every combinator consumes the query and returns a new one; no record is
/// pulled from the source until a terminal operation (`count`, `slice`,
/// `into_vec`, or iteration) runs. This lets filters, joins, de-duplication,
/// ordering and slicing execute as one composed pass.
pub struct OrderedQuery<'a, T> {
    iter: Box<dyn Iterator<Item = T> + 'a>,
}

impl<'a, T: 'a> OrderedQuery<'a, T> {
    /// Wraps any iterator as a query source
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            iter: Box::new(iter.into_iter()),
        }
    }

    /// A query over an owned snapshot of records
    pub fn from_vec(records: Vec<T>) -> Self {
        Self::new(records)
    }

    /// A query that yields nothing
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Keeps records matching the predicate
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Self::new(self.iter.filter(predicate))
    }

    /// Correlates this query with a secondary source.
    ///
    /// A left record is emitted once for every right record it matches, the
    /// way an inner join does, so the result may contain duplicates. Finish
    /// the chain with `distinct_by_id` when that matters.
    pub fn join<U, F>(self, secondary: OrderedQuery<'a, U>, on: F) -> Self
    where
        T: Clone,
        U: 'a,
        F: Fn(&T, &U) -> bool + 'a,
    {
        let left = self.iter;
        Self::new(Deferred::new(move || {
            let right: Vec<U> = secondary.iter.collect();
            left.flat_map(move |row| {
                let matches = right.iter().filter(|other| on(&row, other)).count();
                std::iter::repeat(row).take(matches)
            })
        }))
    }

    /// Returns the number of records, consuming the query
    pub fn count(self) -> usize {
        self.iter.count()
    }

    /// Realizes at most `take` records after skipping `skip`
    pub fn slice(self, skip: usize, take: usize) -> Vec<T> {
        self.iter.skip(skip).take(take).collect()
    }

    /// Realizes every record
    pub fn into_vec(self) -> Vec<T> {
        self.iter.collect()
    }
}

impl<'a, T: Identified + 'a> OrderedQuery<'a, T> {
    /// Drops records whose id was already seen, keeping the first occurrence
    pub fn distinct_by_id(self) -> Self {
        let mut seen = HashSet::new();
        Self::new(self.iter.filter(move |record| seen.insert(record.id())))
    }

    /// Stable ascending sort by id.
    ///
    /// Sorting needs the whole input, so the source is drained only when the
    /// first record is requested.
    pub fn order_by_id(self) -> Self {
        let iter = self.iter;
        Self::new(Deferred::new(move || {
            let mut records: Vec<T> = iter.collect();
            records.sort_by_key(|record| record.id());
            records.into_iter()
        }))
    }

    /// Cursor restriction: keeps ids strictly greater than `since_id`.
    /// Zero means no cursor.
    pub fn since_id(self, since_id: u32) -> Self {
        if since_id == 0 {
            return self;
        }
        self.filter(move |record| record.id() > since_id)
    }
}

impl<'a, T> Iterator for OrderedQuery<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }
}

impl<T> fmt::Debug for OrderedQuery<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedQuery").finish_non_exhaustive()
    }
}

/// Iterator built on first use
struct Deferred<F, I> {
    init: Option<F>,
    iter: Option<I>,
}

impl<F, I> Deferred<F, I>
where
    F: FnOnce() -> I,
{
    fn new(init: F) -> Self {
        Self {
            init: Some(init),
            iter: None,
        }
    }
}

impl<F, I> Iterator for Deferred<F, I>
where
    F: FnOnce() -> I,
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(init) = self.init.take() {
            self.iter = Some(init());
        }
        self.iter.as_mut()?.next()
    }
}
