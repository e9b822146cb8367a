//! Storage collaborator
//!
//! Services reach records only through `Repository`. The in-memory
//! implementation backs the server and the tests.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use crate::domain::Identified;
use crate::query::OrderedQuery;

/// Result type for repository writes
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Update of a record that does not exist
    #[error("Record not found: {0}")]
    NotFound(u32),

    /// No unused id is left to assign
    #[error("Record ids exhausted")]
    IdsExhausted,
}

/// Record storage for one record type
pub trait Repository<T>: Send + Sync {
    /// All records as a lazily composed query, ordered by id
    fn table(&self) -> OrderedQuery<'static, T>;

    fn get(&self, id: u32) -> Option<T>;

    /// Stores a record, assigning an id when it has none
    fn insert(&self, record: T) -> RepositoryResult<T>;

    fn update(&self, record: T) -> RepositoryResult<()>;

    /// Returns whether a record was removed
    fn delete(&self, id: u32) -> bool;
}

#[derive(Debug)]
struct Rows<T> {
    by_id: BTreeMap<u32, T>,
    /// `None` once `u32::MAX` has been stored
    next_id: Option<u32>,
}

/// Repository over an in-memory map
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    rows: RwLock<Rows<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                by_id: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRepository<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    /// Builds a repository holding `records`
    pub fn with_records(records: impl IntoIterator<Item = T>) -> RepositoryResult<Self> {
        let repository = Self::new();
        for record in records {
            repository.insert(record)?;
        }
        Ok(repository)
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    fn table(&self) -> OrderedQuery<'static, T> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        OrderedQuery::from_vec(rows.by_id.values().cloned().collect())
    }

    fn get(&self, id: u32) -> Option<T> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.by_id.get(&id).cloned()
    }

    fn insert(&self, mut record: T) -> RepositoryResult<T> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        if record.id() == 0 {
            record.set_id(rows.next_id.ok_or(RepositoryError::IdsExhausted)?);
        }
        rows.next_id = match (rows.next_id, record.id().checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
        rows.by_id.insert(record.id(), record.clone());
        Ok(record)
    }

    fn update(&self, record: T) -> RepositoryResult<()> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        match rows.by_id.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(record.id())),
        }
    }

    fn delete(&self, id: u32) -> bool {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        rows.by_id.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShipmentItem;

    fn item(quantity: i32) -> ShipmentItem {
        ShipmentItem {
            quantity,
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.insert(item(1)).unwrap().id, 1);
        assert_eq!(repo.insert(item(2)).unwrap().id, 2);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_explicit_ids_are_kept() {
        let repo = InMemoryRepository::new();
        let mut explicit = item(1);
        explicit.id = 10;
        repo.insert(explicit).unwrap();

        assert_eq!(repo.insert(item(2)).unwrap().id, 11);
        assert!(repo.get(10).is_some());
    }

    #[test]
    fn test_table_is_ordered_by_id() {
        let repo = InMemoryRepository::new();
        for id in [5, 2, 9] {
            let mut record = item(1);
            record.id = id;
            repo.insert(record).unwrap();
        }
        let ids: Vec<u32> = repo.table().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_update_and_delete() {
        let repo = InMemoryRepository::new();
        let mut stored = repo.insert(item(1)).unwrap();
        stored.quantity = 7;
        repo.update(stored.clone()).unwrap();
        assert_eq!(repo.get(stored.id).unwrap().quantity, 7);

        assert!(repo.delete(stored.id));
        assert!(!repo.delete(stored.id));
        assert_eq!(repo.update(stored), Err(RepositoryError::NotFound(1)));
    }

    #[test]
    fn test_insert_after_max_id_is_refused() {
        let repo = InMemoryRepository::new();
        let mut last = item(1);
        last.id = u32::MAX;
        repo.insert(last).unwrap();

        assert_eq!(repo.insert(item(2)), Err(RepositoryError::IdsExhausted));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(u32::MAX).unwrap().quantity, 1);

        let mut explicit = item(3);
        explicit.id = 7;
        assert_eq!(repo.insert(explicit).unwrap().id, 7);
    }
}
