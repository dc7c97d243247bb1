//! Ordered, id-keyed record collection.
//!
//! # Invariants
//! - Front of the collection is the most recently created record.
//! - Replacing a record keeps its position.
//! - At most one record per id.

use crate::model::{EntityId, Record};
use std::collections::VecDeque;

/// One ordered collection of records of a single kind.
#[derive(Debug, Clone)]
pub struct Collection<E> {
    records: VecDeque<E>,
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }
}

impl<E: Record> Collection<E> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.position(id).is_some()
    }

    /// Owned copy of every record in display order.
    pub fn snapshot(&self) -> Vec<E> {
        self.records.iter().cloned().collect()
    }

    /// Owned copy of the records accepted by `predicate`, in display order.
    pub fn snapshot_where(&self, mut predicate: impl FnMut(&E) -> bool) -> Vec<E> {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &EntityId) -> Option<E> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    pub(crate) fn count_where(&self, mut predicate: impl FnMut(&E) -> bool) -> usize {
        self.records.iter().filter(|record| predicate(record)).count()
    }

    pub(crate) fn prepend(&mut self, record: E) {
        self.records.push_front(record);
    }

    /// Swaps in `record` at the slot holding its id.
    ///
    /// Returns the stored value, or `None` when the id is unknown.
    pub(crate) fn replace(&mut self, record: E) -> Option<E> {
        let index = self.position(record.id())?;
        self.records[index] = record;
        Some(self.records[index].clone())
    }

    pub(crate) fn remove(&mut self, id: &EntityId) -> bool {
        match self.position(id) {
            Some(index) => self.records.remove(index).is_some(),
            None => false,
        }
    }

    /// Drops every record rejected by `keep` and returns how many were dropped.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&E) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|record| keep(record));
        before - self.records.len()
    }

    fn position(&self, id: &EntityId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}
