//! Case-insensitive substring filter.
//!
//! # Responsibility
//! - Match a query against the configured text fields of a record.
//! - Narrow a candidate list while preserving its order.
//!
//! # Invariants
//! - A blank query is the identity: the input comes back unchanged.
//! - Matching is substring-based on lowercased text; no tokenizing, no fuzz.
//! - Each input record appears at most once in the output.
//! - Filtering is idempotent: `filter(filter(l, q), q) == filter(l, q)`.

use crate::model::{Expense, Payment, Product, Project};

/// Record kinds that can be narrowed by the header search box.
pub trait Searchable {
    /// Text fields matched by the filter, in no particular order.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for Expense {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.category.as_str()]
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.supplier.as_str()]
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }
}

/// Normalized search text.
///
/// `None` inner value means the query is blank and filters nothing out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    needle: Option<String>,
}

impl TextQuery {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let needle = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
        Self { needle }
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    /// Whether any searchable field of `record` contains the query.
    pub fn matches<E: Searchable>(&self, record: &E) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        record
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Convenience wrapper over [`TextQuery::matches`].
pub fn matches<E: Searchable>(record: &E, query: &str) -> bool {
    TextQuery::new(query).matches(record)
}

/// Returns the records matching `query`, in input order.
pub fn filter_records<E: Searchable + Clone>(records: &[E], query: &str) -> Vec<E> {
    let query = TextQuery::new(query);
    if query.is_blank() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| query.matches(*record))
        .cloned()
        .collect()
}
