//! In-memory entity store.
//!
//! # Responsibility
//! - Own the five record collections and the id sequence.
//! - Be the only path through which collections are mutated.
//! - Cascade project deletes across all dependent collections.
//!
//! # Invariants
//! - Ids are unique per collection and never reused for the store lifetime.
//! - New records are prepended; updates keep position.
//! - Reads hand out owned copies only.
//! - After any delete returns, no dependent record references a missing
//!   project through that delete.
//! - The store trusts `project_id` on creation; see `service` for checked
//!   writes.

mod collection;

pub use collection::Collection;

use crate::model::{EntityId, Expense, Payment, Product, Project, Record, Task};
use log::{debug, info};
use sealed::Slot;

/// Number of records removed by one project cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub project_removed: bool,
    pub tasks: usize,
    pub products: usize,
    pub expenses: usize,
    pub payments: usize,
}

impl CascadeReport {
    /// Dependent records removed, excluding the project itself.
    pub fn dependents_removed(&self) -> usize {
        self.tasks + self.products + self.expenses + self.payments
    }
}

/// Volatile, single-actor store for every dashboard record.
///
/// Construct one per process (or per test); there is no ambient instance.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    next_sequence: u64,
    projects: Collection<Project>,
    tasks: Collection<Task>,
    products: Collection<Product>,
    expenses: Collection<Expense>,
    payments: Collection<Payment>,
}

/// Binds a record kind to its collection inside [`EntityStore`].
///
/// Sealed: the five record kinds are the only implementors, and mutable
/// access to a collection stays inside the store so every removal goes
/// through [`EntityStore::delete`] and its cascade.
///
/// ```compile_fail
/// use projdash_core::{Collection, EntityStore, Project, Stored};
///
/// let mut store = EntityStore::new();
/// *Project::collection_mut(&mut store) = Collection::default();
/// ```
///
/// ```compile_fail
/// use projdash_core::{EntityId, EntityStore, Project, Stored};
///
/// let mut store = EntityStore::new();
/// Project::after_delete(&mut store, &EntityId::from("proj-1"));
/// ```
pub trait Stored: Record + sealed::Slot {
    fn collection(store: &EntityStore) -> &Collection<Self>;
}

pub(crate) mod sealed {
    use super::{Collection, EntityStore};
    use crate::model::EntityId;

    /// Store-internal half of [`super::Stored`].
    pub trait Slot: Sized {
        fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self>;

        /// Follow-up applied after a record of this kind was removed.
        fn after_delete(_store: &mut EntityStore, _id: &EntityId) {}
    }
}

impl Stored for Project {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.projects
    }
}

impl Slot for Project {
    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.projects
    }

    fn after_delete(store: &mut EntityStore, id: &EntityId) {
        store.purge_dependents(id);
    }
}

impl Stored for Task {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.tasks
    }
}

impl Slot for Task {
    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.tasks
    }
}

impl Stored for Product {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.products
    }
}

impl Slot for Product {
    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.products
    }
}

impl Stored for Expense {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.expenses
    }
}

impl Slot for Expense {
    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.expenses
    }
}

impl Stored for Payment {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.payments
    }
}

impl Slot for Payment {
    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.payments
    }
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every record of kind `E`, most recent first.
    ///
    /// The returned vector is an owned copy; later mutations do not show
    /// through it.
    pub fn list<E: Stored>(&self) -> Vec<E> {
        E::collection(self).snapshot()
    }

    /// Looks a record up by id. Absence is not an error.
    pub fn get<E: Stored>(&self, id: &EntityId) -> Option<E> {
        E::collection(self).get(id)
    }

    pub fn contains<E: Stored>(&self, id: &EntityId) -> bool {
        E::collection(self).contains(id)
    }

    pub fn len<E: Stored>(&self) -> usize {
        E::collection(self).len()
    }

    pub fn is_empty<E: Stored>(&self) -> bool {
        E::collection(self).is_empty()
    }

    /// Assigns a fresh id, prepends the record and returns it.
    pub fn create<E: Stored>(&mut self, draft: E::Draft) -> E {
        let id = self.next_id::<E>();
        let record = E::from_draft(id, draft);
        E::collection_mut(self).prepend(record.clone());
        debug!(
            "event=record_create module=store kind={} status=ok id={} len={}",
            E::KIND,
            record.id(),
            self.len::<E>()
        );
        record
    }

    /// Replaces the stored record with the same id, keeping its position.
    ///
    /// Returns `None` and leaves the store untouched when the id is unknown.
    pub fn update<E: Stored>(&mut self, record: E) -> Option<E> {
        let id = record.id().clone();
        let updated = E::collection_mut(self).replace(record);
        let status = if updated.is_some() { "ok" } else { "noop" };
        debug!(
            "event=record_update module=store kind={} status={} id={}",
            E::KIND,
            status,
            id
        );
        updated
    }

    /// Removes a record by id. Always succeeds; unknown ids are a no-op.
    ///
    /// Deleting a project cascades exactly like [`Self::delete_project_cascade`].
    pub fn delete<E: Stored>(&mut self, id: &EntityId) -> bool {
        let removed = E::collection_mut(self).remove(id);
        if removed {
            E::after_delete(self, id);
        }
        debug!(
            "event=record_delete module=store kind={} status={} id={}",
            E::KIND,
            if removed { "ok" } else { "noop" },
            id
        );
        true
    }

    /// Removes a project and every task, product, expense and payment
    /// referencing it.
    pub fn delete_project_cascade(&mut self, project_id: &EntityId) -> bool {
        self.delete_project_cascade_report(project_id);
        true
    }

    /// Same as [`Self::delete_project_cascade`], reporting what was removed.
    ///
    /// Dependents are purged even when the project itself is already gone,
    /// so stray records created against a dead id are cleaned up too.
    pub fn delete_project_cascade_report(&mut self, project_id: &EntityId) -> CascadeReport {
        let project_removed = self.projects.remove(project_id);
        let mut report = self.purge_dependents(project_id);
        report.project_removed = project_removed;
        report
    }

    fn purge_dependents(&mut self, project_id: &EntityId) -> CascadeReport {
        let report = CascadeReport {
            project_removed: true,
            tasks: self.tasks.retain(|task| &task.project_id != project_id),
            products: self.products.retain(|product| &product.project_id != project_id),
            expenses: self.expenses.retain(|expense| &expense.project_id != project_id),
            payments: self.payments.retain(|payment| &payment.project_id != project_id),
        };
        info!(
            "event=project_cascade module=store status=ok project_id={} tasks={} products={} expenses={} payments={}",
            project_id, report.tasks, report.products, report.expenses, report.payments
        );
        report
    }

    fn next_id<E: Stored>(&mut self) -> EntityId {
        loop {
            self.next_sequence += 1;
            let candidate = EntityId::generated(E::KIND, self.next_sequence);
            if !E::collection(self).contains(&candidate) {
                return candidate;
            }
        }
    }
}
