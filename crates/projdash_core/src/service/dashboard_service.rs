//! Dashboard use-case service.
//!
//! # Responsibility
//! - Single entry point the UI layer drives: reads, checked writes,
//!   navigation and list pages.
//! - Keep sidebar badges and the page title in sync with the store.
//!
//! # Invariants
//! - Checked writes validate fields and require the referenced project to
//!   exist. The raw store stays reachable for trusted callers.
//! - Every mutation is followed by a view refresh before returning.

use crate::config::{ConfigError, DashboardConfig};
use crate::model::{
    Draft, EntityId, EntityKind, EntityValidationError, Project, ProjectScoped, Record, Task,
    Validate,
};
use crate::pagination::{Paginator, DEFAULT_PAGE_SIZE};
use crate::query::listing::ListingView;
use crate::query::scoped::ProjectDetail;
use crate::search::filter::Searchable;
use crate::seed::demo_store;
use crate::store::{CascadeReport, EntityStore, Stored};
use crate::view::{PageKind, PageSession, ViewState};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Errors from checked dashboard writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required field is blank or an amount is negative.
    Validation(EntityValidationError),
    /// The record references a project that does not exist.
    ProjectNotFound(EntityId),
    /// Update target does not exist.
    NotFound { kind: EntityKind, id: EntityId },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntityValidationError> for ServiceError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

/// One dashboard session: store, view state and configuration.
pub struct DashboardService {
    store: EntityStore,
    view: ViewState,
    config: DashboardConfig,
}

impl DashboardService {
    /// Builds a session from `config`, seeding demo data when requested.
    pub fn new(config: DashboardConfig) -> Result<Self, ConfigError> {
        let store = if config.seed_demo_data {
            demo_store()
        } else {
            EntityStore::new()
        };
        Self::with_store(store, config)
    }

    /// Builds a session around an existing store.
    pub fn with_store(store: EntityStore, config: DashboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut view = ViewState::new(config.loading_delay());
        view.refresh_sidebar(&store);
        Ok(Self {
            store,
            view,
            config,
        })
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fresh paginator sized from the configuration.
    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.config.page_size().unwrap_or(DEFAULT_PAGE_SIZE))
    }

    pub fn list<E: Stored>(&self) -> Vec<E> {
        self.store.list()
    }

    pub fn get<E: Stored>(&self, id: &EntityId) -> Option<E> {
        self.store.get(id)
    }

    pub fn list_by_project<E: Stored + ProjectScoped>(&self, project_id: &EntityId) -> Vec<E> {
        self.store.list_by_project(project_id)
    }

    pub fn project_detail(&self, project_id: &EntityId) -> Option<ProjectDetail> {
        self.store.project_detail(project_id)
    }

    /// Validates `draft` and its project reference, then creates the record.
    pub fn create<E: Stored>(&mut self, draft: E::Draft) -> Result<E, ServiceError> {
        draft.validate()?;
        if let Some(project_id) = draft.project_ref() {
            self.require_project(project_id)?;
        }
        let record = self.store.create::<E>(draft);
        self.after_mutation();
        Ok(record)
    }

    /// Validates `record` and replaces the stored one with the same id.
    pub fn update<E: Stored>(&mut self, record: E) -> Result<E, ServiceError> {
        record.validate()?;
        if let Some(project_id) = record.project_ref() {
            self.require_project(project_id)?;
        }
        let id = record.id().clone();
        let updated = self
            .store
            .update(record)
            .ok_or(ServiceError::NotFound { kind: E::KIND, id })?;
        self.after_mutation();
        Ok(updated)
    }

    /// Deletes one record; projects cascade. Unknown ids are a no-op.
    pub fn delete<E: Stored>(&mut self, id: &EntityId) -> bool {
        let deleted = self.store.delete::<E>(id);
        self.after_mutation();
        deleted
    }

    /// Deletes a project with all its dependents and reports the counts.
    pub fn delete_project(&mut self, project_id: &EntityId) -> CascadeReport {
        let report = self.store.delete_project_cascade_report(project_id);
        self.after_mutation();
        info!(
            "event=project_delete module=service status={} dependents={}",
            if report.project_removed { "ok" } else { "noop" },
            report.dependents_removed()
        );
        report
    }

    /// Flips a task's completion flag.
    pub fn toggle_task(&mut self, task_id: &EntityId) -> Option<Task> {
        let toggled = self.store.toggle_task(task_id);
        self.after_mutation();
        toggled
    }

    /// Mounts `page` (navigation hook).
    pub fn navigate(&mut self, page: PageKind, now: Instant) -> PageSession {
        self.view.enter_page(page, &self.store, now)
    }

    /// Tears down the page owning `session`.
    pub fn leave_page(&mut self, session: PageSession) -> bool {
        self.view.leave_page(session)
    }

    /// Advances the loading timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.view.poll(now)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.set_search_query(query);
    }

    /// List page for kind `E`, narrowed by the active search text.
    pub fn listing<E: Stored + Searchable>(&self, paginator: &mut Paginator) -> ListingView<E> {
        self.store.listing(self.view.search_query(), paginator)
    }

    /// Task list page. Tasks have no free-text search.
    pub fn task_listing(&self, paginator: &mut Paginator) -> ListingView<Task> {
        self.store.unfiltered_listing(paginator)
    }

    fn require_project(&self, project_id: &EntityId) -> Result<(), ServiceError> {
        if self.store.contains::<Project>(project_id) {
            return Ok(());
        }
        warn!(
            "event=reference_check module=service status=rejected project_id={}",
            project_id
        );
        Err(ServiceError::ProjectNotFound(project_id.clone()))
    }

    fn after_mutation(&mut self) {
        self.view.refresh_sidebar(&self.store);
        self.view.refresh_title(&self.store);
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardService, ServiceError};
    use crate::config::DashboardConfig;
    use crate::model::{EntityId, EntityKind, NewProject, NewTask, Project, Task};
    use time::macros::date;

    fn service() -> DashboardService {
        DashboardService::new(DashboardConfig::default()).unwrap()
    }

    #[test]
    fn create_rejects_unknown_project_reference() {
        let mut service = service();
        let err = service
            .create::<Task>(NewTask::new(EntityId::from("proj-404"), "dangling"))
            .unwrap_err();
        assert_eq!(err, ServiceError::ProjectNotFound(EntityId::from("proj-404")));
        assert!(service.list::<Task>().is_empty());
    }

    #[test]
    fn update_of_missing_record_reports_not_found() {
        let mut service = service();
        let project: Project = service
            .create(NewProject::new("A", "a", date!(2025 - 01 - 01)))
            .unwrap();
        service.delete::<Project>(&project.id);

        let err = service.update(project.clone()).unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound {
                kind: EntityKind::Project,
                id: project.id
            }
        );
    }

    #[test]
    fn blank_text_is_a_validation_error() {
        let mut service = service();
        let project: Project = service
            .create(NewProject::new("A", "a", date!(2025 - 01 - 01)))
            .unwrap();
        let err = service
            .create::<Task>(NewTask::new(project.id, "  "))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "task.text must not be blank");
    }
}
