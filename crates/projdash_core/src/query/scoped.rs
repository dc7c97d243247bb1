//! Project-scoped queries.

use crate::model::{EntityId, Expense, Payment, Product, Project, ProjectScoped, Task};
use crate::store::{EntityStore, Stored};
use std::collections::BTreeMap;

/// Everything the project detail page shows for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub project: Project,
    pub tasks: Vec<Task>,
    pub products: Vec<Product>,
    pub expenses: Vec<Expense>,
    pub payments: Vec<Payment>,
}

impl ProjectDetail {
    /// Share of completed tasks in percent, `None` when the project has no tasks.
    pub fn completion_percent(&self) -> Option<u8> {
        if self.tasks.is_empty() {
            return None;
        }
        let done = self.tasks.iter().filter(|task| task.completed).count();
        let percent = done * 100 / self.tasks.len();
        u8::try_from(percent).ok()
    }
}

impl EntityStore {
    /// Records of kind `E` whose `project_id` equals `project_id`, in store order.
    ///
    /// Returns an empty list for unknown projects.
    pub fn list_by_project<E>(&self, project_id: &EntityId) -> Vec<E>
    where
        E: Stored + ProjectScoped,
    {
        E::collection(self).snapshot_where(|record| record.project_id() == project_id)
    }

    /// Project plus its four dependent lists, or `None` when the project is gone.
    pub fn project_detail(&self, project_id: &EntityId) -> Option<ProjectDetail> {
        let project = self.get::<Project>(project_id)?;
        Some(ProjectDetail {
            project,
            tasks: self.list_by_project(project_id),
            products: self.list_by_project(project_id),
            expenses: self.list_by_project(project_id),
            payments: self.list_by_project(project_id),
        })
    }

    /// Id to name lookup used by list pages for their project column.
    pub fn project_names(&self) -> BTreeMap<EntityId, String> {
        self.list::<Project>()
            .into_iter()
            .map(|project| (project.id, project.name))
            .collect()
    }

    /// Flips `completed` on one task through a regular update.
    pub fn toggle_task(&mut self, task_id: &EntityId) -> Option<Task> {
        let mut task = self.get::<Task>(task_id)?;
        task.completed = !task.completed;
        self.update(task)
    }
}
