//! Dashboard and sidebar aggregates.

use crate::model::{Project, ProjectStatus, Task};
use crate::store::{EntityStore, Stored};
use serde::Serialize;

/// Live badge counts shown next to navigation entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SidebarCounts {
    pub active_projects: usize,
    pub open_tasks: usize,
}

/// Headline numbers and the active-project list for the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub on_hold_projects: usize,
    /// Active projects in store order.
    pub active: Vec<Project>,
}

impl EntityStore {
    pub fn sidebar_counts(&self) -> SidebarCounts {
        SidebarCounts {
            active_projects: Project::collection(self)
                .count_where(|project| project.status == ProjectStatus::Active),
            open_tasks: Task::collection(self).count_where(|task| !task.completed),
        }
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        let projects = self.list::<Project>();
        let count = |status: ProjectStatus| {
            projects
                .iter()
                .filter(|project| project.status == status)
                .count()
        };
        let active_projects = count(ProjectStatus::Active);
        let completed_projects = count(ProjectStatus::Completed);
        let on_hold_projects = count(ProjectStatus::OnHold);
        let total_projects = projects.len();
        let active = projects
            .into_iter()
            .filter(|project| project.status == ProjectStatus::Active)
            .collect();

        DashboardSummary {
            total_projects,
            active_projects,
            completed_projects,
            on_hold_projects,
            active,
        }
    }
}
