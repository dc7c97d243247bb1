//! Project record: the root every other record hangs off.
//!
//! # Invariants
//! - Deleting a project removes every task, product, expense and payment
//!   whose `project_id` equals its id (enforced by the store).

use crate::model::entity::{require_text, Draft, EntityId, EntityKind, Record, Validate};
use crate::model::EntityValidationError;
use serde::{Deserialize, Serialize};
use time::Date;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing. Counted by the sidebar badge.
    Active,
    /// Delivered.
    Completed,
    /// Paused; neither active nor completed.
    OnHold,
}

impl ProjectStatus {
    /// Display label used by list and detail pages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "On hold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: Date,
    /// Cover image shown on the project card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Fields accepted when creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewProject {
    /// Creates an active project draft without a cover image.
    pub fn new(name: impl Into<String>, description: impl Into<String>, due_date: Date) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: ProjectStatus::Active,
            due_date,
            image_url: None,
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

fn validate_fields(name: &str, description: &str) -> Result<(), EntityValidationError> {
    require_text(EntityKind::Project, "name", name)?;
    require_text(EntityKind::Project, "description", description)
}

impl Validate for NewProject {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.name, &self.description)
    }
}

impl Validate for Project {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.name, &self.description)
    }
}

impl Draft for NewProject {}

impl Record for Project {
    type Draft = NewProject;

    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: NewProject) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            status: draft.status,
            due_date: draft.due_date,
            image_url: draft.image_url,
        }
    }
}
