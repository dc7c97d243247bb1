//! Task (to-do item) record.

use crate::model::entity::{
    require_text, Draft, EntityId, EntityKind, EntityValidationError, ProjectScoped, Record,
    Validate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub text: String,
    /// Incomplete tasks feed the sidebar badge.
    pub completed: bool,
    pub project_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub text: String,
    pub completed: bool,
    pub project_id: EntityId,
}

impl NewTask {
    /// Creates an open (not completed) task draft.
    pub fn new(project_id: EntityId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            project_id,
        }
    }
}

fn validate_fields(text: &str, project_id: &EntityId) -> Result<(), EntityValidationError> {
    require_text(EntityKind::Task, "text", text)?;
    require_text(EntityKind::Task, "project_id", project_id.as_str())
}

impl Validate for NewTask {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.text, &self.project_id)
    }
}

impl Validate for Task {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.text, &self.project_id)
    }
}

impl Draft for NewTask {
    fn project_ref(&self) -> Option<&EntityId> {
        Some(&self.project_id)
    }
}

impl Record for Task {
    type Draft = NewTask;

    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn project_ref(&self) -> Option<&EntityId> {
        Some(&self.project_id)
    }

    fn from_draft(id: EntityId, draft: NewTask) -> Self {
        Self {
            id,
            text: draft.text,
            completed: draft.completed,
            project_id: draft.project_id,
        }
    }
}

impl ProjectScoped for Task {
    fn project_id(&self) -> &EntityId {
        &self.project_id
    }
}
