//! Identity, kind tags and validation shared by every record.
//!
//! # Responsibility
//! - Provide the `EntityId` newtype and per-kind id prefixes.
//! - Define the `Record` contract the store is generic over.
//! - Provide field-level validation helpers used at the form boundary.
//!
//! # Invariants
//! - `EntityId` values are opaque; only equality and ordering are meaningful.
//! - Validation never runs inside the store. Callers opt in via `Validate`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one record in one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Builds the canonical `<prefix>-<sequence>` id for a kind.
    pub fn generated(kind: EntityKind, sequence: u64) -> Self {
        Self(format!("{}-{sequence}", kind.id_prefix()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Record kind tag. One collection exists per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Task,
    Product,
    Expense,
    Payment,
}

impl EntityKind {
    /// Prefix used when generating ids for this kind.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Project => "proj",
            Self::Task => "todo",
            Self::Product => "prod",
            Self::Expense => "exp",
            Self::Payment => "pay",
        }
    }

    /// Stable lowercase name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Task => "task",
            Self::Product => "product",
            Self::Expense => "expense",
            Self::Payment => "payment",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    /// Required text field is empty after trim.
    BlankField {
        kind: EntityKind,
        field: &'static str,
    },
    /// Money field is below zero.
    NegativeAmount {
        kind: EntityKind,
        field: &'static str,
    },
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField { kind, field } => {
                write!(f, "{kind}.{field} must not be blank")
            }
            Self::NegativeAmount { kind, field } => {
                write!(f, "{kind}.{field} must not be negative")
            }
        }
    }
}

impl Error for EntityValidationError {}

/// Form-boundary checks for drafts and records.
pub trait Validate {
    fn validate(&self) -> Result<(), EntityValidationError>;
}

/// Creation payload: every field of a record except its id.
pub trait Draft: Validate + Clone {
    /// Owning project referenced by the draft, if the kind has one.
    ///
    /// Optional counterpart of [`ProjectScoped::project_id`], so generic
    /// write checks can cover projects (no owner) and dependents alike.
    fn project_ref(&self) -> Option<&EntityId> {
        None
    }
}

/// One record kind held by the store.
pub trait Record: Validate + Clone {
    /// Payload accepted by `create`.
    type Draft: Draft;

    const KIND: EntityKind;

    fn id(&self) -> &EntityId;

    /// Materializes a draft once the store has assigned an id.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Owning project, for kinds that have one. Same field as
    /// [`ProjectScoped::project_id`], reachable without that bound.
    fn project_ref(&self) -> Option<&EntityId> {
        None
    }
}

/// Record kinds that belong to exactly one project.
pub trait ProjectScoped: Record {
    fn project_id(&self) -> &EntityId;
}

pub(crate) fn require_text(
    kind: EntityKind,
    field: &'static str,
    value: &str,
) -> Result<(), EntityValidationError> {
    if value.trim().is_empty() {
        return Err(EntityValidationError::BlankField { kind, field });
    }
    Ok(())
}

pub(crate) fn require_non_negative(
    kind: EntityKind,
    field: &'static str,
    value: Decimal,
) -> Result<(), EntityValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EntityValidationError::NegativeAmount { kind, field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        require_non_negative, require_text, Draft, EntityId, EntityKind, EntityValidationError,
    };
    use rust_decimal::Decimal;

    #[test]
    fn generated_ids_carry_kind_prefix() {
        assert_eq!(EntityId::generated(EntityKind::Project, 7).as_str(), "proj-7");
        assert_eq!(EntityId::generated(EntityKind::Task, 1).as_str(), "todo-1");
        assert_eq!(EntityId::generated(EntityKind::Payment, 12).to_string(), "pay-12");
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = require_text(EntityKind::Task, "text", "   ").unwrap_err();
        assert_eq!(
            err,
            EntityValidationError::BlankField {
                kind: EntityKind::Task,
                field: "text"
            }
        );
        assert_eq!(err.to_string(), "task.text must not be blank");
    }

    #[test]
    fn project_ref_mirrors_scoped_project_id() {
        use crate::model::{NewProject, NewTask, Project, ProjectScoped, Record, Task};
        use time::macros::date;

        let draft = NewTask::new(EntityId::from("proj-3"), "wire checkout");
        assert_eq!(Draft::project_ref(&draft), Some(&EntityId::from("proj-3")));
        let task = Task::from_draft(EntityId::from("todo-4"), draft);
        assert_eq!(Record::project_ref(&task), Some(task.project_id()));

        let project = Project::from_draft(
            EntityId::from("proj-3"),
            NewProject::new("Shop", "Storefront", date!(2025 - 01 - 01)),
        );
        assert_eq!(Record::project_ref(&project), None);
    }

    #[test]
    fn negative_zero_counts_as_non_negative() {
        let mut negative_zero = Decimal::ZERO;
        negative_zero.set_sign_negative(true);
        assert!(require_non_negative(EntityKind::Expense, "amount", negative_zero).is_ok());
        assert!(require_non_negative(EntityKind::Expense, "amount", Decimal::new(-1, 2)).is_err());
    }
}
