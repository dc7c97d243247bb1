//! Expense record.

use crate::model::entity::{
    require_non_negative, require_text, Draft, EntityId, EntityKind, EntityValidationError,
    ProjectScoped, Record, Validate,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: EntityId,
    pub project_id: EntityId,
    pub description: String,
    pub amount: Decimal,
    pub date: Date,
    /// Free-form grouping label, e.g. `Hosting`.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub project_id: EntityId,
    pub description: String,
    pub amount: Decimal,
    pub date: Date,
    pub category: String,
}

fn validate_fields(
    description: &str,
    category: &str,
    amount: Decimal,
) -> Result<(), EntityValidationError> {
    require_text(EntityKind::Expense, "description", description)?;
    require_text(EntityKind::Expense, "category", category)?;
    require_non_negative(EntityKind::Expense, "amount", amount)
}

impl Validate for NewExpense {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.description, &self.category, self.amount)
    }
}

impl Validate for Expense {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.description, &self.category, self.amount)
    }
}

impl Draft for NewExpense {
    fn project_ref(&self) -> Option<&EntityId> {
        Some(&self.project_id)
    }
}

impl Record for Expense {
    type Draft = NewExpense;

    const KIND: EntityKind = EntityKind::Expense;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn project_ref(&self) -> Option<&EntityId> {
        Some(&self.project_id)
    }

    fn from_draft(id: EntityId, draft: NewExpense) -> Self {
        Self {
            id,
            project_id: draft.project_id,
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
        }
    }
}

impl ProjectScoped for Expense {
    fn project_id(&self) -> &EntityId {
        &self.project_id
    }
}
