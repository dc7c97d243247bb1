//! Payment record.

use crate::model::entity::{
    require_non_negative, require_text, Draft, EntityId, EntityKind, EntityValidationError,
    ProjectScoped, Record, Validate,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: EntityId,
    pub project_id: EntityId,
    pub description: String,
    pub amount: Decimal,
    /// Due or settlement date depending on `status`.
    pub date: Date,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub project_id: EntityId,
    pub description: String,
    pub amount: Decimal,
    pub date: Date,
    pub status: PaymentStatus,
}

fn validate_fields(description: &str, amount: Decimal) -> Result<(), EntityValidationError> {
    require_text(EntityKind::Payment, "description", description)?;
    require_non_negative(EntityKind::Payment, "amount", amount)
}

impl Validate for NewPayment {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.description, self.amount)
    }
}

impl Validate for Payment {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.description, self.amount)
    }
}

impl Draft for NewPayment {
    fn project_ref(&self) -> Option<&EntityId> {
        Some(&self.project_id)
    }
}

impl Record for Payment {
    type Draft = NewPayment;

    const KIND: EntityKind = EntityKind::Payment;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn project_ref(&self) -> Option<&EntityId> {
        Some(&self.project_id)
    }

    fn from_draft(id: EntityId, draft: NewPayment) -> Self {
        Self {
            id,
            project_id: draft.project_id,
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            status: draft.status,
        }
    }
}

impl ProjectScoped for Payment {
    fn project_id(&self) -> &EntityId {
        &self.project_id
    }
}
