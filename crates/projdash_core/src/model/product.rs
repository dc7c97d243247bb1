//! Product (line item) record.
//!
//! # Invariants
//! - `quantity` is non-negative by construction (`u32`).
//! - `price` must not be negative; checked by `Validate`, not by the store.

use crate::model::entity::{
    require_non_negative, require_text, Draft, EntityId, EntityKind, EntityValidationError,
    ProjectScoped, Record, Validate,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    pub quantity: u32,
    /// Unit price.
    pub price: Decimal,
    pub supplier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// `quantity * price`, as shown in the line-item column.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub project_id: EntityId,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub supplier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn validate_fields(name: &str, supplier: &str, price: Decimal) -> Result<(), EntityValidationError> {
    require_text(EntityKind::Product, "name", name)?;
    require_text(EntityKind::Product, "supplier", supplier)?;
    require_non_negative(EntityKind::Product, "price", price)
}

impl Validate for NewProduct {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.name, &self.supplier, self.price)
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.name, &self.supplier, self.price)
    }
}

impl Draft for NewProduct {
    fn project_ref(&self) -> Option<&EntityId> {
        Some(&self.project_id)
    }
}

impl Record for Product {
    type Draft = NewProduct;

    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn project_ref(&self) -> Option<&EntityId> {
        Some(&self.project_id)
    }

    fn from_draft(id: EntityId, draft: NewProduct) -> Self {
        Self {
            id,
            project_id: draft.project_id,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            supplier: draft.supplier,
            image_url: draft.image_url,
        }
    }
}

impl ProjectScoped for Product {
    fn project_id(&self) -> &EntityId {
        &self.project_id
    }
}
