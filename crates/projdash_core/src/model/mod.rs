//! Domain model for the project dashboard.
//!
//! # Responsibility
//! - Define the five record kinds and their creation drafts.
//! - Provide the shared identity and validation vocabulary.
//!
//! # Invariants
//! - Every record is identified by an `EntityId` that is never reused.
//! - Records are replaced whole on update; nothing is mutated in place.
//! - Tasks, products, expenses and payments belong to exactly one project.

pub mod entity;
pub mod expense;
pub mod payment;
pub mod product;
pub mod project;
pub mod task;

pub use entity::{
    Draft, EntityId, EntityKind, EntityValidationError, ProjectScoped, Record, Validate,
};
pub use expense::{Expense, NewExpense};
pub use payment::{NewPayment, Payment, PaymentStatus};
pub use product::{NewProduct, Product};
pub use project::{NewProject, Project, ProjectStatus};
pub use task::{NewTask, Task};
