//! Read-side views derived from the entity store.
//!
//! # Responsibility
//! - Answer per-project questions over the dependent collections.
//! - Compute dashboard and sidebar aggregates.
//! - Compose filter + pagination into one list-page view.
//!
//! # Invariants
//! - Every view is recomputed from the current store; none caches state.
//! - Result order always follows the underlying collection order.

pub mod listing;
pub mod scoped;
pub mod summary;
