//! Use-case services.
//!
//! # Responsibility
//! - Own the store and view state for one dashboard session.
//! - Add form-boundary checks on top of the permissive store.
//! - Run the view refresh hook after every mutation.

pub mod dashboard_service;
