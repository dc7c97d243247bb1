//! Free-text filtering for list pages.
//!
//! # Responsibility
//! - Declare which text fields each record kind exposes to search.
//! - Narrow candidate lists by case-insensitive substring match.

pub mod filter;
