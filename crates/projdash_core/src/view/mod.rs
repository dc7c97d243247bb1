//! Page-scoped view signals consumed by the UI layer.
//!
//! # Responsibility
//! - Hold title, search text/placeholder, loading flag and sidebar counts.
//! - Recompute them on navigation and after store mutations.
//!
//! # Invariants
//! - State is passed explicitly as a `ViewState` handle; nothing is global.
//! - A page teardown cancels its pending loading clear, so no state changes
//!   happen on its behalf afterwards.

pub mod loading;
pub mod page;
pub mod state;

pub use loading::{LoadToken, LoadingTimer, DEFAULT_LOADING_DELAY};
pub use page::PageKind;
pub use state::{PageSession, ViewState};
