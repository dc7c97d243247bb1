//! Core data layer for the project dashboard.
//! This crate is the single source of truth for record invariants: the
//! in-memory store with cascading project deletes and the derived list views
//! (per-project scoping, free-text filtering, pagination).

pub mod config;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod query;
pub mod search;
pub mod seed;
pub mod service;
pub mod store;
pub mod view;

pub use config::{ConfigError, DashboardConfig};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status};
pub use model::{
    Draft, EntityId, EntityKind, EntityValidationError, Expense, NewExpense, NewPayment,
    NewProduct, NewProject, NewTask, Payment, PaymentStatus, Product, Project, ProjectScoped,
    ProjectStatus, Record, Task, Validate,
};
pub use pagination::{page_slice, total_pages, Paginator, DEFAULT_PAGE_SIZE};
pub use query::listing::{build_listing, paginate_listing, ListingView};
pub use query::scoped::ProjectDetail;
pub use query::summary::{DashboardSummary, SidebarCounts};
pub use search::filter::{filter_records, matches, Searchable, TextQuery};
pub use seed::{demo_store, first_project_id};
pub use service::dashboard_service::{DashboardService, ServiceError};
pub use store::{CascadeReport, Collection, EntityStore, Stored};
pub use view::{LoadToken, LoadingTimer, PageKind, PageSession, ViewState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
