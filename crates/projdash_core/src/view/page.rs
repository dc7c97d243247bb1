//! Routed pages and their fixed view metadata.

use crate::model::{EntityId, Expense, Payment, Product, Project, Task};
use crate::store::EntityStore;

/// Placeholder used by pages whose search box targets projects.
const PROJECT_SEARCH_PLACEHOLDER: &str = "Search projects...";

/// One routed page of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageKind {
    Dashboard,
    ProjectList,
    ProjectDetail(EntityId),
    ProjectCreate,
    ProjectEdit(EntityId),
    TaskList,
    TaskCreate,
    TaskEdit(EntityId),
    ProductList,
    ProductCreate,
    ProductEdit(EntityId),
    ExpenseList,
    ExpenseCreate,
    ExpenseEdit(EntityId),
    PaymentList,
    PaymentCreate,
    PaymentEdit(EntityId),
    Profile,
    Settings,
    /// "Shared with me", not built out yet.
    Shared,
    /// "Recent activity", not built out yet.
    Recent,
    Trash,
}

impl PageKind {
    /// Header title for this page against the current store.
    pub fn title(&self, store: &EntityStore) -> String {
        match self {
            Self::Dashboard => "Dashboard".to_string(),
            Self::ProjectList => "My Projects".to_string(),
            Self::ProjectDetail(id) => store
                .get::<Project>(id)
                .map(|project| project.name)
                .unwrap_or_else(|| "Project not found".to_string()),
            Self::ProjectCreate => "Create new project".to_string(),
            Self::ProjectEdit(id) => store
                .get::<Project>(id)
                .map(|project| format!("Edit project: {}", project.name))
                .unwrap_or_else(|| "Project not found".to_string()),
            Self::TaskList => "All Tasks".to_string(),
            Self::TaskCreate => "Create new task".to_string(),
            Self::TaskEdit(id) => found_or(store.contains::<Task>(id), "Edit task", "Task not found"),
            Self::ProductList => "All Products".to_string(),
            Self::ProductCreate => "Add new product".to_string(),
            Self::ProductEdit(id) => store
                .get::<Product>(id)
                .map(|product| format!("Edit product: {}", product.name))
                .unwrap_or_else(|| "Product not found".to_string()),
            Self::ExpenseList => "All Expenses".to_string(),
            Self::ExpenseCreate => "Add new expense".to_string(),
            Self::ExpenseEdit(id) => found_or(
                store.contains::<Expense>(id),
                "Edit expense",
                "Expense not found",
            ),
            Self::PaymentList => "All Payments".to_string(),
            Self::PaymentCreate => "Add new payment".to_string(),
            Self::PaymentEdit(id) => found_or(
                store.contains::<Payment>(id),
                "Edit payment",
                "Payment not found",
            ),
            Self::Profile => "My Profile".to_string(),
            Self::Settings => "Settings".to_string(),
            Self::Shared => "Shared with me".to_string(),
            Self::Recent => "Recent activity".to_string(),
            Self::Trash => "Trash".to_string(),
        }
    }

    /// Search box hint set on entry. `None` leaves the current hint alone.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard
            | Self::ProjectList
            | Self::Profile
            | Self::Settings
            | Self::Shared
            | Self::Recent
            | Self::Trash => Some(PROJECT_SEARCH_PLACEHOLDER),
            Self::ProductList => Some("Search products..."),
            Self::ExpenseList => Some("Search expenses..."),
            Self::PaymentList => Some("Search payments..."),
            _ => None,
        }
    }

    /// Whether entering the page raises the loading flag.
    pub fn shows_loading(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::ProjectList
                | Self::ProjectDetail(_)
                | Self::TaskList
                | Self::ProductList
                | Self::ExpenseList
                | Self::PaymentList
                | Self::Profile
                | Self::Settings
                | Self::Shared
                | Self::Recent
                | Self::Trash
        )
    }

    /// Searchable list pages. Their search text is dropped when they are left.
    pub fn is_searchable_list(&self) -> bool {
        matches!(
            self,
            Self::ProjectList | Self::ProductList | Self::ExpenseList | Self::PaymentList
        )
    }

    /// Pages that start with an empty search box.
    pub fn clears_search_on_enter(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::Profile
                | Self::Settings
                | Self::Shared
                | Self::Recent
                | Self::Trash
        )
    }
}

fn found_or(found: bool, title: &str, missing: &str) -> String {
    if found { title } else { missing }.to_string()
}

#[cfg(test)]
mod tests {
    use super::PageKind;
    use crate::model::{EntityId, NewProject, Project};
    use crate::store::EntityStore;
    use time::macros::date;

    #[test]
    fn detail_title_follows_project_name() {
        let mut store = EntityStore::new();
        let project: Project =
            store.create(NewProject::new("Storefront", "Shop", date!(2024 - 12 - 25)));

        assert_eq!(PageKind::ProjectDetail(project.id.clone()).title(&store), "Storefront");
        assert_eq!(
            PageKind::ProjectEdit(project.id.clone()).title(&store),
            "Edit project: Storefront"
        );
        assert_eq!(
            PageKind::ProjectDetail(EntityId::from("proj-404")).title(&store),
            "Project not found"
        );
    }

    #[test]
    fn only_list_pages_are_searchable() {
        assert!(PageKind::ExpenseList.is_searchable_list());
        assert!(!PageKind::TaskList.is_searchable_list());
        assert!(!PageKind::Dashboard.is_searchable_list());
        assert_eq!(PageKind::TaskList.placeholder(), None);
        assert!(!PageKind::TaskCreate.shows_loading());
    }

    #[test]
    fn stub_pages_behave_like_profile() {
        let store = EntityStore::new();
        for page in [PageKind::Shared, PageKind::Recent, PageKind::Trash] {
            assert_eq!(page.placeholder(), Some("Search projects..."));
            assert!(page.shows_loading());
            assert!(page.clears_search_on_enter());
            assert!(!page.is_searchable_list());
        }
        assert_eq!(PageKind::Shared.title(&store), "Shared with me");
        assert_eq!(PageKind::Recent.title(&store), "Recent activity");
        assert_eq!(PageKind::Trash.title(&store), "Trash");
    }
}
