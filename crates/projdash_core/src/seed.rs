//! Bundled demo data set.
//!
//! Four projects with their tasks, products, expenses and payments. Records
//! are inserted oldest-last so that, with prepend-on-create, the store lists
//! them in the order written here.

use crate::model::{
    EntityId, Expense, NewExpense, NewPayment, NewProduct, NewProject, NewTask, Payment,
    PaymentStatus, Product, Project, ProjectStatus, Task,
};
use crate::store::EntityStore;
use log::info;
use rust_decimal::Decimal;
use time::macros::date;

/// Builds a store holding the demo data set.
pub fn demo_store() -> EntityStore {
    let mut store = EntityStore::new();

    let drafts = [
        NewProject::new(
            "New e-commerce site",
            "A modern, responsive storefront platform for the client.",
            date!(2024 - 12 - 25),
        )
        .with_image_url("https://picsum.photos/seed/ecommerce/400/300"),
        NewProject::new(
            "Mobile app interface design",
            "A user-friendly interface for iOS and Android.",
            date!(2025 - 01 - 15),
        )
        .with_image_url("https://picsum.photos/seed/mobileapp/400/300"),
        NewProject::new(
            "CRM system integration",
            "Integrate the existing CRM with the new platform.",
            date!(2025 - 02 - 10),
        )
        .with_status(ProjectStatus::OnHold)
        .with_image_url("https://picsum.photos/seed/crm/400/300"),
        NewProject::new(
            "Admin panel overhaul",
            "The legacy admin panel was rebuilt and extended.",
            date!(2024 - 11 - 30),
        )
        .with_status(ProjectStatus::Completed)
        .with_image_url("https://picsum.photos/seed/dashboard/400/300"),
    ];
    let mut projects: Vec<Project> = drafts
        .into_iter()
        .rev()
        .map(|draft| store.create::<Project>(draft))
        .collect();
    projects.reverse();
    let [shop, mobile, _crm, admin] = [0, 1, 2, 3].map(|index| projects[index].id.clone());

    let tasks = [
        (&shop, "Finish the home page design", true),
        (&shop, "Backend integration for product listing", false),
        (&shop, "Set up cart and checkout", false),
        (&mobile, "Prepare wireframes", true),
        (&mobile, "Pick colour palette and typography", true),
        (&mobile, "Design sign-in and sign-up screens", false),
        (&admin, "User management module added", true),
        (&admin, "Reporting screens completed", true),
    ];
    for (project_id, text, completed) in tasks.into_iter().rev() {
        let mut draft = NewTask::new(project_id.clone(), text);
        draft.completed = completed;
        let _: Task = store.create(draft);
    }

    let products = [
        (&shop, "Frontend framework licence", 1, 500, "React Co.", "license"),
        (&shop, "UI kit subscription", 1, 250, "DesignSys", "uikit"),
        (&mobile, "Stock icon set", 3, 100, "Icons Inc.", "icons"),
    ];
    for (project_id, name, quantity, price, supplier, image) in products.into_iter().rev() {
        let _: Product = store.create(NewProduct {
            project_id: project_id.clone(),
            name: name.to_string(),
            quantity,
            price: Decimal::from(price),
            supplier: supplier.to_string(),
            image_url: Some(format!("https://picsum.photos/seed/{image}/200/200")),
        });
    }

    let expenses = [
        (&shop, "Server rent (monthly)", 150, date!(2024 - 12 - 01), "Hosting"),
        (&shop, "Domain name registration", 20, date!(2024 - 11 - 15), "Domain"),
        (&mobile, "Prototyping tool subscription", 50, date!(2024 - 11 - 20), "Software"),
    ];
    for (project_id, description, amount, date, category) in expenses.into_iter().rev() {
        let _: Expense = store.create(NewExpense {
            project_id: project_id.clone(),
            description: description.to_string(),
            amount: Decimal::from(amount),
            date,
            category: category.to_string(),
        });
    }

    let payments = [
        (&shop, "Project kick-off payment", 2500, date!(2024 - 11 - 10), PaymentStatus::Paid),
        (&shop, "First milestone delivery", 5000, date!(2024 - 12 - 30), PaymentStatus::Pending),
        (&mobile, "Design approval payment", 1500, date!(2024 - 11 - 25), PaymentStatus::Paid),
    ];
    for (project_id, description, amount, date, status) in payments.into_iter().rev() {
        let _: Payment = store.create(NewPayment {
            project_id: project_id.clone(),
            description: description.to_string(),
            amount: Decimal::from(amount),
            date,
            status,
        });
    }

    info!(
        "event=demo_seed module=seed status=ok projects={} tasks={} products={} expenses={} payments={}",
        store.len::<Project>(),
        store.len::<Task>(),
        store.len::<Product>(),
        store.len::<Expense>(),
        store.len::<Payment>()
    );
    store
}

/// Id of the first demo project, handy in examples and tests.
pub fn first_project_id(store: &EntityStore) -> Option<EntityId> {
    store.list::<Project>().into_iter().next().map(|project| project.id)
}

impl EntityStore {
    /// Store pre-filled with the demo data set.
    pub fn with_demo_data() -> Self {
        demo_store()
    }
}

#[cfg(test)]
mod tests {
    use super::demo_store;
    use crate::model::{Expense, Payment, Product, Project, ProjectStatus, Task};
    use crate::store::EntityStore;

    #[test]
    fn demo_store_matches_expected_shape() {
        let store = demo_store();
        assert_eq!(store.len::<Project>(), 4);
        assert_eq!(store.len::<Task>(), 8);
        assert_eq!(store.len::<Product>(), 3);
        assert_eq!(store.len::<Expense>(), 3);
        assert_eq!(store.len::<Payment>(), 3);

        let projects = store.list::<Project>();
        assert_eq!(projects[0].name, "New e-commerce site");
        assert_eq!(projects[3].status, ProjectStatus::Completed);
        assert_eq!(store.list::<Task>()[0].text, "Finish the home page design");
    }

    #[test]
    fn demo_badges_match_seed() {
        let counts = EntityStore::with_demo_data().sidebar_counts();
        assert_eq!(counts.active_projects, 2);
        assert_eq!(counts.open_tasks, 3);
    }

    #[test]
    fn demo_dependents_hang_off_expected_projects() {
        let store = demo_store();
        let shop = &store.list::<Project>()[0];
        assert_eq!(store.list_by_project::<Task>(&shop.id).len(), 3);
        assert_eq!(store.list_by_project::<Payment>(&shop.id).len(), 2);
        let crm = &store.list::<Project>()[2];
        assert!(store.list_by_project::<Task>(&crm.id).is_empty());
    }
}
