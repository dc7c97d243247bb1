use projdash_core::{
    EntityId, EntityStore, Expense, NewExpense, NewPayment, NewProduct, NewProject, NewTask,
    Payment, PaymentStatus, Product, Project, ProjectStatus, Task,
};
use rust_decimal::Decimal;
use std::collections::HashSet;
use time::macros::date;

fn new_project(name: &str) -> NewProject {
    NewProject::new(name, format!("{name} description"), date!(2025 - 06 - 30))
}

#[test]
fn create_assigns_fresh_id_and_prepends() {
    let mut store = EntityStore::new();
    let first: Project = store.create(new_project("first"));
    let second: Project = store.create(new_project("second"));

    assert_ne!(first.id, second.id);
    let listed = store.list::<Project>();
    assert_eq!(listed[0], second);
    assert_eq!(listed[1], first);
}

#[test]
fn rapid_creates_never_collide_across_kinds() {
    let mut store = EntityStore::new();
    let project: Project = store.create(new_project("p"));
    let mut ids = HashSet::new();
    ids.insert(project.id.clone());

    for index in 0..200 {
        let task: Task = store.create(NewTask::new(project.id.clone(), format!("task {index}")));
        assert!(ids.insert(task.id));
    }
    assert_eq!(store.len::<Task>(), 200);
}

#[test]
fn ids_carry_kind_prefix() {
    let mut store = EntityStore::new();
    let project: Project = store.create(new_project("p"));
    let product: Product = store.create(NewProduct {
        project_id: project.id.clone(),
        name: "Licence".to_string(),
        quantity: 1,
        price: Decimal::new(50000, 2),
        supplier: "React Co.".to_string(),
        image_url: None,
    });
    let payment: Payment = store.create(NewPayment {
        project_id: project.id.clone(),
        description: "Kick-off".to_string(),
        amount: Decimal::from(2500),
        date: date!(2024 - 11 - 10),
        status: PaymentStatus::Paid,
    });

    assert!(project.id.as_str().starts_with("proj-"));
    assert!(product.id.as_str().starts_with("prod-"));
    assert!(payment.id.as_str().starts_with("pay-"));
}

#[test]
fn get_returns_none_for_missing_id() {
    let store = EntityStore::new();
    assert!(store.get::<Project>(&EntityId::from("proj-1")).is_none());
    assert!(store.get::<Expense>(&EntityId::from("exp-1")).is_none());
}

#[test]
fn update_replaces_fields_and_keeps_position() {
    let mut store = EntityStore::new();
    let a: Project = store.create(new_project("a"));
    let b: Project = store.create(new_project("b"));
    let c: Project = store.create(new_project("c"));

    let mut edited = b.clone();
    edited.name = "b renamed".to_string();
    edited.status = ProjectStatus::OnHold;
    edited.image_url = Some("cover.png".to_string());

    let updated = store.update(edited.clone()).unwrap();
    assert_eq!(updated, edited);
    assert_eq!(updated.id, b.id);

    let ids: Vec<_> = store.list::<Project>().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c.id, b.id.clone(), a.id]);
    assert_eq!(store.get::<Project>(&b.id).unwrap().name, "b renamed");
}

#[test]
fn update_of_missing_id_is_a_noop() {
    let mut store = EntityStore::new();
    let project: Project = store.create(new_project("kept"));
    let before = store.list::<Project>();

    let mut ghost = project.clone();
    ghost.id = EntityId::from("proj-999");
    ghost.name = "ghost".to_string();

    assert!(store.update(ghost).is_none());
    assert_eq!(store.list::<Project>(), before);
}

#[test]
fn delete_is_idempotent() {
    let mut store = EntityStore::new();
    let project: Project = store.create(new_project("p"));
    let expense: Expense = store.create(NewExpense {
        project_id: project.id.clone(),
        description: "Server".to_string(),
        amount: Decimal::from(150),
        date: date!(2024 - 12 - 01),
        category: "Hosting".to_string(),
    });

    assert!(store.delete::<Expense>(&expense.id));
    assert!(store.delete::<Expense>(&expense.id));
    assert!(store.delete::<Expense>(&EntityId::from("exp-does-not-exist")));
    assert!(store.is_empty::<Expense>());
    assert_eq!(store.len::<Project>(), 1);
}

#[test]
fn listed_snapshot_does_not_alias_store() {
    let mut store = EntityStore::new();
    let project: Project = store.create(new_project("p"));

    let mut snapshot = store.list::<Project>();
    snapshot[0].name = "mutated copy".to_string();
    snapshot.clear();

    assert_eq!(store.get::<Project>(&project.id).unwrap().name, "p");

    let held = store.list::<Project>();
    store.delete::<Project>(&project.id);
    assert_eq!(held.len(), 1);
    assert!(store.list::<Project>().is_empty());
}

#[test]
fn store_accepts_dangling_project_reference() {
    let mut store = EntityStore::new();
    let dangling = EntityId::from("proj-missing");
    let task: Task = store.create(NewTask::new(dangling.clone(), "orphan"));

    assert_eq!(store.get::<Task>(&task.id), Some(task));
    assert_eq!(store.list_by_project::<Task>(&dangling).len(), 1);
}

#[test]
fn records_serialize_with_camel_case_and_iso_dates() {
    let mut store = EntityStore::new();
    let project: Project = store.create(new_project("p"));
    let value = serde_json::to_value(&project).unwrap();

    assert_eq!(value["dueDate"], "2025-06-30");
    assert_eq!(value["status"], "active");
    assert!(value.get("imageUrl").is_none());

    let back: Project = serde_json::from_value(value).unwrap();
    assert_eq!(back, project);
}
