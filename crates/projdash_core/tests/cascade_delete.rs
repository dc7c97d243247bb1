use projdash_core::{
    EntityStore, Expense, NewExpense, NewPayment, NewProduct, NewProject, NewTask, Payment,
    PaymentStatus, Product, Project, Task,
};
use rust_decimal::Decimal;
use time::macros::date;

struct Fixture {
    store: EntityStore,
    doomed: Project,
    survivor: Project,
}

fn populate(store: &mut EntityStore, project: &Project, label: &str) {
    let _: Task = store.create(NewTask::new(project.id.clone(), format!("{label} task")));
    let _: Product = store.create(NewProduct {
        project_id: project.id.clone(),
        name: format!("{label} product"),
        quantity: 2,
        price: Decimal::from(10),
        supplier: "Supplier".to_string(),
        image_url: None,
    });
    let _: Expense = store.create(NewExpense {
        project_id: project.id.clone(),
        description: format!("{label} expense"),
        amount: Decimal::from(150),
        date: date!(2024 - 12 - 01),
        category: "Hosting".to_string(),
    });
    let _: Payment = store.create(NewPayment {
        project_id: project.id.clone(),
        description: format!("{label} payment"),
        amount: Decimal::from(500),
        date: date!(2024 - 12 - 15),
        status: PaymentStatus::Pending,
    });
}

fn setup() -> Fixture {
    let mut store = EntityStore::new();
    let doomed: Project =
        store.create(NewProject::new("P1", "to delete", date!(2025 - 01 - 01)));
    let survivor: Project =
        store.create(NewProject::new("P2", "to keep", date!(2025 - 01 - 01)));
    populate(&mut store, &doomed, "doomed");
    populate(&mut store, &survivor, "survivor");
    Fixture {
        store,
        doomed,
        survivor,
    }
}

fn assert_no_dependents(store: &EntityStore, project: &Project) {
    assert!(store.list_by_project::<Task>(&project.id).is_empty());
    assert!(store.list_by_project::<Product>(&project.id).is_empty());
    assert!(store.list_by_project::<Expense>(&project.id).is_empty());
    assert!(store.list_by_project::<Payment>(&project.id).is_empty());
}

#[test]
fn cascade_removes_project_and_all_dependents() {
    let Fixture {
        mut store,
        doomed,
        survivor,
    } = setup();

    assert!(store.delete_project_cascade(&doomed.id));

    assert!(store.get::<Project>(&doomed.id).is_none());
    assert_no_dependents(&store, &doomed);

    assert_eq!(store.list_by_project::<Task>(&survivor.id).len(), 1);
    assert_eq!(store.list_by_project::<Product>(&survivor.id).len(), 1);
    assert_eq!(store.list_by_project::<Expense>(&survivor.id).len(), 1);
    assert_eq!(store.list_by_project::<Payment>(&survivor.id).len(), 1);
}

#[test]
fn generic_project_delete_also_cascades() {
    let Fixture {
        mut store, doomed, ..
    } = setup();

    assert!(store.delete::<Project>(&doomed.id));
    assert_no_dependents(&store, &doomed);
    assert_eq!(store.len::<Task>(), 1);
}

#[test]
fn cascade_report_counts_each_collection() {
    let Fixture {
        mut store, doomed, ..
    } = setup();

    let report = store.delete_project_cascade_report(&doomed.id);
    assert!(report.project_removed);
    assert_eq!(
        (report.tasks, report.products, report.expenses, report.payments),
        (1, 1, 1, 1)
    );

    let again = store.delete_project_cascade_report(&doomed.id);
    assert!(!again.project_removed);
    assert_eq!(again.dependents_removed(), 0);
}

#[test]
fn scenario_project_task_expense_cascade() {
    let mut store = EntityStore::new();
    let p1: Project = store.create(NewProject::new("P1", "demo", date!(2025 - 01 - 01)));
    let t1: Task = store.create(NewTask::new(p1.id.clone(), "T1"));
    let server: Expense = store.create(NewExpense {
        project_id: p1.id.clone(),
        description: "Server".to_string(),
        amount: Decimal::from(150),
        date: date!(2024 - 12 - 01),
        category: "Hosting".to_string(),
    });

    store.delete_project_cascade(&p1.id);

    assert!(!store.list::<Project>().iter().any(|p| p.id == p1.id));
    assert!(!store.list::<Task>().iter().any(|t| t.id == t1.id));
    assert!(!store.list::<Expense>().iter().any(|e| e.id == server.id));
    assert_no_dependents(&store, &p1);
}

#[test]
fn cascade_on_unknown_project_reports_success_and_changes_nothing() {
    let Fixture { mut store, .. } = setup();
    let before = (
        store.len::<Project>(),
        store.len::<Task>(),
        store.len::<Payment>(),
    );

    assert!(store.delete_project_cascade(&"proj-404".into()));
    assert_eq!(
        before,
        (
            store.len::<Project>(),
            store.len::<Task>(),
            store.len::<Payment>()
        )
    );
}
