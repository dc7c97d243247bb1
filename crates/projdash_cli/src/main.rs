//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `projdash_core` linkage against the demo data set.
//! - Print the dashboard summary and the first page of each list.
//!
//! Reads an optional JSON config from `PROJDASH_CONFIG`.

use log::info;
use projdash_core::{
    DashboardConfig, DashboardService, EntityId, Expense, PageKind, Payment, Product, Project,
};
use std::collections::BTreeMap;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("projdash: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = projdash_core::init_from_config(&config) {
        eprintln!("projdash: logging disabled: {err}");
    }

    let mut service = match DashboardService::new(config) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("projdash: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "event=cli_start module=cli status=ok version={}",
        projdash_core::core_version()
    );
    println!("projdash_core ping={}", projdash_core::ping());
    println!("projdash_core version={}", projdash_core::core_version());

    let session = service.navigate(PageKind::Dashboard, Instant::now());
    let summary = service.store().dashboard_summary();
    let badges = service.view().sidebar_counts();
    println!(
        "projects total={} active={} completed={} on_hold={}",
        summary.total_projects,
        summary.active_projects,
        summary.completed_projects,
        summary.on_hold_projects
    );
    println!(
        "badges active_projects={} open_tasks={}",
        badges.active_projects, badges.open_tasks
    );
    service.leave_page(session);

    if let Some(detail) = projdash_core::first_project_id(service.store())
        .and_then(|id| service.project_detail(&id))
    {
        let completion = detail
            .completion_percent()
            .map(|percent| format!("{percent}%"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "latest project={} tasks={} products={} expenses={} payments={} done={}",
            detail.project.name,
            detail.tasks.len(),
            detail.products.len(),
            detail.expenses.len(),
            detail.payments.len(),
            completion
        );
    }

    let names = service.store().project_names();

    let mut paginator = service.paginator();
    let projects = service.listing::<Project>(&mut paginator);
    print_header("projects", projects.total_items, projects.total_pages);
    for project in &projects.items {
        println!("  {} [{}] due {}", project.name, project.status.label(), project.due_date);
    }

    let mut paginator = service.paginator();
    let tasks = service.task_listing(&mut paginator);
    print_header("tasks", tasks.total_items, tasks.total_pages);
    for task in &tasks.items {
        let mark = if task.completed { 'x' } else { ' ' };
        println!("  [{mark}] {} ({})", task.text, project_name(&names, &task.project_id));
    }

    let mut paginator = service.paginator();
    let products = service.listing::<Product>(&mut paginator);
    print_header("products", products.total_items, products.total_pages);
    for product in &products.items {
        println!(
            "  {} x{} @ {} = {} ({})",
            product.name,
            product.quantity,
            product.price,
            product.line_total(),
            product.supplier
        );
    }

    let mut paginator = service.paginator();
    let expenses = service.listing::<Expense>(&mut paginator);
    print_header("expenses", expenses.total_items, expenses.total_pages);
    for expense in &expenses.items {
        println!(
            "  {} {} [{}] {}",
            expense.date,
            expense.amount.round_dp(2),
            expense.category,
            expense.description
        );
    }

    let mut paginator = service.paginator();
    let payments = service.listing::<Payment>(&mut paginator);
    print_header("payments", payments.total_items, payments.total_pages);
    for payment in &payments.items {
        println!(
            "  {} {} [{}] {}",
            payment.date,
            payment.amount.round_dp(2),
            payment.status.label(),
            payment.description
        );
    }

    ExitCode::SUCCESS
}

fn load_config() -> Result<DashboardConfig, String> {
    match std::env::var("PROJDASH_CONFIG") {
        Ok(raw) => DashboardConfig::from_json_str(&raw).map_err(|err| err.to_string()),
        Err(_) => Ok(DashboardConfig {
            seed_demo_data: true,
            ..DashboardConfig::default()
        }),
    }
}

fn project_name<'a>(names: &'a BTreeMap<EntityId, String>, id: &EntityId) -> &'a str {
    names.get(id).map(String::as_str).unwrap_or("-")
}

fn print_header(label: &str, total: usize, pages: usize) {
    println!("{label} total={total} pages={pages}");
}
