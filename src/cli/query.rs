//! Overview queries: status counts and search

use anyhow::Result;

use super::app::load_store;
use super::output::Output;
use crate::domain::{AgendaStore, Fair, FairDocument};
use crate::storage::Workspace;

/// Shows record counts, either for one fair or for every fair with data
pub fn status(
    workspace: &mut Workspace,
    output: &Output,
    fair: Option<&str>,
    all: bool,
) -> Result<()> {
    let resolved = if all { None } else { resolve_optional(workspace, fair) };
    let store = load_store(workspace, output);

    match resolved {
        Some(fair_id) => fair_status(output, &fair_id, &store.document(&fair_id)),
        None => overview(output, &store),
    }

    Ok(())
}

/// Like `Workspace::resolve_fair` but falls back to the overview instead
/// of erroring when nothing is selected
fn resolve_optional(workspace: &Workspace, flag: Option<&str>) -> Option<String> {
    workspace.resolve_fair(flag).ok()
}

fn fair_status(output: &Output, fair_id: &str, doc: &FairDocument) {
    let name = Fair::find(fair_id).map(|f| f.name).unwrap_or("(not in catalog)");

    if output.is_json() {
        output.data(&serde_json::json!({
            "fair": fair_id,
            "name": name,
            "exhibitors": doc.exhibitors.len(),
            "meetings": doc.meetings.len(),
            "open_tasks": doc.open_task_count(),
            "tasks": doc.tasks.len(),
        }));
        return;
    }

    println!("{} ({})", name, fair_id);
    println!("  Exhibitors: {}", doc.exhibitors.len());
    println!("  Meetings:   {}", doc.meetings.len());
    println!(
        "  Tasks:      {} open / {} total",
        doc.open_task_count(),
        doc.tasks.len()
    );
}

fn overview(output: &Output, store: &AgendaStore) {
    if output.is_json() {
        let items: Vec<_> = store
            .fairs()
            .map(|(fair_id, doc)| {
                serde_json::json!({
                    "fair": fair_id,
                    "exhibitors": doc.exhibitors.len(),
                    "meetings": doc.meetings.len(),
                    "open_tasks": doc.open_task_count(),
                })
            })
            .collect();
        output.data(&items);
        return;
    }

    if store.is_empty() {
        println!("No data yet. Pick a fair with `fairagenda use <id>` and start adding exhibitors.");
        return;
    }

    println!("{:<14} {:<12} {:<10} OPEN TASKS", "FAIR", "EXHIBITORS", "MEETINGS");
    println!("{}", "-".repeat(52));
    for (fair_id, doc) in store.fairs() {
        println!(
            "{:<14} {:<12} {:<10} {}",
            fair_id,
            doc.exhibitors.len(),
            doc.meetings.len(),
            doc.open_task_count()
        );
    }
}

/// Case-insensitive substring search across one fair's three collections.
/// Meetings also match on the referenced exhibitor's name, so searching
/// for a company surfaces its meetings too.
pub fn search(
    workspace: &mut Workspace,
    output: &Output,
    query: &str,
    fair: Option<&str>,
) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let store = load_store(workspace, output);
    let doc = store.document(&fair);

    let needle = query.to_lowercase();
    let matches = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let exhibitors: Vec<_> = doc
        .exhibitors
        .iter()
        .filter(|e| {
            matches(&e.name) || matches(&e.hall) || matches(&e.stand) || matches(&e.category)
        })
        .collect();

    let meetings: Vec<_> = doc
        .meetings
        .iter()
        .filter(|m| {
            matches(doc.exhibitor_name(&m.exhibitor_id))
                || matches(&m.notes)
                || matches(&m.location)
        })
        .collect();

    let tasks: Vec<_> = doc.tasks.iter().filter(|t| matches(&t.description)).collect();

    if output.is_json() {
        output.data(&serde_json::json!({
            "query": query,
            "fair": fair,
            "exhibitors": exhibitors,
            "meetings": meetings,
            "tasks": tasks,
        }));
        return Ok(());
    }

    let total = exhibitors.len() + meetings.len() + tasks.len();
    if total == 0 {
        println!("No results for \"{}\" in {}", query, fair);
        return Ok(());
    }

    if !exhibitors.is_empty() {
        println!("Exhibitors:");
        for e in &exhibitors {
            println!("  {:<12} {}", e.id, e.name);
        }
    }
    if !meetings.is_empty() {
        println!("Meetings:");
        for m in &meetings {
            println!(
                "  {:<12} {} with {}",
                m.id,
                m.date_time,
                doc.exhibitor_name(&m.exhibitor_id)
            );
        }
    }
    if !tasks.is_empty() {
        println!("Tasks:");
        for t in &tasks {
            println!("  {:<12} {}", t.id, t.description);
        }
    }

    output.blank();
    println!("Found {} result(s)", total);

    Ok(())
}
