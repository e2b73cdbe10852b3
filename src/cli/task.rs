//! Follow-up task CLI commands

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use super::app::load_store;
use super::output::Output;
use crate::domain::{DocumentPatch, RecordId, RecordKind, Task};
use crate::storage::Workspace;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a follow-up task
    Add {
        /// What needs doing
        description: String,

        /// Due date, e.g. 2024-03-15
        #[arg(long)]
        due: Option<String>,

        /// Fair to add to (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },

    /// List tasks, open ones first
    List {
        /// Only open tasks
        #[arg(long)]
        open: bool,

        /// Fair to list (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },

    /// Flip a task between open and completed
    Toggle {
        /// Task id
        id: String,

        /// Fair the task belongs to (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: String,

        /// Fair the task belongs to (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },
}

pub fn run(cmd: TaskCommands, workspace: &mut Workspace, output: &Output) -> Result<()> {
    match cmd {
        TaskCommands::Add { description, due, fair } => {
            add(workspace, output, fair.as_deref(), &description, due.as_deref())
        }
        TaskCommands::List { open, fair } => list(workspace, output, fair.as_deref(), open),
        TaskCommands::Toggle { id, fair } => toggle(workspace, output, fair.as_deref(), &id),
        TaskCommands::Delete { id, fair } => delete(workspace, output, fair.as_deref(), &id),
    }
}

fn add(
    workspace: &mut Workspace,
    output: &Output,
    fair: Option<&str>,
    description: &str,
    due: Option<&str>,
) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let mut store = load_store(workspace, output);

    let due_date = due
        .map(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .with_context(|| format!("invalid due date \"{}\" (expected e.g. 2024-03-15)", d))
        })
        .transpose()?;

    let id = RecordId::generate(RecordKind::Task, description, Utc::now());
    let mut task = Task::new(id.clone(), &fair, description);
    task.due_date = due_date;

    let mut doc = store.document(&fair);
    doc.tasks.push(task.clone());
    store.replace(&fair, DocumentPatch::tasks(doc.tasks));
    workspace.save(&store)?;

    if output.is_json() {
        output.data(&task);
    } else {
        output.success(&format!("Added task: {} - {}", id, task.description));
    }

    Ok(())
}

fn list(workspace: &mut Workspace, output: &Output, fair: Option<&str>, open_only: bool) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let store = load_store(workspace, output);
    let doc = store.document(&fair);

    let tasks: Vec<&Task> = doc
        .tasks_open_first()
        .into_iter()
        .filter(|t| !open_only || !t.completed)
        .collect();

    if output.is_json() {
        output.data(&tasks);
    } else if tasks.is_empty() {
        println!("No tasks for {}", fair);
    } else {
        for task in &tasks {
            let mark = if task.completed { "x" } else { " " };
            let due = task
                .due_date
                .map(|d| format!(" (due {})", d))
                .unwrap_or_default();
            println!("[{}] {:<12} {}{}", mark, task.id, task.description, due);
        }
        output.blank();
        println!("{} open / {} total", doc.open_task_count(), doc.tasks.len());
    }

    Ok(())
}

fn toggle(workspace: &mut Workspace, output: &Output, fair: Option<&str>, id_str: &str) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let mut store = load_store(workspace, output);

    let id: RecordId = id_str.parse()?;
    if !store.toggle_task(&fair, &id) {
        anyhow::bail!("Task not found: {}", id);
    }
    workspace.save(&store)?;

    let completed = store
        .document(&fair)
        .task(&id)
        .map(|t| t.completed)
        .unwrap_or(false);

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": id.as_str(),
            "completed": completed,
        }));
    } else if completed {
        output.success(&format!("Completed task: {}", id));
    } else {
        output.success(&format!("Reopened task: {}", id));
    }

    Ok(())
}

fn delete(workspace: &mut Workspace, output: &Output, fair: Option<&str>, id_str: &str) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let mut store = load_store(workspace, output);

    let id: RecordId = id_str.parse()?;
    let doc = store.document(&fair);
    if doc.task(&id).is_none() {
        anyhow::bail!("Task not found: {}", id);
    }

    let tasks: Vec<Task> = doc.tasks.into_iter().filter(|t| t.id != id).collect();
    store.replace(&fair, DocumentPatch::tasks(tasks));
    workspace.save(&store)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "deleted": id.as_str() }));
    } else {
        output.success(&format!("Deleted task: {}", id));
    }

    Ok(())
}
