//! Exhibitor CLI commands

use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;

use super::app::load_store;
use super::output::Output;
use crate::domain::{DocumentPatch, Exhibitor, RecordId, RecordKind};
use crate::storage::Workspace;

#[derive(Subcommand)]
pub enum ExhibitorCommands {
    /// Register an exhibitor you plan to visit
    Add {
        /// Company name
        name: String,

        /// Hall number or label
        #[arg(long, default_value = "")]
        hall: String,

        /// Stand label
        #[arg(long, default_value = "")]
        stand: String,

        /// Category or product line
        #[arg(long, default_value = "")]
        category: String,

        /// Contact person
        #[arg(long)]
        contact: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Fair to add to (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },

    /// List exhibitors
    List {
        /// Fair to list (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },

    /// Delete an exhibitor AND every meeting referencing it
    Delete {
        /// Exhibitor id
        id: String,

        /// Confirm the cascading delete
        #[arg(long)]
        force: bool,

        /// Fair to delete from (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },
}

pub fn run(cmd: ExhibitorCommands, workspace: &mut Workspace, output: &Output) -> Result<()> {
    match cmd {
        ExhibitorCommands::Add {
            name,
            hall,
            stand,
            category,
            contact,
            email,
            fair,
        } => add(workspace, output, fair.as_deref(), name, hall, stand, category, contact, email),
        ExhibitorCommands::List { fair } => list(workspace, output, fair.as_deref()),
        ExhibitorCommands::Delete { id, force, fair } => {
            delete(workspace, output, fair.as_deref(), &id, force)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn add(
    workspace: &mut Workspace,
    output: &Output,
    fair: Option<&str>,
    name: String,
    hall: String,
    stand: String,
    category: String,
    contact: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let mut store = load_store(workspace, output);

    let id = RecordId::generate(RecordKind::Exhibitor, &name, Utc::now());
    let mut exhibitor = Exhibitor::new(id.clone(), &fair, &name);
    exhibitor.hall = hall;
    exhibitor.stand = stand;
    exhibitor.category = category;
    exhibitor.contact_name = contact;
    exhibitor.email = email;

    let mut doc = store.document(&fair);
    doc.exhibitors.push(exhibitor.clone());
    store.replace(&fair, DocumentPatch::exhibitors(doc.exhibitors));
    workspace.save(&store)?;

    if output.is_json() {
        output.data(&exhibitor);
    } else {
        output.success(&format!("Added exhibitor: {} - {}", id, exhibitor.name));
    }

    Ok(())
}

fn list(workspace: &mut Workspace, output: &Output, fair: Option<&str>) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let store = load_store(workspace, output);
    let doc = store.document(&fair);

    if output.is_json() {
        output.data(&doc.exhibitors);
    } else if doc.exhibitors.is_empty() {
        println!("No exhibitors for {}", fair);
    } else {
        println!("{:<12} {:<28} {:<10} CATEGORY", "ID", "NAME", "BOOTH");
        println!("{}", "-".repeat(70));
        for exhibitor in &doc.exhibitors {
            println!(
                "{:<12} {:<28} {:<10} {}",
                exhibitor.id,
                exhibitor.name,
                exhibitor.booth().unwrap_or_default(),
                exhibitor.category
            );
            if let Some(contact) = &exhibitor.contact_name {
                println!("{:<12} contact: {}", "", contact);
            }
        }
        output.blank();
        println!("{} exhibitor(s)", doc.exhibitors.len());
    }

    Ok(())
}

fn delete(
    workspace: &mut Workspace,
    output: &Output,
    fair: Option<&str>,
    id_str: &str,
    force: bool,
) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let mut store = load_store(workspace, output);

    let id: RecordId = id_str.parse()?;
    let doc = store.document(&fair);
    let Some(exhibitor) = doc.exhibitor(&id) else {
        anyhow::bail!("Exhibitor not found: {}", id);
    };

    let linked_meetings = doc.meetings.iter().filter(|m| m.exhibitor_id == id).count();
    if !force {
        anyhow::bail!(
            "deleting \"{}\" also removes {} linked meeting(s); re-run with --force to confirm",
            exhibitor.name,
            linked_meetings
        );
    }

    output.verbose_ctx("delete", &format!("cascading delete of {}", id));
    let removed = store.delete_exhibitor_cascade(&fair, &id);
    workspace.save(&store)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "deleted": id.as_str(),
            "removed_records": removed,
            "removed_meetings": removed.saturating_sub(1),
        }));
    } else {
        output.success(&format!(
            "Deleted exhibitor {} and {} meeting(s)",
            id,
            removed.saturating_sub(1)
        ));
    }

    Ok(())
}
