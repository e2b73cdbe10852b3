//! Meeting CLI commands

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use clap::Subcommand;

use super::app::load_store;
use super::output::Output;
use crate::domain::{DocumentPatch, Meeting, MeetingStatus, RecordId, RecordKind};
use crate::storage::Workspace;

#[derive(Subcommand)]
pub enum MeetingCommands {
    /// Schedule a meeting with an exhibitor
    Add {
        /// Exhibitor id the meeting is with
        exhibitor_id: String,

        /// Date and time, e.g. 2024-02-26T10:30
        #[arg(long = "at")]
        date_time: String,

        /// Where to meet (defaults to the exhibitor's stand when shown)
        #[arg(long, default_value = "")]
        location: String,

        /// Objective or notes
        #[arg(long, default_value = "")]
        notes: String,

        /// Fair to add to (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },

    /// List meetings in chronological order
    List {
        /// Only meetings with this status (pending, completed, cancelled)
        #[arg(long)]
        status: Option<MeetingStatus>,

        /// Fair to list (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },

    /// Mark a pending meeting as completed
    Done {
        /// Meeting id
        id: String,

        /// Fair the meeting belongs to (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },

    /// Delete a meeting
    Delete {
        /// Meeting id
        id: String,

        /// Fair the meeting belongs to (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },
}

pub fn run(cmd: MeetingCommands, workspace: &mut Workspace, output: &Output) -> Result<()> {
    match cmd {
        MeetingCommands::Add {
            exhibitor_id,
            date_time,
            location,
            notes,
            fair,
        } => add(workspace, output, fair.as_deref(), &exhibitor_id, &date_time, location, notes),
        MeetingCommands::List { status, fair } => list(workspace, output, fair.as_deref(), status),
        MeetingCommands::Done { id, fair } => done(workspace, output, fair.as_deref(), &id),
        MeetingCommands::Delete { id, fair } => delete(workspace, output, fair.as_deref(), &id),
    }
}

/// Parses user input into the canonical minute-precision ISO-local form
fn parse_date_time(input: &str) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .with_context(|| format!("invalid date-time \"{}\" (expected e.g. 2024-02-26T10:30)", input))?;
    Ok(parsed.format("%Y-%m-%dT%H:%M").to_string())
}

fn add(
    workspace: &mut Workspace,
    output: &Output,
    fair: Option<&str>,
    exhibitor_str: &str,
    date_time: &str,
    location: String,
    notes: String,
) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let mut store = load_store(workspace, output);

    let exhibitor_id: RecordId = exhibitor_str.parse()?;
    let date_time = parse_date_time(date_time)?;

    let mut doc = store.document(&fair);
    if doc.exhibitor(&exhibitor_id).is_none() {
        anyhow::bail!(
            "Exhibitor not found: {} (add the exhibitor first)",
            exhibitor_id
        );
    }

    let id = RecordId::generate(RecordKind::Meeting, exhibitor_id.as_str(), Utc::now());
    let mut meeting = Meeting::new(id.clone(), &fair, exhibitor_id, date_time);
    meeting.location = location;
    meeting.notes = notes;

    doc.meetings.push(meeting.clone());
    store.replace(&fair, DocumentPatch::meetings(doc.meetings));
    workspace.save(&store)?;

    if output.is_json() {
        output.data(&meeting);
    } else {
        output.success(&format!(
            "Scheduled meeting: {} at {}",
            id, meeting.date_time
        ));
    }

    Ok(())
}

fn list(
    workspace: &mut Workspace,
    output: &Output,
    fair: Option<&str>,
    status: Option<MeetingStatus>,
) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let store = load_store(workspace, output);
    let doc = store.document(&fair);

    let meetings: Vec<&Meeting> = doc
        .meetings_by_time()
        .into_iter()
        .filter(|m| status.map(|s| m.status == s).unwrap_or(true))
        .collect();

    if output.is_json() {
        let items: Vec<_> = meetings
            .iter()
            .map(|m| {
                serde_json::json!({
                    "id": m.id.as_str(),
                    "exhibitorId": m.exhibitor_id.as_str(),
                    "exhibitor": doc.exhibitor_name(&m.exhibitor_id),
                    "dateTime": m.date_time,
                    "location": m.location,
                    "notes": m.notes,
                    "status": m.status,
                })
            })
            .collect();
        output.data(&items);
    } else if meetings.is_empty() {
        println!("No meetings for {}", fair);
    } else {
        println!(
            "{:<12} {:<17} {:<10} {:<24} LOCATION",
            "ID", "WHEN", "STATUS", "EXHIBITOR"
        );
        println!("{}", "-".repeat(80));
        for meeting in &meetings {
            println!(
                "{:<12} {:<17} {:<10} {:<24} {}",
                meeting.id,
                meeting.date_time,
                meeting.status,
                doc.exhibitor_name(&meeting.exhibitor_id),
                meeting.location
            );
            if !meeting.notes.is_empty() {
                println!("{:<12} note: {}", "", meeting.notes);
            }
        }
        output.blank();
        println!("{} meeting(s)", meetings.len());
    }

    Ok(())
}

fn done(workspace: &mut Workspace, output: &Output, fair: Option<&str>, id_str: &str) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let mut store = load_store(workspace, output);

    let id: RecordId = id_str.parse()?;
    let doc = store.document(&fair);
    let Some(meeting) = doc.meeting(&id) else {
        anyhow::bail!("Meeting not found: {}", id);
    };
    if !meeting.status.is_pending() {
        anyhow::bail!("Meeting {} is not pending (status: {})", id, meeting.status);
    }

    store.set_meeting_status(&fair, &id, MeetingStatus::Completed);
    workspace.save(&store)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": id.as_str(),
            "status": MeetingStatus::Completed,
        }));
    } else {
        output.success(&format!("Completed meeting: {}", id));
    }

    Ok(())
}

fn delete(
    workspace: &mut Workspace,
    output: &Output,
    fair: Option<&str>,
    id_str: &str,
) -> Result<()> {
    let fair = workspace.resolve_fair(fair)?;
    let mut store = load_store(workspace, output);

    let id: RecordId = id_str.parse()?;
    let doc = store.document(&fair);
    if doc.meeting(&id).is_none() {
        anyhow::bail!("Meeting not found: {}", id);
    }

    let meetings: Vec<Meeting> = doc.meetings.into_iter().filter(|m| m.id != id).collect();
    store.replace(&fair, DocumentPatch::meetings(meetings));
    workspace.save(&store)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "deleted": id.as_str() }));
    } else {
        output.success(&format!("Deleted meeting: {}", id));
    }

    Ok(())
}
