//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{backup_cmd, exhibitor, fair_cmd, meeting, query, task};
use crate::domain::AgendaStore;
use crate::storage::Workspace;

#[derive(Parser)]
#[command(name = "fairagenda")]
#[command(author, version, about = "Local-first trade-fair agenda: exhibitors, meetings, follow-ups")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Agenda file to operate on (defaults to the platform data dir)
    #[arg(long, global = true, env = "FAIRAGENDA_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in fair catalog
    Fairs,

    /// Set the default fair for subsequent commands
    Use {
        /// Fair id from the catalog (see `fairagenda fairs`)
        fair_id: String,
    },

    /// Manage exhibitors
    #[command(subcommand)]
    Exhibitor(exhibitor::ExhibitorCommands),

    /// Manage meetings
    #[command(subcommand)]
    Meeting(meeting::MeetingCommands),

    /// Manage follow-up tasks
    #[command(subcommand)]
    Task(task::TaskCommands),

    /// Show record counts for a fair, or for every fair with data
    Status {
        /// Fair to report on (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,

        /// Report every fair with stored data
        #[arg(long)]
        all: bool,
    },

    /// Search exhibitors, meetings and tasks within one fair
    Search {
        /// Case-insensitive substring to look for
        query: String,

        /// Fair to search (defaults to the configured fair)
        #[arg(long)]
        fair: Option<String>,
    },

    /// Write a backup of every fair's data
    Export {
        /// Output path; `-` writes to stdout
        path: Option<PathBuf>,
    },

    /// Replace ALL stored data with a backup
    Import {
        /// Backup file to read
        path: PathBuf,

        /// Confirm overwriting every fair's data
        #[arg(long)]
        force: bool,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("FairAgenda starting");

    let mut workspace = Workspace::open(cli.data_file)?;

    match cli.command {
        Commands::Fairs => fair_cmd::list(&output),
        Commands::Use { fair_id } => fair_cmd::set_default(&mut workspace, &output, &fair_id)?,
        Commands::Exhibitor(cmd) => exhibitor::run(cmd, &mut workspace, &output)?,
        Commands::Meeting(cmd) => meeting::run(cmd, &mut workspace, &output)?,
        Commands::Task(cmd) => task::run(cmd, &mut workspace, &output)?,
        Commands::Status { fair, all } => query::status(&mut workspace, &output, fair.as_deref(), all)?,
        Commands::Search { query, fair } => {
            query::search(&mut workspace, &output, &query, fair.as_deref())?
        }
        Commands::Export { path } => backup_cmd::export(&mut workspace, &output, path.as_deref())?,
        Commands::Import { path, force } => {
            backup_cmd::import(&mut workspace, &output, &path, force)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Loads the store and surfaces any recovery warnings before the command
/// produces its own output
pub(crate) fn load_store(workspace: &mut Workspace, output: &Output) -> AgendaStore {
    let store = workspace.load();
    for warning in workspace.take_warnings() {
        output.warn(&warning);
    }
    store
}
