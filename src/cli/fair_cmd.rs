//! Fair catalog commands

use anyhow::Result;

use super::output::Output;
use crate::domain::{Fair, CATALOG};
use crate::storage::Workspace;

/// Lists the built-in catalog
pub fn list(output: &Output) {
    if output.is_json() {
        output.data(&CATALOG);
        return;
    }

    println!("{:<14} {:<30} {:<24} DATES", "ID", "NAME", "LOCATION");
    println!("{}", "-".repeat(86));
    for fair in CATALOG {
        println!(
            "{:<14} {:<30} {:<24} {}",
            fair.id, fair.name, fair.location, fair.dates
        );
    }
}

/// Persists the default fair after validating it against the catalog
pub fn set_default(workspace: &mut Workspace, output: &Output, fair_id: &str) -> Result<()> {
    let Some(fair) = Fair::find(fair_id) else {
        let known: Vec<&str> = CATALOG.iter().map(|f| f.id).collect();
        anyhow::bail!(
            "unknown fair \"{}\" (known fairs: {})",
            fair_id,
            known.join(", ")
        );
    };

    workspace.set_default_fair(fair.id)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "default_fair": fair.id,
            "name": fair.name,
        }));
    } else {
        output.success(&format!("Now working on {} ({})", fair.name, fair.id));
    }

    Ok(())
}
