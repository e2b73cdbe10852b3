//! Backup export and import commands
//!
//! Export writes the whole store to a portable JSON file. Import decodes
//! first, then overwrites everything only once the decode succeeded and
//! the user confirmed with --force; a rejected import never touches state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use super::app::load_store;
use super::output::Output;
use crate::storage::{decode, encode, Workspace};

/// Default export filename, stamped with today's date
fn default_export_path() -> PathBuf {
    PathBuf::from(format!(
        "FairAgenda_Backup_{}.json",
        Local::now().format("%Y-%m-%d")
    ))
}

pub fn export(workspace: &mut Workspace, output: &Output, path: Option<&Path>) -> Result<()> {
    let store = load_store(workspace, output);
    let text = encode(&store)?;

    let to_stdout = path.map(|p| p == Path::new("-")).unwrap_or(false);
    if to_stdout {
        println!("{}", text);
        return Ok(());
    }

    let path = path.map(Path::to_path_buf).unwrap_or_else(default_export_path);
    fs::write(&path, &text)
        .with_context(|| format!("failed to write backup: {}", path.display()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
            "fairs": store.fair_count(),
        }));
    } else {
        output.success(&format!(
            "Exported {} fair(s) to {}",
            store.fair_count(),
            path.display()
        ));
    }

    Ok(())
}

pub fn import(workspace: &mut Workspace, output: &Output, path: &Path, force: bool) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read backup: {}", path.display()))?;

    // Decode before touching anything; a malformed backup must leave the
    // current data exactly as it was.
    let incoming = decode(&text).with_context(|| "import rejected, current data is unchanged")?;

    let mut store = load_store(workspace, output);

    if !force {
        anyhow::bail!(
            "importing replaces ALL current data ({} fair(s) stored, {} fair(s) incoming); \
             re-run with --force to confirm",
            store.fair_count(),
            incoming.fair_count()
        );
    }

    let fairs = incoming.fair_count();
    store.replace_all(incoming);
    workspace.save(&store)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "imported": path.display().to_string(),
            "fairs": fairs,
        }));
    } else {
        output.success(&format!(
            "Imported {} fair(s) from {}",
            fairs,
            path.display()
        ));
    }

    Ok(())
}
