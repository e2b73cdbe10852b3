//! Durable slot for the agenda store
//!
//! The whole store is kept in a single JSON file. Reads treat a missing
//! or unreadable slot as an empty store so a broken file never prevents
//! startup; writes go through a locked temp file and an atomic rename.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::AgendaStore;

/// How a load attempt turned out
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// No slot file exists yet
    Fresh,
    /// Slot read and parsed
    Loaded,
    /// Slot existed but could not be read or parsed; started empty
    Recovered { error: String },
}

/// The single durable slot holding the encoded store
pub struct SlotStore {
    path: PathBuf,
}

impl SlotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the store. Absence and corruption both degrade to an empty
    /// store; the outcome tells the caller which happened so a warning
    /// can be surfaced.
    pub fn load(&self) -> (AgendaStore, LoadOutcome) {
        if !self.path.exists() {
            return (AgendaStore::new(), LoadOutcome::Fresh);
        }
        match self.try_load() {
            Ok(store) => (store, LoadOutcome::Loaded),
            Err(e) => (
                AgendaStore::new(),
                LoadOutcome::Recovered {
                    error: format!("{:#}", e),
                },
            ),
        }
    }

    fn try_load(&self) -> Result<AgendaStore> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open agenda file: {}", self.path.display()))?;

        file.lock_shared()
            .context("failed to acquire read lock on agenda file")?;

        let reader = BufReader::new(&file);
        let store = serde_json::from_reader(reader)
            .with_context(|| format!("failed to parse agenda file: {}", self.path.display()))?;

        // Lock is released when file is dropped
        Ok(store)
    }

    /// Writes the whole store back (full rewrite, atomic rename)
    pub fn save(&self, store: &AgendaStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("failed to acquire write lock on agenda file")?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, store)
                .context("failed to serialize agenda store")?;
            writer.flush().context("failed to flush agenda file")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
