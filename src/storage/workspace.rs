//! Workspace wiring
//!
//! Resolves the configuration and slot location once per command, loads
//! the store at command start, and writes it back after each mutation.
//! Load and save are the two explicit lifecycle points; nothing persists
//! as a side effect of anything else.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::AgendaStore;

use super::config::Config;
use super::slot::{LoadOutcome, SlotStore};

/// A command's view of configuration and persistence
pub struct Workspace {
    config: Config,
    slot: SlotStore,
    warnings: Vec<String>,
}

impl Workspace {
    /// Opens the workspace. The slot path comes from the `--data-file`
    /// flag (or `FAIRAGENDA_DATA_FILE`), then the config file, then the
    /// platform default.
    pub fn open(data_file: Option<PathBuf>) -> Result<Self> {
        let (config, config_warning) = Config::load();
        let mut warnings = Vec::new();
        if let Some(warning) = config_warning {
            warnings.push(format!("ignoring unreadable config: {}", warning));
        }

        let path = match data_file.or_else(|| config.data_file.clone()) {
            Some(path) => path,
            None => Config::default_data_file()?,
        };

        Ok(Self {
            config,
            slot: SlotStore::new(path),
            warnings,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Persists a new default fair
    pub fn set_default_fair(&mut self, fair_id: impl Into<String>) -> Result<()> {
        self.config.default_fair = Some(fair_id.into());
        self.config.save()
    }

    /// Loads the store from the slot. A corrupt slot queues a warning and
    /// yields an empty store; startup never fails on it.
    pub fn load(&mut self) -> AgendaStore {
        let (store, outcome) = self.slot.load();
        if let LoadOutcome::Recovered { error } = outcome {
            self.warnings.push(format!(
                "agenda file could not be read, starting empty (durability at risk): {}",
                error
            ));
        }
        store
    }

    /// Writes the store back to the slot
    pub fn save(&self, store: &AgendaStore) -> Result<()> {
        self.slot
            .save(store)
            .context("changes were not persisted")
    }

    /// Fair a command should act on: the explicit flag, then the
    /// configured default
    pub fn resolve_fair(&self, flag: Option<&str>) -> Result<String> {
        flag.map(str::to_string)
            .or_else(|| self.config.default_fair.clone())
            .context("no fair selected; pass --fair <id> or run `fairagenda use <id>`")
    }

    /// Drains warnings queued by open/load for the caller to surface
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}
