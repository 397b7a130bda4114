// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players names storage.
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::{
    fs,
    path::{Path, PathBuf},
};

use drawpoker_core::PlayerNames;

/// A JSON file holding the players names.
#[derive(Debug, Clone)]
pub struct NamesStore {
    path: PathBuf,
}

impl NamesStore {
    /// The names file name in the application config directory.
    pub const FILE_NAME: &'static str = "players.json";

    /// Creates a store for the given path or for the default config path.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => directories::ProjectDirs::from("", "", "drawpoker")
                .map(|dirs| dirs.config_dir().join(Self::FILE_NAME))
                .ok_or_else(|| anyhow!("Cannot find a config directory, use --names-file"))?,
        };

        Ok(Self { path })
    }

    /// The names file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the names, a missing file gives the default names.
    pub fn load(&self) -> Result<PlayerNames> {
        if !self.path.exists() {
            debug!("No names file {}, using defaults", self.path.display());
            return Ok(PlayerNames::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read {}", self.path.display()))?;
        let names = serde_json::from_str(&data)
            .with_context(|| format!("Invalid names file {}", self.path.display()))?;

        Ok(names)
    }

    /// Saves the names creating the parent directory if needed.
    pub fn save(&self, names: &PlayerNames) -> Result<()> {
        let parent = self.path.parent().filter(|d| !d.as_os_str().is_empty());
        if let Some(dir) = parent {
            fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;
        }

        let data = serde_json::to_string_pretty(names)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Cannot write {}", self.path.display()))?;

        info!("Saved players names to {}", self.path.display());
        Ok(())
    }
}
