//! Configuration of a whole run.
use anyhow::Result;
use bricknbash_arena::ArenaConfig;
use bricknbash_core::TrainerConfig;
use bricknbash_qlearn::QLearnConfig;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of a run: the arena, the agent and the training loop.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct BrickNBashConfig {
    pub arena: ArenaConfig,
    pub qlearn: QLearnConfig,
    pub trainer: TrainerConfig,
}

impl BrickNBashConfig {
    /// Loads [`BrickNBashConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`BrickNBashConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
