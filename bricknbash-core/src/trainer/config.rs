//! Configuration of [`Trainer`](super::Trainer).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Trainer`](super::Trainer).
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct TrainerConfig {
    /// The maximum number of environment steps, `0` to run until the process ends.
    pub max_steps: usize,

    /// Interval of saving the agent in environment steps, `0` to disable saving.
    pub save_interval: usize,

    /// Delay between two environment steps in milliseconds.
    pub tick_millis: u64,

    /// Interval of flushing records in environment steps.
    pub flush_record_interval: usize,

    /// Where the agent is saved.
    pub model_path: Option<String>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            max_steps: 0,
            save_interval: 0,
            tick_millis: 0,
            flush_record_interval: 1000,
            model_path: None,
        }
    }
}

impl TrainerConfig {
    /// Sets the number of environment steps.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets the interval of saving in environment steps.
    pub fn save_interval(mut self, save_interval: usize) -> Self {
        self.save_interval = save_interval;
        self
    }

    /// Sets the delay between steps in milliseconds.
    pub fn tick_millis(mut self, tick_millis: u64) -> Self {
        self.tick_millis = tick_millis;
        self
    }

    /// Sets the interval of flushing records in environment steps.
    pub fn flush_record_interval(mut self, flush_record_interval: usize) -> Self {
        self.flush_record_interval = flush_record_interval;
        self
    }

    /// Sets the path where the agent is saved.
    pub fn model_path(mut self, model_path: impl Into<String>) -> Self {
        self.model_path = Some(model_path.into());
        self
    }

    /// Constructs [`TrainerConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TrainerConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
