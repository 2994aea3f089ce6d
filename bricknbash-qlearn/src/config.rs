//! Configuration of [`QLearning`](crate::QLearning).
use crate::{EpsilonGreedy, QLearnError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`QLearning`](crate::QLearning).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct QLearnConfig {
    /// Step size of the update.
    pub learning_rate: f64,

    /// Weight of the bootstrapped value.
    pub discount_factor: f64,

    pub n_states: usize,

    pub n_actions: usize,

    pub explorer: EpsilonGreedy,

    /// Seed of the exploration random generator.
    pub seed: u64,
}

impl Default for QLearnConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            n_states: 1000,
            n_actions: 4,
            explorer: EpsilonGreedy::default(),
            seed: 42,
        }
    }
}

impl QLearnConfig {
    /// Sets the learning rate.
    pub fn learning_rate(mut self, v: f64) -> Self {
        self.learning_rate = v;
        self
    }

    /// Sets the discount factor.
    pub fn discount_factor(mut self, v: f64) -> Self {
        self.discount_factor = v;
        self
    }

    /// Sets the size of the table.
    pub fn table_size(mut self, n_states: usize, n_actions: usize) -> Self {
        self.n_states = n_states;
        self.n_actions = n_actions;
        self
    }

    /// Sets the explorer.
    pub fn explorer(mut self, v: EpsilonGreedy) -> Self {
        self.explorer = v;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Checks that an agent can be built and run with these settings.
    ///
    /// The table needs at least one state and one action. Rates and
    /// exploration probabilities must lie in `[0, 1]`, and the decay must be
    /// finite and non-negative.
    pub fn validate(&self) -> Result<(), QLearnError> {
        let invalid = |msg: String| Err(QLearnError::InvalidConfig(msg));
        if self.n_states == 0 || self.n_actions == 0 {
            return invalid(format!(
                "table of {} states and {} actions is empty",
                self.n_states, self.n_actions
            ));
        }
        let unit = |v: f64| (0.0..=1.0).contains(&v);
        if !unit(self.learning_rate) {
            return invalid(format!("learning rate {} is not in [0, 1]", self.learning_rate));
        }
        if !unit(self.discount_factor) {
            return invalid(format!(
                "discount factor {} is not in [0, 1]",
                self.discount_factor
            ));
        }
        let explorer = &self.explorer;
        if !unit(explorer.eps) || !unit(explorer.eps_final) {
            return invalid(format!(
                "exploration rates {} and {} are not in [0, 1]",
                explorer.eps, explorer.eps_final
            ));
        }
        if !explorer.decay.is_finite() || explorer.decay < 0.0 {
            return invalid(format!("exploration decay {} is not usable", explorer.decay));
        }
        Ok(())
    }

    /// Loads [`QLearnConfig`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`QLearnConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
