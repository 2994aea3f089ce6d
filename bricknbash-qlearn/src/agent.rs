//! Tabular Q-learning agent.
use crate::{EpsilonGreedy, QLearnConfig, QTable};
use anyhow::Result;
use bricknbash_core::{
    record::{Record, RecordValue},
    Agent, Configurable, Env, Policy, Transition,
};
use log::debug;
use rand::{rngs::SmallRng, SeedableRng};
use std::{marker::PhantomData, path::Path};

/// Q-learning agent over a table indexed by observation and action.
///
/// Observations are turned into table rows with `Into<usize>`, actions into
/// columns with `Into<usize>` and back with `From<usize>`.
///
/// The update bootstraps from the largest value of the row being updated,
/// not from the row of the next observation:
///
/// `Q[s][a] += lr * (r + gamma * max_b Q[s][b] - Q[s][a])`
///
/// Learned tables depend on this, so it is kept as is.
pub struct QLearning<E>
where
    E: Env,
{
    qtable: QTable,
    explorer: EpsilonGreedy,
    learning_rate: f64,
    discount_factor: f64,
    train: bool,
    rng: SmallRng,
    phantom: PhantomData<E>,
}

impl<E> QLearning<E>
where
    E: Env,
    E::Obs: Into<usize>,
    E::Act: From<usize> + Into<usize>,
{
    /// The action values.
    pub fn qtable(&self) -> &QTable {
        &self.qtable
    }

    /// The action values, mutable.
    pub fn qtable_mut(&mut self) -> &mut QTable {
        &mut self.qtable
    }

    /// Current exploration rate, as used by the last decision.
    pub fn exploration_rate(&self) -> f64 {
        self.explorer.eps
    }

    /// Applies the update rule to the entry of `state` and `action`.
    pub fn update(&mut self, state: usize, action: usize, reward: f64) -> f64 {
        let q = self.qtable.get(state, action);
        let max_q = self.qtable.max(state);
        let q_new = q + self.learning_rate * (reward + self.discount_factor * max_q - q);
        self.qtable.set(state, action, q_new);
        q_new
    }
}

impl<E> Policy<E> for QLearning<E>
where
    E: Env,
    E::Obs: Into<usize>,
    E::Act: From<usize> + Into<usize>,
{
    fn sample(&mut self, obs: &E::Obs) -> E::Act {
        let state: usize = obs.clone().into();
        let values = self.qtable.row(state);
        let a = if self.train {
            self.explorer.action(values, &mut self.rng)
        } else {
            self.qtable.argmax(state)
        };
        a.into()
    }
}

impl<E> Configurable<E> for QLearning<E>
where
    E: Env,
    E::Obs: Into<usize>,
    E::Act: From<usize> + Into<usize>,
{
    type Config = QLearnConfig;

    /// Constructs a Q-learning agent with a zero-filled table.
    fn build(config: Self::Config) -> Self {
        Self {
            qtable: QTable::new(config.n_states, config.n_actions),
            explorer: config.explorer,
            learning_rate: config.learning_rate,
            discount_factor: config.discount_factor,
            train: true,
            rng: SmallRng::seed_from_u64(config.seed),
            phantom: PhantomData,
        }
    }
}

impl<E> Agent<E> for QLearning<E>
where
    E: Env,
    E::Obs: Into<usize>,
    E::Act: From<usize> + Into<usize>,
{
    fn train(&mut self) {
        self.train = true;
    }

    fn eval(&mut self) {
        self.train = false;
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn opt_with_record(&mut self, transition: &Transition<E>) -> Record {
        let state: usize = transition.obs.clone().into();
        let action: usize = transition.act.clone().into();
        let q_value = self.update(state, action, transition.reward as f64);

        Record::from_slice(&[
            ("q_value", RecordValue::Scalar(q_value as f32)),
            (
                "exploration_rate",
                RecordValue::Scalar(self.explorer.eps as f32),
            ),
        ])
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        self.qtable.save(path)?;
        debug!("Saved the Q-table to {:?}", path);
        Ok(())
    }

    fn load_params(&mut self, path: &Path) -> Result<()> {
        self.qtable.load(path)?;
        Ok(())
    }
}
