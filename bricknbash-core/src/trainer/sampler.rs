//! Interaction of an agent with an environment, one step at a time.
use crate::{
    record::{Record, RecordValue},
    Agent, Env, EpisodeStats, Info, Transition,
};
use anyhow::Result;

/// Drives an environment with an agent and keeps episode statistics.
///
/// A step is observe → choose action → step environment → update agent.
/// When the step ends the episode, the cumulative win/loss counts are logged
/// and the environment is reset.
pub struct Sampler<E: Env> {
    /// The environment being sampled from.
    env: E,

    /// Win/loss counts, cumulative over the lifetime of the sampler.
    stats: EpisodeStats,

    /// Sum of rewards in the current episode.
    episode_return: f32,

    /// Number of steps in the current episode.
    episode_length: usize,
}

impl<E: Env> Sampler<E> {
    /// Creates a new sampler with the given environment.
    pub fn new(env: E) -> Self {
        Self {
            env,
            stats: EpisodeStats::new(),
            episode_return: 0.0,
            episode_length: 0,
        }
    }

    /// The environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Win/loss counts so far.
    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// Performs one environment step and hands the transition to the agent.
    ///
    /// The agent is updated only when it is in training mode. The returned
    /// flag is `true` if the step ended the episode; the environment has
    /// already been reset in that case.
    pub fn sample_and_update<A: Agent<E>>(&mut self, agent: &mut A) -> Result<(Record, bool)> {
        let obs = self.env.observe();
        let act = agent.sample(&obs);
        let (step, mut record) = self.env.step(&act);
        let transition = Transition::from_step(obs, &step);

        if agent.is_train() {
            record.merge_inplace(agent.opt_with_record(&transition));
        }
        record.insert("reward", RecordValue::Scalar(step.reward));

        self.episode_return += step.reward;
        self.episode_length += 1;

        let is_done = step.is_done();
        if is_done {
            if step.is_terminated && step.info.is_success() {
                self.stats.record_win();
            } else {
                self.stats.record_loss();
            }
            self.stats.log_summary();

            record.insert("episode_return", RecordValue::Scalar(self.episode_return));
            record.insert(
                "episode_length",
                RecordValue::Scalar(self.episode_length as f32),
            );
            record.merge_inplace(self.stats.to_record());
            self.episode_return = 0.0;
            self.episode_length = 0;

            self.env.reset()?;
        }

        Ok((record, is_done))
    }
}
