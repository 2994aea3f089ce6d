//! Train [`Agent`].
mod config;
mod sampler;
use crate::{
    record::{AggregateRecorder, Record},
    Agent, Env, EpisodeStats,
};
use anyhow::Result;
pub use config::TrainerConfig;
use log::{debug, info, warn};
pub use sampler::Sampler;
use std::{
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Manages training loop and related objects.
///
/// # Training loop
///
/// 0. Given an environment implementing [`Env`], an agent implementing [`Agent`]
///    and a recorder implementing [`AggregateRecorder`].
/// 1. Wrap the environment in a [`Sampler`] and reset the step counter
///    `env_steps = 0`.
/// 2. Do an environment step with [`Sampler::sample_and_update`]: observe,
///    choose an action, apply it, and update the agent with the transition.
///    On a terminal step the sampler logs the cumulative win/loss counts and
///    resets the environment.
/// 3. `env_steps += 1`
/// 4. If `save_interval > 0` and `env_steps % save_interval == 0`, save the
///    agent's parameters to `model_path`. A failed save is logged and
///    training goes on.
/// 5. If `env_steps % flush_record_interval == 0`, flush the recorder.
/// 6. If `env_steps == max_steps` (and `max_steps > 0`), finish the loop.
/// 7. If `tick > 0`, sleep for `tick` milliseconds.
/// 8. Back to step 2.
///
/// After the loop, the parameters are saved once more when persistence is
/// enabled, so the last steps are never lost on a clean shutdown.
///
/// # Interaction of objects
///
/// ```mermaid
/// graph LR
///     A[Agent]-->|Env::Act|B[Env]
///     B -->|Env::Obs|A
///     B -->|"Step&lt;E: Env&gt;"|C[Sampler]
///     C -->|"Transition&lt;E: Env&gt;"|A
/// ```
///
/// Every step runs to completion before the next one starts; the agent and
/// the environment are never touched by anything else while the loop runs.
pub struct Trainer {
    /// The maximal number of environment steps, `0` for no limit.
    max_steps: usize,

    /// Interval of saving the agent in environment steps, `0` to disable.
    save_interval: usize,

    /// Delay between two steps.
    tick: Duration,

    /// Interval of flushing records in environment steps.
    flush_records_interval: usize,

    /// Where to save the agent.
    model_path: Option<PathBuf>,
}

impl Trainer {
    /// Constructs a trainer.
    pub fn build(config: TrainerConfig) -> Self {
        Self {
            max_steps: config.max_steps,
            save_interval: config.save_interval,
            tick: Duration::from_millis(config.tick_millis),
            flush_records_interval: config.flush_record_interval.max(1),
            model_path: config.model_path.map(PathBuf::from),
        }
    }

    fn save_model<E: Env, A: Agent<E>>(agent: &A, path: &Path) {
        match agent.save_params(path) {
            Ok(()) => debug!("Saved the model in {:?}.", path),
            Err(e) => warn!("Failed to save the model in {:?}: {}", path, e),
        }
    }

    fn is_persistent(&self) -> bool {
        self.save_interval > 0 && self.model_path.is_some()
    }

    /// Performs a training step.
    ///
    /// The second return value in the tuple is `true` if the step ended an
    /// episode.
    pub fn train_step<E, A>(
        &mut self,
        agent: &mut A,
        sampler: &mut Sampler<E>,
        env_steps: &mut usize,
    ) -> Result<(Record, bool)>
    where
        E: Env,
        A: Agent<E>,
    {
        let (record, is_done) = sampler.sample_and_update(agent)?;
        *env_steps += 1;

        if self.is_persistent() && *env_steps % self.save_interval == 0 {
            if let Some(path) = self.model_path.as_deref() {
                Self::save_model(agent, path);
            }
        }

        Ok((record, is_done))
    }

    /// Train the agent.
    ///
    /// Returns the win/loss counts accumulated during the run.
    pub fn train<E, A>(
        &mut self,
        env: E,
        agent: &mut A,
        recorder: &mut dyn AggregateRecorder,
    ) -> Result<EpisodeStats>
    where
        E: Env,
        A: Agent<E>,
    {
        let mut sampler = Sampler::new(env);
        let mut env_steps: usize = 0;
        agent.train();

        loop {
            let (record, _) = self.train_step(agent, &mut sampler, &mut env_steps)?;

            if !record.is_empty() {
                recorder.store(record);
            }

            if env_steps % self.flush_records_interval == 0 {
                recorder.flush(env_steps as _);
            }

            if self.max_steps > 0 && env_steps >= self.max_steps {
                break;
            }

            if !self.tick.is_zero() {
                thread::sleep(self.tick);
            }
        }

        if self.is_persistent() {
            if let Some(path) = self.model_path.as_deref() {
                Self::save_model(agent, path);
            }
        }
        recorder.flush(env_steps as _);
        info!("Finished training after {} steps", env_steps);

        Ok(*sampler.stats())
    }
}
