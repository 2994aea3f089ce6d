//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    Agent, Env, Info,
};
use anyhow::Result;
use log::info;

/// Runs a fixed number of episodes and reports the mean return and win rate.
///
/// Episode `ix` starts from [`Env::reset_with_index`]`(ix)`, so two
/// evaluations of the same agent see the same layouts. An episode that does
/// not end within `max_steps_per_episode` steps counts as neither won nor lost.
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// Step cap of an episode, `None` for no cap.
    max_steps_per_episode: Option<usize>,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env, A: Agent<E>> Evaluator<E, A> for DefaultEvaluator<E> {
    fn evaluate(&mut self, agent: &mut A) -> Result<Record> {
        let mut r_total = 0f32;
        let mut n_wins = 0usize;

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;
            let mut n_steps = 0usize;

            loop {
                let act = agent.sample(&prev_obs);
                let (step, _) = self.env.step(&act);
                r_total += step.reward;
                n_steps += 1;
                if step.is_done() {
                    if step.is_terminated && step.info.is_success() {
                        n_wins += 1;
                    }
                    break;
                }
                if self.max_steps_per_episode.map_or(false, |m| n_steps >= m) {
                    break;
                }
                prev_obs = step.obs;
            }
            info!("Evaluation episode {} finished after {} steps", ix, n_steps);
        }

        let n = self.n_episodes.max(1) as f32;
        Ok(Record::from_slice(&[
            ("Episode return", RecordValue::Scalar(r_total / n)),
            ("Win rate", RecordValue::Scalar(n_wins as f32 / n)),
        ]))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    pub fn new(env: E, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            max_steps_per_episode: None,
            env,
        })
    }

    /// Sets the step cap of an episode.
    pub fn max_steps_per_episode(mut self, v: usize) -> Self {
        self.max_steps_per_episode = Some(v);
        self
    }
}
