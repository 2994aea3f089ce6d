//! The three ways of running the arena.
use crate::BrickNBashConfig;
use anyhow::Result;
use bricknbash_arena::{ArenaEnv, Direction, STATE_SPACE};
use bricknbash_core::{
    record::{AggregateRecorder, Record},
    Agent, Configurable, DefaultEvaluator, Env as _, EpisodeStats, Evaluator as _, Info as _,
    Trainer, TrainerConfig,
};
use bricknbash_qlearn::{QLearnConfig, QLearnError, QLearning};
use clap::ValueEnum;
use log::{info, warn};
use std::{
    io::{BufRead, Write},
    path::Path,
};

/// Step cap of an evaluation episode; a greedy policy can bounce on a wall forever.
const EVAL_MAX_STEPS: usize = 1000;

/// Run mode of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Learn without delay, saving the table after every step.
    Train,

    /// Resume from the saved table and keep learning at a fixed tick, without saving.
    Test,
}

impl Mode {
    /// Overrides the pacing and persistence settings fixed by the mode.
    pub fn trainer_config(self, config: TrainerConfig) -> TrainerConfig {
        match self {
            Mode::Train => config.save_interval(1).tick_millis(0),
            Mode::Test => config.save_interval(0).tick_millis(100),
        }
    }
}

/// Builds an agent for the arena after checking `config`.
///
/// Every observation index must have a row, and there is one column per
/// [`Direction`].
pub fn build_agent(config: &QLearnConfig) -> Result<QLearning<ArenaEnv>, QLearnError> {
    config.validate()?;
    if config.n_states < STATE_SPACE {
        return Err(QLearnError::InvalidConfig(format!(
            "{} states do not cover the {} observation indices",
            config.n_states, STATE_SPACE
        )));
    }
    if config.n_actions != Direction::ALL.len() {
        return Err(QLearnError::InvalidConfig(format!(
            "{} actions given, the arena has {} directions",
            config.n_actions,
            Direction::ALL.len()
        )));
    }
    Ok(QLearning::build(config.clone()))
}

/// Trains a fresh agent, persisting it as configured in `config.trainer`.
pub fn train(
    config: &BrickNBashConfig,
    seed: i64,
    recorder: &mut dyn AggregateRecorder,
) -> Result<EpisodeStats> {
    let mut agent = build_agent(&config.qlearn)?;
    let env = ArenaEnv::build(&config.arena, seed)?;
    let mut trainer = Trainer::build(config.trainer.clone());
    trainer.train(env, &mut agent, recorder)
}

/// Runs an agent resumed from `model_path`, then optionally reports greedy episodes.
///
/// A table that cannot be read is reported and the agent starts from zeros;
/// rows read before a malformed value are kept.
pub fn test(
    config: &BrickNBashConfig,
    model_path: &Path,
    seed: i64,
    n_eval_episodes: usize,
    recorder: &mut dyn AggregateRecorder,
) -> Result<(EpisodeStats, Option<Record>)> {
    let mut agent = build_agent(&config.qlearn)?;
    if let Err(e) = agent.load_params(model_path) {
        warn!("Failed to load the Q-table from {:?}: {}", model_path, e);
    }

    let env = ArenaEnv::build(&config.arena, seed)?;
    let mut trainer = Trainer::build(config.trainer.clone());
    let stats = trainer.train(env, &mut agent, recorder)?;

    if n_eval_episodes == 0 {
        return Ok((stats, None));
    }

    agent.eval();
    let env = ArenaEnv::build(&config.arena, seed)?;
    let record = DefaultEvaluator::new(env, n_eval_episodes)?
        .max_steps_per_episode(EVAL_MAX_STEPS)
        .evaluate(&mut agent)?;
    for (k, v) in record.iter() {
        info!("{}: {:?}", k, v);
    }
    Ok((stats, Some(record)))
}

/// Steps `env` with the direction keys read from `input`.
///
/// Each recognised key is one step; other characters are ignored. A line
/// starting with `q` ends the session. Finished episodes are counted and
/// the arena is reset.
pub fn play<R: BufRead, W: Write>(
    env: &mut ArenaEnv,
    input: R,
    mut output: W,
) -> Result<EpisodeStats> {
    let mut stats = EpisodeStats::new();
    info!("{}", env.snapshot());

    for line in input.lines() {
        let line = line?;
        if line.trim_start().starts_with('q') {
            break;
        }
        for dir in line.chars().filter_map(Direction::from_key) {
            let (step, _) = env.step(&dir);
            writeln!(
                output,
                "{:?}: reward {}, {}",
                dir,
                step.reward,
                step.info.outcome.as_str()
            )?;

            if step.is_done() {
                if step.info.is_success() {
                    stats.record_win();
                } else {
                    stats.record_loss();
                }
                stats.log_summary();
                env.reset()?;
                info!("{}", env.snapshot());
            }
        }
    }

    Ok(stats)
}
