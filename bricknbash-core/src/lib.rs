#![warn(missing_docs)]
//! Core traits and the training loop of BrickNBash.
//!
//! The crate knows nothing about the arena or about Q-tables. It defines the
//! seams between an environment ([`Env`]), a learner ([`Agent`]) and the loop
//! that drives them ([`Trainer`]), in the same way for every environment and
//! agent implementation.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Agent, Configurable, Env, Info, Obs, Policy, Step, Transition};

mod stats;
pub use stats::EpisodeStats;

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};

mod trainer;
pub use trainer::{Sampler, Trainer, TrainerConfig};
