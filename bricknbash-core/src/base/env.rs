//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// An environment owns its state exclusively. The only way to change it is
/// through [`Env::step`] and the reset methods, which keeps a single writer
/// for everything the loop touches.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    ///
    /// Two environments built from the same configuration and seed must
    /// produce identical episodes for identical action sequences.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performs an environment step.
    ///
    /// When the returned step is terminal, the caller must reset the
    /// environment before stepping again.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Returns the observation of the current state without changing it.
    fn observe(&self) -> Self::Obs;

    /// Starts a new episode and returns its first observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Starts a new episode determined by the given index.
    ///
    /// The index is used in an arbitrary way. For example, it can be used as a
    /// random seed, which makes evaluation runs reproducible. This method is
    /// called by [`DefaultEvaluator`].
    ///
    /// [`DefaultEvaluator`]: crate::DefaultEvaluator
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs>;
}
