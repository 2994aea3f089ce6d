//! Agent.
use super::{Env, Policy, Transition};
use crate::record::Record;
use anyhow::Result;
use std::path::Path;

/// Represents a trainable policy on an environment.
///
/// Agents learn online: every transition produced by the loop is handed to
/// [`Agent::opt`] right after it happens, before the next action is chosen.
pub trait Agent<E: Env>: Policy<E> {
    /// Set the policy to training mode.
    fn train(&mut self);

    /// Set the policy to evaluation mode.
    fn eval(&mut self);

    /// Return if it is in training mode.
    fn is_train(&self) -> bool;

    /// Performs an optimization step with a single transition.
    fn opt(&mut self, transition: &Transition<E>) {
        let _ = self.opt_with_record(transition);
    }

    /// Performs an optimization step and returns some information.
    fn opt_with_record(&mut self, transition: &Transition<E>) -> Record;

    /// Save the parameters of the agent to the given path.
    fn save_params(&self, path: &Path) -> Result<()>;

    /// Load the parameters of the agent from the given path.
    fn load_params(&mut self, path: &Path) -> Result<()>;
}
