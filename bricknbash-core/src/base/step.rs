//! Environment step.
use super::Env;

/// Additional information to `Obs` and `Act`.
pub trait Info {
    /// Returns `true` if a terminal step ended the episode successfully.
    ///
    /// [`Sampler`](crate::Sampler) counts terminal steps for which this
    /// returns `true` as wins and all other terminal steps as losses.
    fn is_success(&self) -> bool {
        false
    }
}

impl Info for () {}

/// Represents an action, observation and reward tuple `(a_t, o_t+1, r_t)`
/// with some additional information.
///
/// An environment emits [`Step`] object at every interaction steps.
/// [`Sampler`](crate::Sampler) combines it with the previous observation
/// into a [`Transition`].
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation after the action was applied.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if episode is terminated.
    pub is_terminated: bool,

    /// Flag denoting if episode is truncated.
    pub is_truncated: bool,

    /// Information defined by the environment.
    pub info: E::Info,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: E::Obs,
        act: E::Act,
        reward: f32,
        is_terminated: bool,
        is_truncated: bool,
        info: E::Info,
    ) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            is_truncated,
            info,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}

/// A transition `(o_t, a_t, r_t, o_t+1)` handed to [`Agent::opt`].
///
/// [`Agent::opt`]: crate::Agent::opt
pub struct Transition<E: Env> {
    /// Observation the action was chosen from.
    pub obs: E::Obs,

    /// Action.
    pub act: E::Act,

    /// Reward.
    pub reward: f32,

    /// Observation after the action was applied.
    pub next_obs: E::Obs,

    /// Flag denoting if the transition ended the episode.
    pub is_terminated: bool,
}

impl<E: Env> Transition<E> {
    /// Builds a transition from the observation preceding `step`.
    pub fn from_step(obs: E::Obs, step: &Step<E>) -> Self {
        Self {
            obs,
            act: step.act.clone(),
            reward: step.reward,
            next_obs: step.obs.clone(),
            is_terminated: step.is_terminated,
        }
    }
}
