//! Core functionalities.
mod agent;
mod env;
mod policy;
mod step;
pub use agent::Agent;
pub use env::Env;
pub use policy::{Configurable, Policy};
use std::fmt::Debug;
pub use step::{Info, Step, Transition};

/// An observation of an environment.
///
/// Observations are produced fresh at every step and handed to a [`Policy`].
/// They are cheap values; nothing in the loop keeps them beyond one transition.
pub trait Obs: Clone + Debug {}

/// An action applied to an environment.
pub trait Act: Clone + Debug {}
