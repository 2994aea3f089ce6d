//! Obstacle arena environment.
//!
//! The arena holds a fixed number of axis-aligned rectangular obstacles, a
//! goal and a ball. Each step translates the ball by a fixed distance in one
//! of four [`Direction`]s and resolves to an [`Outcome`]:
//!
//! * [`Outcome::Won`] if the moved ball touches the goal,
//! * [`Outcome::Lost`] if it touches an obstacle,
//! * [`Outcome::Moved`] otherwise, the only case the ball position changes.
//!
//! Leaving the arena is not terminal; it only costs reward.
mod config;
mod direction;
mod env;
mod error;
pub mod geometry;
pub mod observation;
pub mod reward;
mod snapshot;
pub mod world;

pub use config::{ArenaConfig, RewardConfig};
pub use direction::Direction;
pub use env::{ArenaEnv, ArenaInfo};
pub use error::ArenaError;
pub use geometry::Rect;
pub use observation::{Observation, STATE_SPACE};
pub use snapshot::ArenaSnapshot;
pub use world::{Outcome, World};
