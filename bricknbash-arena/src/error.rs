//! Errors of building and resetting the arena.
use thiserror::Error;

/// Errors of the arena.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Rejection sampling did not find a free spot.
    #[error("could not place {what} without overlap after {attempts} attempts")]
    PlacementExhausted {
        /// What was being placed.
        what: &'static str,
        /// Number of candidates rejected.
        attempts: usize,
    },

    /// The configuration cannot produce a valid arena.
    #[error("invalid arena configuration: {0}")]
    InvalidConfig(String),
}
