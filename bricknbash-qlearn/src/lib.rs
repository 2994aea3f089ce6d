//! Tabular Q-learning agent.
mod agent;
mod config;
mod error;
mod explorer;
mod qtable;

pub use agent::QLearning;
pub use config::QLearnConfig;
pub use error::{QLearnError, QTableError};
pub use explorer::EpsilonGreedy;
pub use qtable::QTable;
