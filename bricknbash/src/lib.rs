//! Training, testing and manual play on the obstacle arena.
mod app;
mod config;

pub use app::{build_agent, play, test, train, Mode};
pub use config::BrickNBashConfig;
