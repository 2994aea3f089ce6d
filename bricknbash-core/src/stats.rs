//! Cumulative win/loss statistics.
use crate::record::{Record, RecordValue};
use log::info;
use serde::{Deserialize, Serialize};

/// Win and loss counters over the lifetime of a [`Sampler`](crate::Sampler).
///
/// The counters only ever grow; they are not reset between episodes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeStats {
    num_wins: usize,
    num_losses: usize,
}

impl EpisodeStats {
    /// Counters starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a won episode.
    pub fn record_win(&mut self) {
        self.num_wins += 1;
    }

    /// Counts a lost episode.
    pub fn record_loss(&mut self) {
        self.num_losses += 1;
    }

    /// Number of won episodes.
    pub fn num_wins(&self) -> usize {
        self.num_wins
    }

    /// Number of lost episodes.
    pub fn num_losses(&self) -> usize {
        self.num_losses
    }

    /// Number of finished episodes.
    pub fn total_games(&self) -> usize {
        self.num_wins + self.num_losses
    }

    /// Percentage of won episodes, `0.0` before the first episode ends.
    pub fn win_percentage(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            n => self.num_wins as f64 / n as f64 * 100.0,
        }
    }

    /// Writes the counters to the log.
    pub fn log_summary(&self) {
        info!("Total games won: {}", self.num_wins);
        info!("Total games lost: {}", self.num_losses);
        info!(
            "Average winning percentage in {} games is {}%",
            self.total_games(),
            self.win_percentage()
        );
    }

    /// The counters as a record.
    pub fn to_record(&self) -> Record {
        Record::from_slice(&[
            ("num_wins", RecordValue::Scalar(self.num_wins as f32)),
            ("num_losses", RecordValue::Scalar(self.num_losses as f32)),
            (
                "win_percentage",
                RecordValue::Scalar(self.win_percentage() as f32),
            ),
        ])
    }
}
