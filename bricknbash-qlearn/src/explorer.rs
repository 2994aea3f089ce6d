//! Exploration strategy of the Q-learning agent.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Epsilon-greedy explorer with a linearly decaying, floored epsilon.
///
/// The rate is decremented before each read, so with the default settings
/// the first action is taken with epsilon `0.49`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct EpsilonGreedy {
    /// Current exploration rate.
    pub eps: f64,

    /// Amount subtracted from `eps` per decision.
    pub decay: f64,

    /// Lower bound of the exploration rate.
    pub eps_final: f64,
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self {
            eps: 0.5,
            decay: 0.01,
            eps_final: 0.1,
        }
    }
}

impl EpsilonGreedy {
    /// Constructs an explorer.
    pub fn new(eps: f64, decay: f64, eps_final: f64) -> Self {
        Self {
            eps,
            decay,
            eps_final,
        }
    }

    /// Decays the exploration rate and returns the value to use.
    pub fn next_eps(&mut self) -> f64 {
        self.eps = (self.eps - self.decay).max(self.eps_final);
        self.eps
    }

    /// Takes an action based on the action values of a state.
    ///
    /// Returns a uniformly random action with probability epsilon, the
    /// greedy one otherwise. Ties go to the lowest action index.
    pub fn action(&mut self, values: &[f64], rng: &mut impl Rng) -> usize {
        let eps = self.next_eps();
        if rng.gen::<f64>() < eps {
            rng.gen_range(0..values.len())
        } else {
            greedy(values)
        }
    }
}

/// Index of the largest value, the lowest one on ties.
pub(crate) fn greedy(values: &[f64]) -> usize {
    let mut best = 0;
    for (a, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = a;
        }
    }
    best
}
