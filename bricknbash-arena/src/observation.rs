//! Discrete observation of the arena and its state index.
use crate::geometry::Rect;
use bricknbash_core::Obs;
use serde::{Deserialize, Serialize};

/// Number of binary features in an [`Observation`].
pub const NUM_FEATURES: usize = 6;

/// Number of state indices; [`Observation::hash`] is always below this.
pub const STATE_SPACE: usize = 1000;

const GOAL_LEFT: usize = 0;
const GOAL_ABOVE: usize = 1;
const OBSTACLE_LEFT: usize = 2;
const OBSTACLE_RIGHT: usize = 3;
const OBSTACLE_ABOVE: usize = 4;
const OBSTACLE_BELOW: usize = 5;

/// Six binary features, in this order:
///
/// 0. the goal center is left of the ball center,
/// 1. the goal center is above the ball center (smaller y),
/// 2. an obstacle is within the proximity band on the left of the ball,
/// 3. ... on the right,
/// 4. ... above,
/// 5. ... below.
///
/// The order is part of the state index and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Observation([u8; NUM_FEATURES]);

impl Observation {
    /// An observation from raw features; any non-zero value counts as set.
    pub fn from_bits(bits: [u8; NUM_FEATURES]) -> Self {
        Self(bits.map(|b| u8::from(b != 0)))
    }

    /// Observes `ball` relative to `goal` and `obstacles`.
    pub fn encode(ball: &Rect, goal: &Rect, obstacles: &[Rect], band: i32) -> Self {
        let mut bits = [0u8; NUM_FEATURES];
        let (ball_x, ball_y) = ball.center();
        let (goal_x, goal_y) = goal.center();
        bits[GOAL_LEFT] = u8::from(goal_x < ball_x);
        bits[GOAL_ABOVE] = u8::from(goal_y < ball_y);

        for o in obstacles {
            if ball.intersects_raw(o.x, o.y, o.width + band, o.height) {
                bits[OBSTACLE_LEFT] = 1;
            }
            if ball.intersects_raw(o.x - band, o.y, o.width, o.height) {
                bits[OBSTACLE_RIGHT] = 1;
            }
            if ball.intersects_raw(o.x, o.y, o.width, o.height + band) {
                bits[OBSTACLE_ABOVE] = 1;
            }
            if ball.intersects_raw(o.x, o.y - band, o.width, o.height) {
                bits[OBSTACLE_BELOW] = 1;
            }
        }
        Self(bits)
    }

    pub fn features(&self) -> &[u8; NUM_FEATURES] {
        &self.0
    }

    pub fn goal_is_left(&self) -> bool {
        self.0[GOAL_LEFT] == 1
    }

    pub fn goal_is_above(&self) -> bool {
        self.0[GOAL_ABOVE] == 1
    }

    /// State index of the observation.
    ///
    /// The features are read as a binary number with the first feature as
    /// the least significant bit, reduced modulo [`STATE_SPACE`].
    pub fn hash(&self) -> usize {
        let raw: usize = self
            .0
            .iter()
            .enumerate()
            .map(|(i, &b)| b as usize * (1 << i))
            .sum();
        raw % STATE_SPACE
    }
}

impl Obs for Observation {}

impl From<Observation> for usize {
    fn from(obs: Observation) -> Self {
        obs.hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_observations() -> impl Iterator<Item = Observation> {
        (0..64u8).map(|n| {
            let mut bits = [0u8; NUM_FEATURES];
            for (i, b) in bits.iter_mut().enumerate() {
                *b = (n >> i) & 1;
            }
            Observation::from_bits(bits)
        })
    }

    #[test]
    fn test_hash_is_injective_and_bounded() {
        let hashes: HashSet<usize> = all_observations().map(|o| o.hash()).collect();
        assert_eq!(hashes.len(), 64);
        assert!(hashes.iter().all(|&h| h < STATE_SPACE));
    }

    #[test]
    fn test_first_feature_is_least_significant() {
        assert_eq!(Observation::from_bits([1, 0, 0, 0, 0, 0]).hash(), 1);
        assert_eq!(Observation::from_bits([0, 0, 0, 0, 0, 1]).hash(), 32);
        assert_eq!(Observation::from_bits([1, 1, 0, 1, 0, 0]).hash(), 11);
        assert_eq!(Observation::from_bits([1; 6]).hash(), 63);
        assert_eq!(usize::from(Observation::from_bits([0, 1, 0, 0, 0, 0])), 2);
    }

    #[test]
    fn test_goal_features() {
        let ball = Rect::new(100, 100, 20, 20);
        let obs = Observation::encode(&ball, &Rect::new(0, 0, 40, 40), &[], 10);
        assert!(obs.goal_is_left());
        assert!(obs.goal_is_above());

        let obs = Observation::encode(&ball, &Rect::new(300, 300, 40, 40), &[], 10);
        assert_eq!(obs.features(), &[0, 0, 0, 0, 0, 0]);

        // equal centers count as neither left nor above
        let obs = Observation::encode(&ball, &Rect::new(90, 90, 40, 40), &[], 10);
        assert!(!obs.goal_is_left());
        assert!(!obs.goal_is_above());
    }

    #[test]
    fn test_obstacle_proximity_features() {
        let goal = Rect::new(700, 500, 40, 40);
        let obstacle = Rect::new(100, 100, 50, 50);

        // right next to the obstacle's right edge
        let ball = Rect::new(155, 110, 20, 20);
        let obs = Observation::encode(&ball, &goal, &[obstacle], 10);
        assert_eq!(&obs.features()[2..], &[1, 0, 0, 0]);

        // right next to its left edge
        let ball = Rect::new(75, 110, 20, 20);
        let obs = Observation::encode(&ball, &goal, &[obstacle], 10);
        assert_eq!(&obs.features()[2..], &[0, 1, 0, 0]);

        // just below
        let ball = Rect::new(110, 155, 20, 20);
        let obs = Observation::encode(&ball, &goal, &[obstacle], 10);
        assert_eq!(&obs.features()[2..], &[0, 0, 1, 0]);

        // just above
        let ball = Rect::new(110, 75, 20, 20);
        let obs = Observation::encode(&ball, &goal, &[obstacle], 10);
        assert_eq!(&obs.features()[2..], &[0, 0, 0, 1]);

        // outside the band
        let ball = Rect::new(170, 110, 20, 20);
        let obs = Observation::encode(&ball, &goal, &[obstacle], 10);
        assert_eq!(&obs.features()[2..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_proximity_is_or_over_obstacles() {
        let goal = Rect::new(700, 500, 40, 40);
        let ball = Rect::new(155, 110, 20, 20);
        let near_left = Rect::new(100, 100, 50, 50);
        let near_right = Rect::new(180, 100, 50, 50);
        let far = Rect::new(400, 400, 50, 50);
        let obs = Observation::encode(&ball, &goal, &[far, near_left, near_right], 10);
        assert_eq!(&obs.features()[2..], &[1, 1, 0, 0]);
    }
}
