//! Configuration of [`ArenaEnv`](crate::ArenaEnv).
use crate::ArenaError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Reward terms of a step.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct RewardConfig {
    /// Subtracted when the moved ball leaves the arena.
    pub out_of_bounds_penalty: i32,

    /// Added when a move gets the ball closer to the goal, subtracted otherwise.
    pub progress: i32,

    /// Added per nearby obstacle the move gets away from, subtracted otherwise.
    pub obstacle_clearance: i32,

    /// Reward of a step that reaches the goal.
    pub win: i32,

    /// Reward of a step that hits an obstacle.
    pub loss: i32,

    /// Radius, between centers, in which obstacles count as nearby.
    pub nearest_radius: f64,

    /// Maximal number of nearby obstacles considered.
    pub nearest_count: usize,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            out_of_bounds_penalty: 5,
            progress: 1,
            obstacle_clearance: 10,
            win: 20,
            loss: -20,
            nearest_radius: 10.0,
            nearest_count: 2,
        }
    }
}

/// Configuration of [`ArenaEnv`](crate::ArenaEnv).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    /// Width of the arena.
    pub width: i32,

    /// Height of the arena.
    pub height: i32,

    /// Number of obstacles.
    pub num_obstacles: usize,

    /// Smallest obstacle side, inclusive.
    pub obstacle_min_size: i32,

    /// Largest obstacle side, exclusive.
    pub obstacle_max_size: i32,

    /// Side of the ball.
    pub ball_size: i32,

    /// Distance the ball moves in one step.
    pub ball_speed: i32,

    /// Side of the goal as a multiple of the ball side.
    pub goal_scale: i32,

    /// Width of the band around obstacles that sets the proximity features.
    pub proximity_band: i32,

    /// Candidates tried for each placement before giving up.
    pub max_placement_attempts: usize,

    /// Reward terms.
    pub reward: RewardConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            num_obstacles: 5,
            obstacle_min_size: 50,
            obstacle_max_size: 150,
            ball_size: 20,
            ball_speed: 5,
            goal_scale: 2,
            proximity_band: 10,
            max_placement_attempts: 10_000,
            reward: RewardConfig::default(),
        }
    }
}

impl ArenaConfig {
    /// Sets the size of the arena.
    pub fn arena_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the number of obstacles.
    pub fn num_obstacles(mut self, v: usize) -> Self {
        self.num_obstacles = v;
        self
    }

    /// Sets the range `[min, max)` of obstacle sides.
    pub fn obstacle_size(mut self, min: i32, max: i32) -> Self {
        self.obstacle_min_size = min;
        self.obstacle_max_size = max;
        self
    }

    /// Sets the side of the ball.
    pub fn ball_size(mut self, v: i32) -> Self {
        self.ball_size = v;
        self
    }

    /// Sets the distance of a step.
    pub fn ball_speed(mut self, v: i32) -> Self {
        self.ball_speed = v;
        self
    }

    /// Sets the number of candidates tried per placement.
    pub fn max_placement_attempts(mut self, v: usize) -> Self {
        self.max_placement_attempts = v;
        self
    }

    /// Sets the reward terms.
    pub fn reward(mut self, v: RewardConfig) -> Self {
        self.reward = v;
        self
    }

    /// Side of the goal.
    pub fn goal_size(&self) -> i32 {
        self.ball_size * self.goal_scale
    }

    /// Checks that random placement can produce in-bounds rectangles.
    pub fn validate(&self) -> Result<(), ArenaError> {
        let invalid = |msg: String| Err(ArenaError::InvalidConfig(msg));
        if self.width <= 0 || self.height <= 0 {
            return invalid(format!("arena {}x{} is empty", self.width, self.height));
        }
        if self.obstacle_min_size <= 0 || self.obstacle_min_size >= self.obstacle_max_size {
            return invalid(format!(
                "obstacle sizes [{}, {}) are empty",
                self.obstacle_min_size, self.obstacle_max_size
            ));
        }
        if self.obstacle_max_size >= self.width.min(self.height) {
            return invalid(format!(
                "obstacles up to {} do not fit in {}x{}",
                self.obstacle_max_size, self.width, self.height
            ));
        }
        if self.ball_size <= 0 || self.goal_scale <= 0 {
            return invalid("ball and goal must have a positive size".to_string());
        }
        if self.goal_size() >= self.width.min(self.height) {
            return invalid(format!(
                "goal of size {} does not fit in {}x{}",
                self.goal_size(),
                self.width,
                self.height
            ));
        }
        if self.ball_speed <= 0 {
            return invalid(format!("ball speed {} is not positive", self.ball_speed));
        }
        if self.max_placement_attempts == 0 {
            return invalid("at least one placement attempt is needed".to_string());
        }
        Ok(())
    }

    /// Constructs [`ArenaConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`ArenaConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
