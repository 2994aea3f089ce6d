//! Placement of obstacles, goal and ball, and movement of the ball.
use crate::{
    geometry::{intersects_any, Rect},
    ArenaConfig, ArenaError, Direction,
};
use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of applying a move to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The ball moved; the episode goes on.
    Moved,

    /// The ball reached the goal.
    Won,

    /// The ball hit an obstacle.
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Moved)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Moved => "moved",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// Draws candidates until one is accepted, at most `max_attempts` times.
fn sample_until<R, F, P>(
    rng: &mut R,
    what: &'static str,
    max_attempts: usize,
    mut candidate: F,
    is_free: P,
) -> Result<Rect, ArenaError>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Rect,
    P: Fn(&Rect) -> bool,
{
    for attempt in 0..max_attempts {
        let rect = candidate(rng);
        if is_free(&rect) {
            if attempt > 0 {
                trace!("Placed {} after {} rejected candidates", what, attempt);
            }
            return Ok(rect);
        }
    }
    Err(ArenaError::PlacementExhausted {
        what,
        attempts: max_attempts,
    })
}

/// Square of side `size` at a uniformly random position inside the arena.
fn random_square<R: Rng + ?Sized>(rng: &mut R, config: &ArenaConfig, size: i32) -> Rect {
    let x = rng.gen_range(0..config.width - size);
    let y = rng.gen_range(0..config.height - size);
    Rect::new(x, y, size, size)
}

/// Generates `config.num_obstacles` pairwise non-overlapping obstacles.
///
/// Sides are uniform in `[obstacle_min_size, obstacle_max_size)` and every
/// obstacle lies fully inside the arena.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &ArenaConfig,
) -> Result<Vec<Rect>, ArenaError> {
    let mut obstacles: Vec<Rect> = Vec::with_capacity(config.num_obstacles);
    for _ in 0..config.num_obstacles {
        let obstacle = sample_until(
            rng,
            "obstacle",
            config.max_placement_attempts,
            |rng| {
                let w = rng.gen_range(config.obstacle_min_size..config.obstacle_max_size);
                let h = rng.gen_range(config.obstacle_min_size..config.obstacle_max_size);
                let x = rng.gen_range(0..config.width - w);
                let y = rng.gen_range(0..config.height - h);
                Rect::new(x, y, w, h)
            },
            |rect| !intersects_any(rect, &obstacles),
        )?;
        obstacles.push(obstacle);
    }
    Ok(obstacles)
}

/// Places the goal where it overlaps no obstacle.
pub fn place_goal<R: Rng + ?Sized>(
    rng: &mut R,
    config: &ArenaConfig,
    obstacles: &[Rect],
) -> Result<Rect, ArenaError> {
    let size = config.goal_size();
    sample_until(
        rng,
        "goal",
        config.max_placement_attempts,
        |rng| random_square(rng, config, size),
        |rect| !intersects_any(rect, obstacles),
    )
}

/// Places the ball where it overlaps neither an obstacle nor the goal.
pub fn place_ball<R: Rng + ?Sized>(
    rng: &mut R,
    config: &ArenaConfig,
    obstacles: &[Rect],
    goal: &Rect,
) -> Result<Rect, ArenaError> {
    sample_until(
        rng,
        "ball",
        config.max_placement_attempts,
        |rng| random_square(rng, config, config.ball_size),
        |rect| !intersects_any(rect, obstacles) && !rect.intersects(goal),
    )
}

/// Moves `ball` by `speed` in `direction`.
///
/// Returns the moved ball and whether it left the `width` x `height` arena.
/// A ball outside the arena is still returned.
pub fn step(ball: &Rect, direction: Direction, speed: i32, width: i32, height: i32) -> (Rect, bool) {
    let (dx, dy) = direction.delta(speed);
    let candidate = ball.translated(dx, dy);
    let out_of_bounds = !candidate.is_inside(width, height);
    (candidate, out_of_bounds)
}

/// Classifies a moved ball. The goal takes precedence over obstacles.
pub fn resolve(candidate: &Rect, goal: &Rect, obstacles: &[Rect]) -> Outcome {
    if candidate.intersects(goal) {
        Outcome::Won
    } else if intersects_any(candidate, obstacles) {
        Outcome::Lost
    } else {
        Outcome::Moved
    }
}

/// Obstacles, goal and ball of one episode.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    width: i32,
    height: i32,
    obstacles: Vec<Rect>,
    goal: Rect,
    ball: Rect,
}

impl World {
    /// Generates obstacles, then the goal, then the ball.
    pub fn generate<R: Rng + ?Sized>(config: &ArenaConfig, rng: &mut R) -> Result<Self, ArenaError> {
        let obstacles = generate(rng, config)?;
        let goal = place_goal(rng, config, &obstacles)?;
        let ball = place_ball(rng, config, &obstacles, &goal)?;
        Ok(Self {
            width: config.width,
            height: config.height,
            obstacles,
            goal,
            ball,
        })
    }

    /// A world with a given layout.
    pub fn from_parts(width: i32, height: i32, obstacles: Vec<Rect>, goal: Rect, ball: Rect) -> Self {
        Self {
            width,
            height,
            obstacles,
            goal,
            ball,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    pub fn goal(&self) -> &Rect {
        &self.goal
    }

    pub fn ball(&self) -> &Rect {
        &self.ball
    }

    /// The ball moved by `speed` in `direction`, and whether it left the arena.
    pub fn try_move(&self, direction: Direction, speed: i32) -> (Rect, bool) {
        step(&self.ball, direction, speed, self.width, self.height)
    }

    /// Resolves a moved ball; the ball takes the new position only on [`Outcome::Moved`].
    pub fn apply(&mut self, candidate: Rect) -> Outcome {
        let outcome = resolve(&candidate, &self.goal, &self.obstacles);
        if outcome == Outcome::Moved {
            self.ball = candidate;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_generated_layout_has_no_overlap() {
        let config = ArenaConfig::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let world = World::generate(&config, &mut rng).unwrap();
            let obstacles = world.obstacles();
            assert_eq!(obstacles.len(), config.num_obstacles);
            for (i, a) in obstacles.iter().enumerate() {
                assert!(a.is_inside(config.width, config.height));
                assert!(a.width >= config.obstacle_min_size && a.width < config.obstacle_max_size);
                for b in obstacles.iter().skip(i + 1) {
                    assert!(!a.intersects(b));
                }
                assert!(!a.intersects(world.goal()));
                assert!(!a.intersects(world.ball()));
            }
            assert!(!world.ball().intersects(world.goal()));
            assert!(world.goal().is_inside(config.width, config.height));
            assert!(world.ball().is_inside(config.width, config.height));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = ArenaConfig::default().num_obstacles(10);
        let a = World::generate(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = World::generate(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_placement_exhausted() {
        // two 60..70 obstacles never fit side by side in a 100x100 arena
        let config = ArenaConfig::default()
            .arena_size(100, 100)
            .obstacle_size(60, 70)
            .ball_size(5)
            .num_obstacles(2)
            .max_placement_attempts(50);
        let result = World::generate(&config, &mut StdRng::seed_from_u64(0));
        assert_eq!(
            result,
            Err(ArenaError::PlacementExhausted {
                what: "obstacle",
                attempts: 50
            })
        );
    }

    #[test]
    fn test_step_flags_out_of_bounds() {
        let ball = Rect::new(0, 100, 20, 20);
        let (candidate, out) = step(&ball, Direction::Left, 5, 800, 600);
        assert_eq!(candidate, Rect::new(-5, 100, 20, 20));
        assert!(out);
        let (candidate, out) = step(&ball, Direction::Down, 5, 800, 600);
        assert_eq!(candidate, Rect::new(0, 105, 20, 20));
        assert!(!out);
    }

    #[test]
    fn test_apply_commits_only_moves() {
        let obstacle = Rect::new(28, 0, 50, 50);
        let goal = Rect::new(0, 30, 40, 40);
        let mut world = World::from_parts(800, 600, vec![obstacle], goal, Rect::new(5, 5, 20, 20));

        let (candidate, _) = world.try_move(Direction::Right, 5);
        assert_eq!(world.apply(candidate), Outcome::Lost);
        assert_eq!(world.ball(), &Rect::new(5, 5, 20, 20));

        let (candidate, _) = world.try_move(Direction::Up, 5);
        assert_eq!(world.apply(candidate), Outcome::Moved);
        assert_eq!(world.ball(), &Rect::new(5, 0, 20, 20));
    }

    #[test]
    fn test_goal_wins_over_obstacle() {
        let candidate = Rect::new(0, 0, 20, 20);
        let goal = Rect::new(10, 0, 40, 40);
        let obstacle = Rect::new(0, 10, 50, 50);
        assert_eq!(resolve(&candidate, &goal, &[obstacle]), Outcome::Won);
    }
}
