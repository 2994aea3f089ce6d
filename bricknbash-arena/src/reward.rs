//! Reward of a single move.
use crate::{
    geometry::{center_distance, Rect},
    world::Outcome,
    RewardConfig,
};

/// Up to `count` obstacles whose centers lie within `radius` of the center of
/// `ball`, nearest first.
///
/// Obstacles at equal distance keep their order in `obstacles`, so when more
/// than `count` of them tie at the cut-off, the ones listed first are kept.
pub fn nearest_obstacles<'a>(
    ball: &Rect,
    obstacles: &'a [Rect],
    radius: f64,
    count: usize,
) -> Vec<&'a Rect> {
    let mut best: Vec<(f64, &'a Rect)> = Vec::with_capacity(count + 1);
    for obstacle in obstacles {
        let d = center_distance(ball, obstacle);
        if d > radius {
            continue;
        }
        let at = best.partition_point(|(other, _)| *other <= d);
        if at < count {
            best.insert(at, (d, obstacle));
            best.truncate(count);
        }
    }
    best.into_iter().map(|(_, o)| o).collect()
}

/// Reward of moving the ball from `prev` to `candidate`.
///
/// A terminal move earns exactly `config.win` or `config.loss`. Otherwise the
/// reward adds up:
///
/// * `-out_of_bounds_penalty` if the candidate left the arena,
/// * `+progress` if the candidate is closer to the goal than `prev`, else `-progress`,
/// * for each obstacle near `prev`, `+obstacle_clearance` if the candidate is
///   farther from it, else `-obstacle_clearance`.
pub fn reward(
    prev: &Rect,
    candidate: &Rect,
    out_of_bounds: bool,
    goal: &Rect,
    obstacles: &[Rect],
    outcome: Outcome,
    config: &RewardConfig,
) -> i32 {
    match outcome {
        Outcome::Won => config.win,
        Outcome::Lost => config.loss,
        Outcome::Moved => {
            let mut r = 0;
            if out_of_bounds {
                r -= config.out_of_bounds_penalty;
            }
            if center_distance(prev, goal) > center_distance(candidate, goal) {
                r += config.progress;
            } else {
                r -= config.progress;
            }
            let nearest =
                nearest_obstacles(prev, obstacles, config.nearest_radius, config.nearest_count);
            for obstacle in nearest {
                if center_distance(prev, obstacle) < center_distance(candidate, obstacle) {
                    r += config.obstacle_clearance;
                } else {
                    r -= config.obstacle_clearance;
                }
            }
            r
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RewardConfig {
        RewardConfig::default()
    }

    #[test]
    fn test_terminal_rewards_are_flat() {
        let prev = Rect::new(0, 0, 20, 20);
        let candidate = Rect::new(-5, 0, 20, 20);
        let goal = Rect::new(100, 100, 40, 40);
        // an obstacle centered on the ball would add clearance terms on a move
        let obstacles = [Rect::new(-5, -5, 30, 30)];
        for oob in [false, true] {
            let won = reward(&prev, &candidate, oob, &goal, &obstacles, Outcome::Won, &config());
            let lost = reward(&prev, &candidate, oob, &goal, &obstacles, Outcome::Lost, &config());
            assert_eq!(won, 20);
            assert_eq!(lost, -20);
        }
    }

    #[test]
    fn test_progress_towards_goal() {
        let prev = Rect::new(100, 100, 20, 20);
        let goal = Rect::new(300, 100, 40, 40);
        let closer = Rect::new(105, 100, 20, 20);
        let farther = Rect::new(95, 100, 20, 20);
        assert_eq!(reward(&prev, &closer, false, &goal, &[], Outcome::Moved, &config()), 1);
        assert_eq!(reward(&prev, &farther, false, &goal, &[], Outcome::Moved, &config()), -1);
    }

    #[test]
    fn test_out_of_bounds_penalty() {
        let prev = Rect::new(0, 100, 20, 20);
        let candidate = Rect::new(-5, 100, 20, 20);
        let goal = Rect::new(300, 100, 40, 40);
        assert_eq!(
            reward(&prev, &candidate, true, &goal, &[], Outcome::Moved, &config()),
            -6
        );
    }

    #[test]
    fn test_obstacle_clearance() {
        // obstacle center (117, 110) is 7 units from the ball center (110, 110)
        let prev = Rect::new(100, 100, 20, 20);
        let obstacle = Rect::new(107, 100, 20, 20);
        let goal = Rect::new(0, 100, 40, 40);
        let away = Rect::new(95, 100, 20, 20);
        let towards = Rect::new(105, 100, 20, 20);
        // moving left: closer to the goal (+1), away from the obstacle (+10)
        assert_eq!(
            reward(&prev, &away, false, &goal, &[obstacle], Outcome::Moved, &config()),
            11
        );
        // moving right: farther from the goal (-1), towards the obstacle (-10)
        assert_eq!(
            reward(&prev, &towards, false, &goal, &[obstacle], Outcome::Moved, &config()),
            -11
        );
    }

    #[test]
    fn test_nearest_obstacles_radius_and_count() {
        let ball = Rect::new(100, 100, 20, 20);
        let obstacles = [
            Rect::new(108, 100, 20, 20), // 8
            Rect::new(200, 200, 20, 20), // far
            Rect::new(103, 100, 20, 20), // 3
            Rect::new(100, 105, 20, 20), // 5
            Rect::new(100, 110, 20, 20), // 10, on the radius
        ];
        let nearest = nearest_obstacles(&ball, &obstacles, 10.0, 2);
        assert_eq!(nearest, vec![&obstacles[2], &obstacles[3]]);

        let nearest = nearest_obstacles(&ball, &obstacles, 10.0, 10);
        assert_eq!(
            nearest,
            vec![&obstacles[2], &obstacles[3], &obstacles[0], &obstacles[4]]
        );
    }

    #[test]
    fn test_nearest_obstacles_ties_keep_first() {
        let ball = Rect::new(100, 100, 20, 20);
        let obstacles = [
            Rect::new(104, 100, 20, 20),
            Rect::new(96, 100, 20, 20),
            Rect::new(100, 104, 20, 20),
        ];
        let nearest = nearest_obstacles(&ball, &obstacles, 10.0, 2);
        assert_eq!(nearest, vec![&obstacles[0], &obstacles[1]]);
    }

    #[test]
    fn test_nearest_obstacles_count_zero() {
        let ball = Rect::new(100, 100, 20, 20);
        let obstacles = [Rect::new(104, 100, 20, 20)];
        assert!(nearest_obstacles(&ball, &obstacles, 10.0, 0).is_empty());
    }
}
