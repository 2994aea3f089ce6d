//! [`Env`] implementation of the arena.
use crate::{
    observation::Observation,
    reward::reward,
    world::{Outcome, World},
    ArenaConfig, ArenaSnapshot, Direction,
};
use anyhow::Result;
use bricknbash_core::{
    record::{Record, RecordValue},
    Env, Info, Step,
};
use rand::{rngs::StdRng, SeedableRng};

/// What happened in a step, besides the reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaInfo {
    pub outcome: Outcome,
    pub out_of_bounds: bool,
}

impl Info for ArenaInfo {
    fn is_success(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// The obstacle arena as an environment.
///
/// Every reset draws a new layout from the environment's random number
/// generator, so a sequence of episodes is fixed by the seed given to
/// [`Env::build`].
pub struct ArenaEnv {
    config: ArenaConfig,
    world: World,
    rng: StdRng,
    seed: i64,
}

impl ArenaEnv {
    /// An environment starting from a given world.
    ///
    /// Later resets generate layouts from `config` and `seed`.
    pub fn from_world(config: ArenaConfig, world: World, seed: i64) -> Self {
        Self {
            config,
            world,
            rng: StdRng::seed_from_u64(seed as u64),
            seed,
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Copy of the current rectangles.
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot::from(&self.world)
    }
}

impl Env for ArenaEnv {
    type Config = ArenaConfig;
    type Obs = Observation;
    type Act = Direction;
    type Info = ArenaInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let world = World::generate(config, &mut rng)?;
        Ok(Self {
            config: config.clone(),
            world,
            rng,
            seed,
        })
    }

    fn step(&mut self, a: &Direction) -> (Step<Self>, Record) {
        let prev = *self.world.ball();
        let (candidate, out_of_bounds) = self.world.try_move(*a, self.config.ball_speed);
        let outcome = self.world.apply(candidate);
        let r = reward(
            &prev,
            &candidate,
            out_of_bounds,
            self.world.goal(),
            self.world.obstacles(),
            outcome,
            &self.config.reward,
        );

        let info = ArenaInfo {
            outcome,
            out_of_bounds,
        };
        let record = Record::from_slice(&[(
            "outcome",
            RecordValue::String(outcome.as_str().to_string()),
        )]);
        let step = Step::new(
            self.observe(),
            *a,
            r as f32,
            outcome.is_terminal(),
            false,
            info,
        );
        (step, record)
    }

    fn observe(&self) -> Observation {
        Observation::encode(
            self.world.ball(),
            self.world.goal(),
            self.world.obstacles(),
            self.config.proximity_band,
        )
    }

    fn reset(&mut self) -> Result<Observation> {
        self.world = World::generate(&self.config, &mut self.rng)?;
        Ok(self.observe())
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Observation> {
        self.rng = StdRng::seed_from_u64(self.seed.wrapping_add(ix as i64) as u64);
        self.reset()
    }
}
