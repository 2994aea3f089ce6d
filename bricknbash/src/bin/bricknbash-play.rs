//! Manual play: steer the ball with keys read from stdin.
use anyhow::Result;
use bricknbash::{play, BrickNBashConfig};
use bricknbash_arena::ArenaEnv;
use bricknbash_core::Env as _;
use clap::Parser;
use std::{io, path::PathBuf};

/// Steer the ball with h/j/k/l or a/s/d/w, one or more keys per line; `q` quits
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file with an `arena` section
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed of the arena layouts
    #[arg(short, long, default_value_t = 0)]
    seed: i64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => BrickNBashConfig::load(path)?,
        None => BrickNBashConfig::default(),
    };

    let mut env = ArenaEnv::build(&config.arena, args.seed)?;
    let stats = play(&mut env, io::stdin().lock(), io::stdout())?;
    stats.log_summary();
    Ok(())
}
