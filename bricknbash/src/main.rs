//! Command line entry point: `train` and `test` modes.
use anyhow::Result;
use bricknbash::{test, train, BrickNBashConfig, Mode};
use bricknbash_core::record::LogRecorder;
use clap::Parser;
use std::path::PathBuf;

/// Train a Q-learning agent to reach the goal of an obstacle arena
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Run mode
    #[arg(value_enum)]
    mode: Mode,

    /// YAML file with `arena`, `qlearn` and `trainer` sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Q-table file
    #[arg(short, long, default_value = "qtable.txt")]
    model_path: PathBuf,

    /// Number of steps to run, 0 to run until interrupted
    #[arg(long)]
    max_steps: Option<usize>,

    /// Seed of the arena layouts
    #[arg(short, long, default_value_t = 0)]
    seed: i64,

    /// Number of greedy episodes reported after `test`
    #[arg(long, default_value_t = 0)]
    eval_episodes: usize,
}

fn load_config(args: &Args) -> Result<BrickNBashConfig> {
    let mut config = match &args.config {
        Some(path) => BrickNBashConfig::load(path)?,
        None => BrickNBashConfig::default(),
    };
    let mut trainer = args.mode.trainer_config(config.trainer);
    if let Some(max_steps) = args.max_steps {
        trainer = trainer.max_steps(max_steps);
    }
    config.trainer = trainer.model_path(args.model_path.to_string_lossy());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = load_config(&args)?;
    let mut recorder = LogRecorder::new();

    match args.mode {
        Mode::Train => {
            train(&config, args.seed, &mut recorder)?;
        }
        Mode::Test => {
            test(
                &config,
                &args.model_path,
                args.seed,
                args.eval_episodes,
                &mut recorder,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_modes() {
        let args = Args::try_parse_from(["bricknbash", "train"]).unwrap();
        assert_eq!(args.mode, Mode::Train);
        assert_eq!(args.model_path, PathBuf::from("qtable.txt"));

        let args = Args::try_parse_from(["bricknbash", "test", "--max-steps", "10"]).unwrap();
        assert_eq!(args.mode, Mode::Test);
        assert_eq!(args.max_steps, Some(10));
    }

    #[test]
    fn test_unknown_mode_is_usage_error() {
        for argv in [vec!["bricknbash", "play"], vec!["bricknbash", "fly"], vec!["bricknbash"]] {
            let err = Args::try_parse_from(argv).unwrap_err();
            assert!(matches!(
                err.kind(),
                ErrorKind::InvalidValue | ErrorKind::MissingRequiredArgument
            ));
        }
    }

    #[test]
    fn test_mode_presets_applied() -> Result<()> {
        let args = Args::try_parse_from(["bricknbash", "train", "-m", "q.txt"])?;
        let config = load_config(&args)?;
        assert_eq!(config.trainer.save_interval, 1);
        assert_eq!(config.trainer.model_path.as_deref(), Some("q.txt"));
        Ok(())
    }
}
