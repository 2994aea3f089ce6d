use anyhow::Result;
use bricknbash::{test, train, BrickNBashConfig, Mode};
use bricknbash_core::{
    record::{BufferedRecorder, NullRecorder},
    TrainerConfig,
};
use bricknbash_qlearn::QLearnError;
use std::{fs, path::Path};
use tempdir::TempDir;

fn config(model_path: &Path, max_steps: usize) -> BrickNBashConfig {
    let mut config = BrickNBashConfig::default();
    config.trainer = Mode::Train
        .trainer_config(TrainerConfig::default())
        .max_steps(max_steps)
        .model_path(model_path.to_string_lossy());
    config
}

#[test_log::test]
fn test_train_persists_table() -> Result<()> {
    let dir = TempDir::new("bricknbash")?;
    let path = dir.path().join("qtable.txt");

    let mut recorder = BufferedRecorder::new();
    let stats = train(&config(&path, 300), 0, &mut recorder)?;
    assert!(stats.total_games() <= 300);

    let text = fs::read_to_string(&path)?;
    assert_eq!(text.lines().count(), 1000);
    assert!(text
        .lines()
        .any(|l| l.split(',').any(|v| v.parse::<f64>().unwrap() != 0.0)));

    assert_eq!(recorder.len(), 300);
    for record in recorder.iter() {
        assert!(record.get_scalar("reward").is_ok());
        let eps = record.get_scalar("exploration_rate")?;
        assert!((0.1..0.5).contains(&eps));
    }
    Ok(())
}

#[test_log::test]
fn test_same_seed_same_run() -> Result<()> {
    let dir = TempDir::new("bricknbash")?;
    let path1 = dir.path().join("q1.txt");
    let path2 = dir.path().join("q2.txt");

    let stats1 = train(&config(&path1, 500), 3, &mut NullRecorder::new())?;
    let stats2 = train(&config(&path2, 500), 3, &mut NullRecorder::new())?;

    assert_eq!(stats1, stats2);
    assert_eq!(fs::read_to_string(&path1)?, fs::read_to_string(&path2)?);
    Ok(())
}

#[test_log::test]
fn test_test_mode_does_not_save() -> Result<()> {
    let dir = TempDir::new("bricknbash")?;
    let path = dir.path().join("qtable.txt");
    train(&config(&path, 200), 0, &mut NullRecorder::new())?;
    let trained = fs::read_to_string(&path)?;

    let mut config = config(&path, 50);
    config.trainer = Mode::Test.trainer_config(config.trainer).tick_millis(0);
    let (_, record) = test(&config, &path, 1, 0, &mut NullRecorder::new())?;

    assert!(record.is_none());
    assert_eq!(fs::read_to_string(&path)?, trained);
    Ok(())
}

#[test_log::test]
fn test_test_mode_without_table() -> Result<()> {
    let dir = TempDir::new("bricknbash")?;
    let path = dir.path().join("missing.txt");

    let mut config = config(&path, 20);
    config.trainer = Mode::Test.trainer_config(config.trainer).tick_millis(0);
    let (stats, record) = test(&config, &path, 0, 3, &mut NullRecorder::new())?;

    assert!(stats.total_games() <= 20);
    assert!(!path.exists());
    let win_rate = record.unwrap().get_scalar("Win rate")?;
    assert!((0.0..=1.0).contains(&win_rate));
    Ok(())
}

#[test_log::test]
fn test_unusable_agent_settings_are_rejected() -> Result<()> {
    let dir = TempDir::new("bricknbash")?;
    let path = dir.path().join("qtable.txt");

    for qlearn in ["n_states: 10", "n_actions: 0", "n_actions: 5", "learning_rate: 2.0"] {
        let mut config = config(&path, 10);
        config.qlearn = serde_yaml::from_str(qlearn)?;
        let err = train(&config, 0, &mut NullRecorder::new()).unwrap_err();
        assert!(err.downcast_ref::<QLearnError>().is_some(), "{}", qlearn);
    }
    assert!(!path.exists());
    Ok(())
}
