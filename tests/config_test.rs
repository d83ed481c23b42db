//! Tests for configuration loading.

use noughts::{AppConfig, ConfigOverrides, Mark, SearchStrategy};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(*config.board_size(), 3);
    assert_eq!(config.think_delay(), Duration::from_millis(500));
    assert_eq!(*config.strategy(), SearchStrategy::Exhaustive);
    assert_eq!(config.first_turn(), Mark::Human);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = AppConfig::from_toml("strategy = \"alpha-beta\"\n").unwrap();
    assert_eq!(*config.strategy(), SearchStrategy::AlphaBeta);
    assert_eq!(*config.board_size(), 3);
    assert_eq!(*config.think_delay_ms(), 500);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 4").unwrap();
    writeln!(file, "strategy = \"alpha-beta\"").unwrap();
    writeln!(file, "think_delay_ms = 0").unwrap();
    writeln!(file, "computer_first = true").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 4);
    assert_eq!(config.think_delay(), Duration::ZERO);
    assert_eq!(config.first_turn(), Mark::Computer);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_rejects_bad_values() {
    let err = AppConfig::from_toml("board_size = 9\n").unwrap_err();
    assert!(err.message.contains("between 1 and 4"), "{err}");

    assert!(AppConfig::from_toml("board_size = 0\n").is_err());
    assert!(AppConfig::from_toml("colour = \"blue\"\n").is_err());
    assert!(AppConfig::from_toml("strategy = \"random\"\n").is_err());
}

#[test]
fn test_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to read config file"));
}

#[test]
fn test_overrides() {
    let config = AppConfig::default()
        .with_overrides(ConfigOverrides {
            board_size: Some(2),
            think_delay_ms: Some(10),
            strategy: Some(SearchStrategy::AlphaBeta),
            computer_first: Some(true),
        })
        .unwrap();
    assert_eq!(*config.board_size(), 2);
    assert_eq!(*config.think_delay_ms(), 10);
    assert_eq!(*config.strategy(), SearchStrategy::AlphaBeta);
    assert!(*config.computer_first());

    let err = AppConfig::default().with_overrides(ConfigOverrides {
        board_size: Some(5),
        ..Default::default()
    });
    assert!(err.is_err());
}

#[test]
fn test_large_board_needs_alpha_beta() {
    let err = AppConfig::from_toml("board_size = 4\n").unwrap_err();
    assert!(err.message.contains("alpha-beta"), "{err}");

    let err = AppConfig::default().with_overrides(ConfigOverrides {
        board_size: Some(4),
        ..Default::default()
    });
    assert!(err.is_err());

    let config = AppConfig::default()
        .with_overrides(ConfigOverrides {
            board_size: Some(4),
            strategy: Some(SearchStrategy::AlphaBeta),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(*config.board_size(), 4);
}

#[test]
fn test_override_can_turn_computer_first_off() {
    let config = AppConfig::from_toml("computer_first = true\n").unwrap();
    assert_eq!(config.first_turn(), Mark::Computer);

    let unchanged = config.clone().with_overrides(ConfigOverrides::default()).unwrap();
    assert_eq!(unchanged.first_turn(), Mark::Computer);

    let config = config
        .with_overrides(ConfigOverrides {
            computer_first: Some(false),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(config.first_turn(), Mark::Human);
}
