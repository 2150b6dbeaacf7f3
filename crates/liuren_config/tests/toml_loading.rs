//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use std::path::PathBuf;

use figment::Jail;
use liuren_base::SpiritDirection;
use liuren_chart::QuestionCategory;
use liuren_config::{ConfigError, LiurenConfig};
use pretty_assertions::assert_eq;

#[test]
fn project_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "project.toml",
            r#"
[engine]
day_start_hour = 5
direction = "counter-clockwise"

[report]
category = "wealth"
"#,
        )?;

        let config: LiurenConfig =
            LiurenConfig::figment_from(None, PathBuf::from("project.toml")).extract()?;

        assert_eq!(config.engine.day_start_hour, 5);
        assert_eq!(config.engine.day_end_hour, 18);
        assert_eq!(config.engine.direction, SpiritDirection::CounterClockwise);
        assert_eq!(config.report.category, QuestionCategory::Wealth);
        assert!(!config.report.json);
        Ok(())
    });
}

#[test]
fn project_file_beats_global_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "global.toml",
            r#"
[engine]
day_start_hour = 7
day_end_hour = 19
"#,
        )?;
        jail.create_file(
            "project.toml",
            r#"
[engine]
day_end_hour = 17
"#,
        )?;

        let config: LiurenConfig = LiurenConfig::figment_from(
            Some(PathBuf::from("global.toml")),
            PathBuf::from("project.toml"),
        )
        .extract()?;

        assert_eq!(config.engine.day_start_hour, 7);
        assert_eq!(config.engine.day_end_hour, 17);
        Ok(())
    });
}

#[test]
fn missing_files_fall_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config: LiurenConfig = LiurenConfig::figment_from(
            Some(PathBuf::from("nope.toml")),
            PathBuf::from("also-nope.toml"),
        )
        .extract()?;
        assert_eq!(config, LiurenConfig::default());
        Ok(())
    });
}

#[test]
fn explicit_file_must_exist() {
    Jail::expect_with(|_jail| {
        let err = LiurenConfig::load_with_file(&PathBuf::from("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn bad_direction_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("bad.toml", "[engine]\ndirection = \"sideways\"\n")?;
        let result: Result<LiurenConfig, _> =
            LiurenConfig::figment_from(None, PathBuf::from("bad.toml")).extract();
        assert!(result.is_err());
        Ok(())
    });
}
