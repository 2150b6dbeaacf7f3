use figment::Jail;
use liuren_base::SpiritDirection;
use liuren_chart::QuestionCategory;
use liuren_config::LiurenConfig;

#[test]
fn env_sets_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("LIUREN_ENGINE__DAY_START_HOUR", "5");
        jail.set_env("LIUREN_ENGINE__DIRECTION", "counter-clockwise");
        jail.set_env("LIUREN_REPORT__CATEGORY", "health");

        let config = LiurenConfig::load().expect("config loads");
        assert_eq!(config.engine.day_start_hour, 5);
        assert_eq!(config.engine.direction, SpiritDirection::CounterClockwise);
        assert_eq!(config.report.category, QuestionCategory::Health);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(".liuren").expect("create .liuren");
        jail.create_file(".liuren/config.toml", "[engine]\nday_end_hour = 20\n")?;
        jail.set_env("LIUREN_ENGINE__DAY_END_HOUR", "21");

        let config = LiurenConfig::load().expect("config loads");
        assert_eq!(config.engine.day_end_hour, 21);
        Ok(())
    });
}

#[test]
fn project_file_is_read_from_working_directory() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(".liuren").expect("create .liuren");
        jail.create_file(".liuren/config.toml", "[report]\njson = true\n")?;

        let config = LiurenConfig::load().expect("config loads");
        assert!(config.report.json);
        let options = config.chart_options().expect("valid");
        assert_eq!(options.daylight.start_hour, 6);
        Ok(())
    });
}
