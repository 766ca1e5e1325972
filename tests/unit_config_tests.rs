//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the `config.rs` module,
//! testing defaults, TOML deserialization, overrides and file resolution.
//!
//! 此模块包含 `config.rs` 模块的单元测试，
//! 测试默认值、TOML 反序列化、覆盖项以及配置文件解析。

use duration_bench::cli::commands::init::DEFAULT_CONFIG;
use duration_bench::config::{
    load_config, parse_config, resolve_config, BenchConfig, Overrides, ReportFormat,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod defaults_tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config, BenchConfig::default());
        assert_eq!(config.trials, 10);
        assert_eq!(config.measurements, 2);
        assert_eq!(config.format, ReportFormat::Auto);
        assert_eq!(config.marker, "\"duration\": ");
        assert!(config.check_exit_status);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_default_command_line_targets_playwright_spec() {
        let config = BenchConfig::default();

        assert_eq!(
            config.command_line(),
            "npx playwright test playwright-tests/16-tiers-page.spec.ts --reporter=json --workers=1"
        );
    }

    #[test]
    fn test_init_template_matches_defaults() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, BenchConfig::default());
    }
}

#[cfg(test)]
mod deserialization_tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml_str = r#"
            language = "zh-CN"
            trials = 3
            working_dir = "/srv/frontend"
            spec = "e2e/login.spec.ts"
            command = "npx playwright test {spec} --reporter=json"
            format = "marker"
            marker = "time="
            measurements = 1
            timeout_secs = 90
            check_exit_status = false

            [[baselines]]
            name = "cypress"
            sequences = [[2486, 2116], [2018, 2120]]
        "#;

        let config = parse_config(toml_str).unwrap();

        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.trials, 3);
        assert_eq!(config.working_dir, PathBuf::from("/srv/frontend"));
        assert_eq!(
            config.command_line(),
            "npx playwright test e2e/login.spec.ts --reporter=json"
        );
        assert_eq!(config.format, ReportFormat::Marker);
        assert_eq!(config.marker, "time=");
        assert_eq!(config.measurements, 1);
        assert_eq!(config.timeout_secs, Some(90));
        assert!(!config.check_exit_status);
        assert_eq!(config.baselines.len(), 1);
        assert_eq!(config.baselines[0].name, "cypress");
        assert_eq!(config.baselines[0].sequences[1], vec![2018, 2120]);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(parse_config(r#"format = "xml""#).is_err());
    }

    #[test]
    fn test_negative_trials_are_rejected() {
        assert!(parse_config("trials = -1").is_err());
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("marker".parse::<ReportFormat>().unwrap(), ReportFormat::Marker);
        assert_eq!("auto".parse::<ReportFormat>().unwrap(), ReportFormat::Auto);
        assert!("csv".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}

#[cfg(test)]
mod overrides_tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_set_fields() {
        let mut config = BenchConfig::default();
        config.apply(Overrides {
            trials: Some(4),
            spec: Some("other.spec.ts".to_string()),
            timeout_secs: Some(30),
            ..Overrides::default()
        });

        assert_eq!(config.trials, 4);
        assert_eq!(config.spec, "other.spec.ts");
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.measurements, 2);
        assert_eq!(config.working_dir, PathBuf::from("."));
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let mut config = BenchConfig::default();
        config.timeout_secs = Some(10);
        config.apply(Overrides::default());

        let mut expected = BenchConfig::default();
        expected.timeout_secs = Some(10);
        assert_eq!(config, expected);
    }
}

#[cfg(test)]
mod file_tests {
    use super::*;

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Bench.toml");
        fs::write(&path, "trials = 2\nmeasurements = 3\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.trials, 2);
        assert_eq!(config.measurements, 3);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");

        let err = resolve_config(Some(&path)).unwrap_err();

        assert!(format!("{err:#}").contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_toml_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "trials = [").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_explicit_config_path_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "trials = 1").unwrap();

        let (config, loaded_from) = resolve_config(Some(&path)).unwrap();

        assert_eq!(config.trials, 1);
        assert_eq!(loaded_from, Some(path));
    }
}
