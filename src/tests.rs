#[cfg(test)]
mod integration_tests {
    use std::fs;
    use std::path::PathBuf;

    use common::sample::sample_dataset;
    use common::{Year, YearRange};
    use compute::selection::{SelectionState, DEFAULT_SCOPE, DEFAULT_YEAR_RANGE};

    use crate::cli::OutputFormat;
    use crate::cli::commands::{options, render, summary};
    use crate::config::{AppConfig, DEFAULT_LOG_FILTER};
    use crate::dataset::load_dataset;

    const EXAMPLE_JSON: &str = r#"[
        {"scope": "S1", "year": "2021", "volume": 10, "CO2e": 5},
        {"scope": "S1", "year": "2022", "volume": 20, "CO2e": 8},
        {"scope": "S2", "year": "2021", "volume": 7, "CO2e": 3}
    ]"#;

    fn write_temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("scopechart-tests-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("Failed to create temp dir");
        let path = dir.join(name);
        fs::write(&path, contents).expect("Failed to write temp file");
        path
    }

    fn test_config() -> AppConfig {
        AppConfig {
            data_path: None,
            default_scope: "Scope 1".to_string(),
            default_years: "2021-2023".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn test_load_json_dataset() {
        let path = write_temp_file("example.json", EXAMPLE_JSON);
        let dataset = load_dataset(Some(&path)).expect("Should load JSON dataset");

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].year, Year::new(2021));
    }

    #[test]
    fn test_load_yaml_dataset() {
        let yaml = "- scope: Scope 1\n  year: '2020'\n  volume: 4\n  CO2e: 1.5\n";
        let path = write_temp_file("example.yaml", yaml);
        let dataset = load_dataset(Some(&path)).expect("Should load YAML dataset");

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].scope, "Scope 1");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join("scopechart-does-not-exist.json");
        let err = load_dataset(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read data file"));
    }

    #[test]
    fn test_load_without_path_uses_sample() {
        let dataset = load_dataset(None).unwrap();
        assert_eq!(dataset, sample_dataset());
    }

    #[test]
    fn test_config_selection_defaults_and_overrides() {
        let config = test_config();

        let default = config.selection(None, None).unwrap();
        assert_eq!(default, SelectionState::default());

        let overridden = config
            .selection(Some("Scope 3".to_string()), Some(YearRange::new(2019, 2020)))
            .unwrap();
        assert_eq!(overridden.scope, "Scope 3");
        assert_eq!(overridden.year_range, YearRange::new(2019, 2020));
    }

    #[test]
    fn test_config_selection_rejects_bad_default_years() {
        let config = AppConfig {
            default_years: "all".to_string(),
            ..test_config()
        };
        assert!(config.selection(None, None).is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let toml = "default_scope = \"Scope 2\"\n\
                    default_years = \"2019-2020\"\n\
                    data_path = \"emissions.yaml\"\n";
        let path = write_temp_file("scopechart.toml", toml);

        let config = AppConfig::load(Some(&path)).expect("Should load config file");

        assert_eq!(config.default_scope, "Scope 2");
        assert_eq!(config.default_years, "2019-2020");
        assert_eq!(config.data_path, Some(PathBuf::from("emissions.yaml")));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);

        let selection = config.selection(None, None).unwrap();
        assert_eq!(selection.year_range, YearRange::new(2019, 2020));
    }

    #[test]
    fn test_config_load_missing_explicit_file_fails() {
        let path = std::env::temp_dir().join("scopechart-missing-config.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_config_load_defaults_without_file() {
        let config = AppConfig::load(None).expect("Should fall back to defaults");

        assert_eq!(config.default_scope, DEFAULT_SCOPE);
        assert_eq!(config.default_years, DEFAULT_YEAR_RANGE.to_string());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn test_summary_second_scope() {
        let path = write_temp_file("summary.json", EXAMPLE_JSON);
        let dataset = load_dataset(Some(&path)).unwrap();
        let selection = SelectionState::new("S2", YearRange::new(2021, 2022));

        let output = summary(&dataset, &selection);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Chart for Scope S2 (2021-2022)");
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("2021"));
        assert!(lines[2].ends_with("3"));
        assert!(lines[3].starts_with("2022"));
        assert!(lines[3].ends_with("0"));
        assert!(lines[4].starts_with("Total"));
    }

    #[test]
    fn test_summary_empty_dataset() {
        let output = summary(&common::Dataset::default(), &SelectionState::default());
        assert!(output.ends_with("No data to display"));
    }

    #[test]
    fn test_options_lists_all_years_last() {
        let output = options(&sample_dataset());

        assert!(output.starts_with("Scopes:\n  Scope 1\n  Scope 2\n  Scope 3\n"));
        assert!(output.contains("2019 - 2020  2019-2020"));
        assert!(output.trim_end().ends_with("All Years    2019-2023"));
    }

    #[test]
    fn test_render_json_output() {
        let selection = SelectionState::new("Scope 2", YearRange::new(2020, 2021));
        let output = render(&sample_dataset(), &selection, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["chart"]["title"], "Chart for Scope Scope 2");
        assert_eq!(value["chart"]["labels"].as_array().unwrap().len(), 5);
        assert_eq!(value["plotly"]["layout"]["barmode"], "stack");
        assert_eq!(value["plotly"]["data"][0]["name"], "CO2e");
        assert_eq!(value["controls"]["year_ranges"].as_array().unwrap().len(), 11);
        assert_eq!(value["selection"]["year_range"]["start"], 2020);
    }

    #[test]
    fn test_render_yaml_output() {
        let output =
            render(&sample_dataset(), &SelectionState::default(), OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();

        assert_eq!(value["chart"]["title"].as_str(), Some("Chart for Scope Scope 1"));
    }

    #[test]
    fn test_all_years_render_matches_explicit_pair() {
        let dataset = sample_dataset();
        let controls = compute::options::ControlOptions::from_dataset(&dataset);
        let all_years = controls.all_years().expect("Sample has an All Years option");

        let mut via_option = SelectionState::default();
        via_option.select_option(all_years);
        let explicit = SelectionState::new("Scope 1", YearRange::new(2019, 2023));

        assert_eq!(
            render(&dataset, &via_option, OutputFormat::Json).unwrap(),
            render(&dataset, &explicit, OutputFormat::Json).unwrap()
        );
    }
}
