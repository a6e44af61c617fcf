use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::forecast::DEFAULT_HORIZON_DAYS;

#[derive(Deserialize, Debug)]
pub struct Files {
    pub input_dir: String,
    pub output_dir: String,
}

#[derive(Deserialize, Debug)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize, Debug)]
pub struct ForecastParameters {
    #[serde(default = "default_horizon_days")]
    pub horizon_days: usize,
}

impl Default for ForecastParameters {
    fn default() -> Self {
        ForecastParameters { horizon_days: DEFAULT_HORIZON_DAYS }
    }
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub files: Files,
    pub general: General,
    #[serde(default)]
    pub forecast: ForecastParameters,
}

fn default_horizon_days() -> usize {
    DEFAULT_HORIZON_DAYS
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses and validates configuration given as a toml document
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.forecast.horizon_days == 0 {
        return Err(ConfigError::from("forecast horizon must be at least one day"));
    }
    if config.files.input_dir.is_empty() || config.files.output_dir.is_empty() {
        return Err(ConfigError::from("input and output directories must be given"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [general]
        log_path = "/tmp/sunset/"
        log_level = "debug"
        log_to_stdout = true

        [files]
        input_dir = "/tmp/sunset/in/"
        output_dir = "/tmp/sunset/out/"
    "#;

    #[test]
    fn horizon_defaults_when_section_missing() {
        let config = parse_config(CONFIG).unwrap();
        assert_eq!(config.forecast.horizon_days, DEFAULT_HORIZON_DAYS);
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert_eq!(config.files.input_dir, "/tmp/sunset/in/");
    }

    #[test]
    fn explicit_horizon() {
        let config = parse_config(&format!("{}\n[forecast]\nhorizon_days = 3\n", CONFIG)).unwrap();
        assert_eq!(config.forecast.horizon_days, 3);
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let err = parse_config(&format!("{}\n[forecast]\nhorizon_days = 0\n", CONFIG)).unwrap_err();
        assert!(err.to_string().contains("at least one day"));
    }

    #[test]
    fn missing_section_is_rejected() {
        assert!(parse_config("[general]\nlog_path = \"\"\nlog_level = \"info\"\nlog_to_stdout = false\n").is_err());
    }
}
