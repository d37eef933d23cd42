use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::path::Path;

/// Output format of the log layer.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_environment() -> String {
    "dev".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load from an explicit file, still honouring `APP__` overrides.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::from(path))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn is_prod(&self) -> bool {
        self.environment == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn load_from_file_reads_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "environment = \"prod\"\nlog_format = \"pretty\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.is_prod());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    #[serial]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "log_format = \"pretty\"\n").unwrap();

        unsafe { std::env::set_var("APP__LOG_FORMAT", "json") };
        let config = Config::load_from(&path);
        unsafe { std::env::remove_var("APP__LOG_FORMAT") };

        let config = config.unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.environment, "dev");
    }

    #[test]
    #[serial]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
