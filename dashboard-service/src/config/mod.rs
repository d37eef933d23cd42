use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    /// JSON seed file; the built-in demo seed is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl DashboardConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;
        Self::from_env(common_config)
    }

    /// Build on an already-loaded common config, reading the rest from env.
    pub fn from_env(common: core_config::Config) -> Result<Self, AppError> {
        let is_prod = common.is_prod();

        // Demo data has no place in production.
        let seed_path = if is_prod {
            Some(PathBuf::from(get_env("SEED_PATH", None, is_prod)?))
        } else {
            env::var("SEED_PATH").ok().map(PathBuf::from)
        };

        Ok(DashboardConfig {
            service_name: get_env("SERVICE_NAME", Some("dashboard-service"), false)?,
            log_level: get_env("LOG_LEVEL", Some("info"), false)?,
            seed_path,
            common,
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn common(environment: &str) -> core_config::Config {
        core_config::Config {
            environment: environment.to_string(),
            ..Default::default()
        }
    }

    #[test]
    #[serial]
    fn dev_defaults_apply_without_env() {
        env::remove_var("SEED_PATH");
        env::remove_var("SERVICE_NAME");
        env::remove_var("LOG_LEVEL");

        let config = DashboardConfig::from_env(common("dev")).unwrap();
        assert_eq!(config.service_name, "dashboard-service");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_path.is_none());
    }

    #[test]
    #[serial]
    fn prod_requires_seed_path() {
        env::remove_var("SEED_PATH");
        let err = DashboardConfig::from_env(common("prod")).unwrap_err();
        assert!(err.to_string().contains("SEED_PATH"));

        env::set_var("SEED_PATH", "/etc/dashboard/seed.json");
        let config = DashboardConfig::from_env(common("prod"));
        env::remove_var("SEED_PATH");

        assert_eq!(
            config.unwrap().seed_path,
            Some(PathBuf::from("/etc/dashboard/seed.json"))
        );
    }
}
