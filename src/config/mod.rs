pub mod address;
pub mod log;

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

pub use address::AddressLookupConfig;
pub use log::LoggingConfig;

use crate::err_with_loc;
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "Config.toml";
pub const CONFIG_PATH_ENV: &str = "MIAZY_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub address_lookup: AddressLookupConfig,
    pub logging: LoggingConfig,
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| err_with_loc!(ConfigError::OpenFileError(format!("{}: {}", path.display(), e))))?;
    let config: Config =
        toml::from_str(&config_str).map_err(|e| err_with_loc!(ConfigError::ParseError(e.to_string())))?;
    Ok(config)
}

/// Same as [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("config::load_config_or_default::missing::{}", path.display());
        return Ok(Config::default());
    }
    load_config(path)
}

/// Resolves the config file location: `MIAZY_CONFIG` if set, else `Config.toml`.
pub fn config_path_from_env() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.address_lookup.base_url, "https://viacep.com.br/ws/");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [address_lookup]
            base_url = "http://localhost:9000/ws/"
            "#,
        )
        .unwrap();
        assert_eq!(config.address_lookup.base_url, "http://localhost:9000/ws/");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn logging_directory_can_be_disabled() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.directory, None);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config_or_default("definitely/not/here/Config.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_is_an_error_for_strict_load() {
        assert!(load_config("definitely/not/here/Config.toml").is_err());
    }
}
