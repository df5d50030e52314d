use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Seconds between feed polls.
    pub refresh_interval: u32,
    /// Mirror the score/inning summary into the terminal title.
    pub title: bool,
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 10,
            title: true,
            time_format: "%H:%M:%S".to_string(),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.refresh_interval, 10);
        assert!(config.title);
        assert_eq!(config.time_format, "%H:%M:%S");
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
log_level = "debug"
refresh_interval = 30
title = false
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.refresh_interval, 30);
        assert!(!config.title);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.log_file, "/dev/null");
    }

    #[test]
    fn test_config_from_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.refresh_interval, Config::default().refresh_interval);
        assert!(config.title);
    }
}
