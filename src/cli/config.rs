//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Store file used when neither the CLI nor the config file names one.
pub const DEFAULT_STORE_FILE: &str = "notes.json";

/// Listen address used when neither the CLI nor the config file names one.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Path of the JSON note store
    pub file: Option<PathBuf>,

    /// Listen address for `serve`
    pub addr: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notekeep/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notekeep")
            .join("config.toml")
    }

    /// Resolve the note store path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--file` argument
    /// 2. Config file `file` setting
    /// 3. `notes.json` in the current directory
    pub fn store_path(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }

    /// Resolve the HTTP listen address, with CLI argument taking precedence.
    pub fn listen_addr(&self, cli_addr: Option<&str>) -> String {
        cli_addr
            .map(str::to_string)
            .or_else(|| self.addr.clone())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_no_file() {
        let config = Config::default();
        assert!(config.file.is_none());
        assert!(config.addr.is_none());
    }

    #[test]
    fn store_path_prefers_cli_arg() {
        let config = Config {
            file: Some(PathBuf::from("/config/notes.json")),
            addr: None,
        };
        let cli_file = PathBuf::from("/cli/notes.json");
        assert_eq!(
            config.store_path(Some(&cli_file)),
            PathBuf::from("/cli/notes.json")
        );
    }

    #[test]
    fn store_path_falls_back_to_config() {
        let config = Config {
            file: Some(PathBuf::from("/config/notes.json")),
            addr: None,
        };
        assert_eq!(config.store_path(None), PathBuf::from("/config/notes.json"));
    }

    #[test]
    fn store_path_falls_back_to_cwd() {
        let config = Config::default();
        assert_eq!(config.store_path(None), PathBuf::from("notes.json"));
    }

    #[test]
    fn listen_addr_precedence() {
        let config = Config {
            file: None,
            addr: Some("0.0.0.0:8080".to_string()),
        };
        assert_eq!(config.listen_addr(Some("127.0.0.1:9000")), "127.0.0.1:9000");
        assert_eq!(config.listen_addr(None), "0.0.0.0:8080");
        assert_eq!(Config::default().listen_addr(None), "127.0.0.1:3000");
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.file.is_none());
    }

    #[test]
    fn load_from_parses_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "file = \"/data/notes.json\"\naddr = \"0.0.0.0:80\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.file, Some(PathBuf::from("/data/notes.json")));
        assert_eq!(config.addr.as_deref(), Some("0.0.0.0:80"));
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "file = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("notekeep/config.toml"));
    }
}
