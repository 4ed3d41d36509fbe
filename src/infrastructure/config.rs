//! Configuration management

use crate::error::{QuireError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    #[serde(default = "default_true")]
    pub uncompleted_todos_on_top: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_notebook: Option<String>,
    pub created: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            uncompleted_todos_on_top: true,
            date_format: default_date_format(),
            time_format: default_time_format(),
            current_notebook: None,
            created: Utc::now(),
        }
    }

    /// Load config from .quire/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quire").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuireError::NotQuireDirectory(path.to_path_buf())
            } else {
                QuireError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .quire/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let quire_dir = path.join(".quire");
        let config_path = quire_dir.join("config.toml");

        if !quire_dir.exists() {
            fs::create_dir(&quire_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Combined chrono format used for timestamps in long listings
    pub fn datetime_format(&self) -> String {
        format!("{} {}", self.date_format, self.time_format)
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert!(config.uncompleted_todos_on_top);
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(config.current_notebook, None);
        assert!(!config.editor.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.current_notebook = Some("abcdef".to_string());
        config.uncompleted_todos_on_top = false;

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".quire/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_optional_keys_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".quire")).unwrap();
        fs::write(
            temp.path().join(".quire/config.toml"),
            "editor = \"vim\"\ncreated = \"2025-01-17T09:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.editor, "vim");
        assert!(loaded.uncompleted_todos_on_top);
        assert_eq!(loaded.time_format, "%H:%M");
        assert_eq!(loaded.current_notebook, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            QuireError::NotQuireDirectory(_) => {}
            other => panic!("Expected NotQuireDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".quire")).unwrap();
        fs::write(temp.path().join(".quire/config.toml"), "editor = [unclosed").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            QuireError::TomlDeserialize(_) => {}
            other => panic!("Expected TomlDeserialize error, got {:?}", other),
        }
    }

    #[test]
    fn test_datetime_format() {
        let config = Config::new();
        assert_eq!(config.datetime_format(), "%d/%m/%Y %H:%M");
    }
}
