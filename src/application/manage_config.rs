//! Config management use case

use crate::error::{QuireError, Result};
use crate::infrastructure::{Config, NotebookRepository};

/// Keys accepted by `config <key> <value>`
pub const SETTABLE_KEYS: &[&str] = &[
    "editor",
    "uncompleted_todos_on_top",
    "date_format",
    "time_format",
];

/// Service for managing store configuration
pub struct ConfigService<R: NotebookRepository> {
    repository: R,
}

impl<R: NotebookRepository> ConfigService<R> {
    /// Create a new config service
    pub fn new(repository: R) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor),
            "uncompleted_todos_on_top" => Ok(config.uncompleted_todos_on_top.to_string()),
            "date_format" => Ok(config.date_format),
            "time_format" => Ok(config.time_format),
            "current_notebook" => Ok(config.current_notebook.unwrap_or_default()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(QuireError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, current_notebook, created",
                key,
                SETTABLE_KEYS.join(", ")
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => config.editor = value.to_string(),
            "uncompleted_todos_on_top" => {
                config.uncompleted_todos_on_top = value.parse().map_err(|_| {
                    QuireError::Config(format!(
                        "Invalid value for uncompleted_todos_on_top: '{}'. Expected true or false",
                        value
                    ))
                })?;
            }
            "date_format" => config.date_format = value.to_string(),
            "time_format" => config.time_format = value.to_string(),
            "created" => {
                return Err(QuireError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            "current_notebook" => {
                return Err(QuireError::Config(
                    "Use 'quire use <notebook>' to change the current notebook".to_string(),
                ));
            }
            _ => {
                return Err(QuireError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key,
                    SETTABLE_KEYS.join(", ")
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
