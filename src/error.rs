//! Error types for quire

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quire application
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("Not a quire directory: {0}")]
    NotQuireDirectory(PathBuf),

    #[error("Please select a notebook first.")]
    NoNotebookSelected,

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Ambiguous reference '{reference}' matches {count} items")]
    AmbiguousItem { reference: String, count: usize },

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QuireError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuireError::NotQuireDirectory(_) => 2,
            QuireError::NoNotebookSelected => 3,
            QuireError::ItemNotFound(_) | QuireError::AmbiguousItem { .. } => 4,
            QuireError::InvalidOption(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuireError::NotQuireDirectory(path) => {
                format!(
                    "Not a quire directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'quire init' in this directory to create a new store\n\
                    • Navigate to an existing quire directory\n\
                    • Set QUIRE_ROOT environment variable to your store path",
                    path.display()
                )
            }
            QuireError::NoNotebookSelected => {
                "Please select a notebook first.\n\n\
                Suggestions:\n\
                • Create one with 'quire mkbook <title>'\n\
                • Select an existing one with 'quire use <notebook>'\n\
                • Use 'quire ls /' to see available notebooks"
                    .to_string()
            }
            QuireError::AmbiguousItem { reference, count } => {
                format!(
                    "Ambiguous reference '{}' matches {} items\n\n\
                    Suggestions:\n\
                    • Use a longer id prefix (see 'quire ls -l')",
                    reference, count
                )
            }
            QuireError::InvalidOption(msg) => {
                if msg.contains("sort field") {
                    format!(
                        "{}\n\n\
                        Valid sort fields: title, created_time, updated_time, user_updated_time\n\
                        Example: quire ls --sort title",
                        msg
                    )
                } else if msg.contains("item type") {
                    format!(
                        "{}\n\n\
                        Use 'n' for notes, 't' for to-dos or 'nt' for both\n\
                        Example: quire ls -t t",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            QuireError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: quire config editor 'vim'\n\
                    • Quote editor paths containing spaces: quire config editor '\"/opt/my editor/bin\" -w'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuireError
pub type Result<T> = std::result::Result<T, QuireError>;
