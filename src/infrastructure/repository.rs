//! File system repository

use crate::domain::{Folder, Note};
use crate::error::{QuireError, Result};
use crate::infrastructure::Config;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "store.json";

/// Every notebook and note known to a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Store {
    pub fn notes_in(&self, folder_id: &str) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| n.parent_id == folder_id)
            .cloned()
            .collect()
    }

    pub fn note_count(&self, folder_id: &str) -> usize {
        self.notes.iter().filter(|n| n.parent_id == folder_id).count()
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn note_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }
}

/// Abstract repository for notebook operations
pub trait NotebookRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .quire/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .quire/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Create .quire directory structure
    fn initialize(&self) -> Result<()>;

    /// Load all notebooks and notes
    fn load_store(&self) -> Result<Store>;

    /// Persist all notebooks and notes
    fn save_store(&self, store: &Store) -> Result<()>;

    /// Absolute path of a note's markdown body
    fn body_path(&self, note: &Note) -> PathBuf {
        self.root().join(note.body_filename())
    }

    /// Write a note body (creates if doesn't exist, overwrites if exists)
    fn write_body(&self, note: &Note, content: &str) -> Result<()> {
        fs::write(self.body_path(note), content).map_err(QuireError::Io)
    }
}

/// File system implementation of NotebookRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the store root by walking up from current directory
    /// First checks QUIRE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUIRE_ROOT") {
            let path = std::path::absolute(PathBuf::from(root_path))?;
            if Self::has_quire_dir(&path) {
                debug!("using QUIRE_ROOT at {}", path.display());
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuireError::Config(format!(
                    "QUIRE_ROOT is set to '{}' but no .quire directory found. \
                    Run 'quire init' in that directory or unset QUIRE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_quire_dir(&current) {
                debug!("discovered store at {}", current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuireError::NotQuireDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_quire_dir(path: &Path) -> bool {
        path.join(".quire").is_dir()
    }

    fn store_path(&self) -> PathBuf {
        self.root.join(".quire").join(STORE_FILE)
    }
}

impl NotebookRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let quire_dir = self.root.join(".quire");

        if quire_dir.exists() {
            return Err(QuireError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&quire_dir)?;
        self.save_store(&Store::default())
    }

    fn load_store(&self) -> Result<Store> {
        let path = self.store_path();

        if !path.exists() {
            debug!("no store at {}, starting empty", path.display());
            return Ok(Store::default());
        }

        let contents = fs::read_to_string(&path)?;
        let store: Store = serde_json::from_str(&contents)?;
        debug!(
            "loaded {} notebooks and {} notes",
            store.folders.len(),
            store.notes.len()
        );
        Ok(store)
    }

    fn save_store(&self, store: &Store) -> Result<()> {
        let contents = serde_json::to_string_pretty(store)?;
        fs::write(self.store_path(), contents)?;
        Ok(())
    }
}
