//! Create and select notebooks

use crate::domain::{find_item, Folder};
use crate::error::{QuireError, Result};
use crate::infrastructure::NotebookRepository;
use chrono::Utc;
use log::info;

/// Service for notebook management
pub struct NotebookService<R: NotebookRepository> {
    repository: R,
}

impl<R: NotebookRepository> NotebookService<R> {
    pub fn new(repository: R) -> Self {
        NotebookService { repository }
    }

    /// Create a notebook and make it the current one
    pub fn create(&self, title: &str) -> Result<Folder> {
        let title = title.trim();
        if title.is_empty() {
            return Err(QuireError::InvalidOption(
                "Notebook title cannot be empty".to_string(),
            ));
        }

        let mut store = self.repository.load_store()?;
        let folder = Folder::new(title, Utc::now());
        store.folders.push(folder.clone());
        self.repository.save_store(&store)?;
        info!("created notebook {} '{}'", folder.id, folder.title);

        self.select_folder(&folder)?;
        Ok(folder)
    }

    /// Make the notebook matching `reference` the current one
    pub fn select(&self, reference: &str) -> Result<Folder> {
        let store = self.repository.load_store()?;
        let folder = find_item(&store.folders, reference)?.clone();
        self.select_folder(&folder)?;
        Ok(folder)
    }

    fn select_folder(&self, folder: &Folder) -> Result<()> {
        let mut config = self.repository.load_config()?;
        config.current_notebook = Some(folder.id.clone());
        self.repository.save_config(&config)
    }
}

/// Resolve the selected notebook, failing when none is selected
pub fn current_folder<R: NotebookRepository>(repository: &R) -> Result<Folder> {
    let config = repository.load_config()?;
    let store = repository.load_store()?;

    config
        .current_notebook
        .as_deref()
        .and_then(|id| store.folder(id))
        .cloned()
        .ok_or(QuireError::NoNotebookSelected)
}
