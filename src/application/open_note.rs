//! Open a note body in the editor or print its file URL

use crate::application::notes::NoteService;
use crate::domain::path::to_file_protocol_path;
use crate::domain::Platform;
use crate::error::Result;
use crate::infrastructure::{EditorSession, NotebookRepository};
use std::path::PathBuf;

/// Service for reaching a note's body file
pub struct OpenNoteService<R: NotebookRepository + Clone> {
    repository: R,
}

impl<R: NotebookRepository + Clone> OpenNoteService<R> {
    /// Create a new open note service
    pub fn new(repository: R) -> Self {
        OpenNoteService { repository }
    }

    /// Resolve a note reference to its body file, recreating a missing body
    pub fn body_path(&self, reference: &str) -> Result<PathBuf> {
        let note = NoteService::new(self.repository.clone()).find(reference)?;
        let path = self.repository.body_path(&note);

        if !path.exists() {
            self.repository
                .write_body(&note, &format!("# {}\n", note.title))?;
        }

        Ok(path)
    }

    /// Open the note body in the configured editor
    pub fn edit(&self, reference: &str) -> Result<PathBuf> {
        let path = self.body_path(reference)?;
        let config = self.repository.load_config()?;

        EditorSession::new(config.get_editor()).open(&path)?;
        Ok(path)
    }

    /// `file://` URL of the note body for the given platform
    pub fn url(&self, reference: &str, platform: Platform) -> Result<String> {
        let path = std::path::absolute(self.body_path(reference)?)?;
        Ok(to_file_protocol_path(&path.to_string_lossy(), platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::notebooks::NotebookService;
    use crate::infrastructure::{Config, FileSystemRepository};
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my notes");
        fs::create_dir(&root).unwrap();
        let repo = FileSystemRepository::new(root);
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        NotebookService::new(repo.clone()).create("Work").unwrap();
        (temp, repo)
    }

    #[test]
    fn test_body_path_recreates_missing_body() {
        let (_temp, repo) = setup();
        let note = NoteService::new(repo.clone()).create("Plan", false).unwrap();
        fs::remove_file(repo.body_path(&note)).unwrap();

        let service = OpenNoteService::new(repo.clone());
        let path = service.body_path("plan").unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).unwrap(), "# Plan\n");
    }

    #[test]
    fn test_url_encodes_spaces() {
        let (_temp, repo) = setup();
        let note = NoteService::new(repo.clone()).create("Plan", false).unwrap();

        let service = OpenNoteService::new(repo.clone());
        let url = service.url("Plan", Platform::Posix).unwrap();
        assert!(url.starts_with("file://"));
        assert!(url.contains("my%20notes"));
        assert!(url.ends_with(&format!("/{}.md", note.id)));
    }
}
