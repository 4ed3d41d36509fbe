//! Create notes and to-dos, and toggle to-do completion

use crate::application::notebooks::current_folder;
use crate::domain::{find_item, Note};
use crate::error::{QuireError, Result};
use crate::infrastructure::NotebookRepository;
use chrono::Utc;
use log::info;

/// Service for notes in the current notebook
pub struct NoteService<R: NotebookRepository> {
    repository: R,
}

impl<R: NotebookRepository> NoteService<R> {
    pub fn new(repository: R) -> Self {
        NoteService { repository }
    }

    /// Create a note (or to-do) in the current notebook along with its body file
    pub fn create(&self, title: &str, is_todo: bool) -> Result<Note> {
        let folder = current_folder(&self.repository)?;
        let title = title.trim();

        let mut store = self.repository.load_store()?;
        let note = Note::new(&folder.id, title, is_todo, Utc::now());
        store.notes.push(note.clone());
        self.repository.save_store(&store)?;
        self.repository
            .write_body(&note, &format!("# {}\n", note.title))?;

        info!(
            "created {} {} in notebook '{}'",
            if is_todo { "to-do" } else { "note" },
            note.id,
            folder.title
        );
        Ok(note)
    }

    /// Find a note of the current notebook by title or id prefix
    pub fn find(&self, reference: &str) -> Result<Note> {
        let folder = current_folder(&self.repository)?;
        let notes = self.repository.load_store()?.notes_in(&folder.id);
        find_item(&notes, reference).cloned()
    }

    /// Mark a to-do completed or open again
    pub fn set_completed(&self, reference: &str, completed: bool) -> Result<Note> {
        let target = self.find(reference)?;
        if !target.is_todo {
            return Err(QuireError::InvalidOption(format!(
                "'{}' is a note, not a to-do",
                target.title
            )));
        }

        let mut store = self.repository.load_store()?;
        let now = Utc::now();
        let note = store
            .note_mut(&target.id)
            .ok_or_else(|| QuireError::ItemNotFound(reference.to_string()))?;
        note.set_completed(completed.then_some(now), now);
        let updated = note.clone();

        self.repository.save_store(&store)?;
        Ok(updated)
    }
}
