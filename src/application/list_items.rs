//! List notebooks and notes use case

use crate::domain::{Folder, ItemTypes, ListQuery, Note, SortField, SortOrder, TitlePattern};
use crate::error::{QuireError, Result};
use crate::infrastructure::{NotebookRepository, Store};
use log::debug;
use std::str::FromStr;

/// Pattern that always lists notebooks
pub const NOTEBOOKS_PATTERN: &str = "/";

/// Output format of the `ls` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = QuireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(QuireError::InvalidOption(format!(
                "Unknown format: '{}'. Expected \"text\" or \"json\"",
                s
            ))),
        }
    }
}

/// Validated `ls` options
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub limit: Option<usize>,
    pub sort: Option<SortField>,
    pub reverse: bool,
    pub types: Option<ItemTypes>,
    pub format: OutputFormat,
    pub long: bool,
}

/// State the listing depends on, loaded once from the repository
#[derive(Debug, Clone)]
pub struct ListContext {
    pub current_folder: Option<Folder>,
    pub uncompleted_todos_on_top: bool,
    pub datetime_format: String,
    pub store: Store,
}

/// A notebook together with the number of notes it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub folder: Folder,
    pub note_count: usize,
}

/// Result of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Folders(Vec<FolderEntry>),
    Notes(Vec<Note>),
}

/// Service for listing notebooks and notes
pub struct ListItemsService<R: NotebookRepository> {
    repository: R,
}

impl<R: NotebookRepository> ListItemsService<R> {
    /// Create a new list service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Load the current notebook and listing settings
    pub fn context(&self) -> Result<ListContext> {
        let config = self.repository.load_config()?;
        let store = self.repository.load_store()?;

        let current_folder = config
            .current_notebook
            .as_deref()
            .and_then(|id| store.folder(id))
            .cloned();

        Ok(ListContext {
            current_folder,
            uncompleted_todos_on_top: config.uncompleted_todos_on_top,
            datetime_format: config.datetime_format(),
            store,
        })
    }

    /// List notebooks when the pattern is `/` or nothing is selected,
    /// otherwise the notes of the current notebook.
    pub fn execute(
        &self,
        context: &ListContext,
        pattern: Option<&str>,
        options: &ListOptions,
    ) -> Result<Listing> {
        let store = &context.store;

        let folder = match (pattern, &context.current_folder) {
            (Some(NOTEBOOKS_PATTERN), _) | (_, None) => None,
            (_, Some(folder)) => Some(folder),
        };
        let title_pattern = pattern.filter(|p| *p != NOTEBOOKS_PATTERN && !p.is_empty());

        match folder {
            None => {
                let query = build_query(ListQuery::for_folders(), context, title_pattern, options)?;
                let folders = query.apply_to_folders(store.folders.clone());
                debug!("listing {} notebooks", folders.len());

                Ok(Listing::Folders(
                    folders
                        .into_iter()
                        .map(|folder| FolderEntry {
                            note_count: store.note_count(&folder.id),
                            folder,
                        })
                        .collect(),
                ))
            }
            Some(folder) => {
                let query = build_query(ListQuery::for_notes(), context, title_pattern, options)?;
                let notes = query.apply_to_notes(store.notes_in(&folder.id));
                debug!("listing {} notes of '{}'", notes.len(), folder.title);

                Ok(Listing::Notes(notes))
            }
        }
    }
}

/// Layer the user's options over a default query
fn build_query(
    mut query: ListQuery,
    context: &ListContext,
    title_pattern: Option<&str>,
    options: &ListOptions,
) -> Result<ListQuery> {
    query.limit = options.limit;

    if let Some(field) = options.sort {
        query.order_by = field;
        query.order_dir = SortOrder::Ascending;
    }

    if options.reverse {
        query.order_dir = query.order_dir.reversed();
    }

    if let Some(types) = options.types {
        query.item_types = types;
    }

    query.title_pattern = title_pattern.map(TitlePattern::new).transpose()?;
    query.uncompleted_todos_on_top = context.uncompleted_todos_on_top;

    Ok(query)
}
