//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_items;
pub mod manage_config;
pub mod notebooks;
pub mod notes;
pub mod open_note;

pub use list_items::{ListContext, ListItemsService, ListOptions, Listing, OutputFormat};
pub use manage_config::ConfigService;
pub use notebooks::NotebookService;
pub use notes::NoteService;
pub use open_note::OpenNoteService;
