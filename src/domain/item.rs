//! Notebook and note models

use crate::error::{QuireError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of id characters shown to users
pub const SHORT_ID_LENGTH: usize = 5;

/// Abbreviated form of an item id
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LENGTH) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Generate a new item id (32 lowercase hex characters)
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// A notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub title: String,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
    pub user_updated_time: DateTime<Utc>,
}

impl Folder {
    pub fn new(title: &str, now: DateTime<Utc>) -> Self {
        Folder {
            id: new_id(),
            title: title.to_string(),
            created_time: now,
            updated_time: now,
            user_updated_time: now,
        }
    }
}

/// A note or to-do living in a notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub parent_id: String,
    pub title: String,
    #[serde(default)]
    pub is_todo: bool,
    #[serde(default)]
    pub todo_completed: Option<DateTime<Utc>>,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
    pub user_updated_time: DateTime<Utc>,
}

impl Note {
    pub fn new(parent_id: &str, title: &str, is_todo: bool, now: DateTime<Utc>) -> Self {
        Note {
            id: new_id(),
            parent_id: parent_id.to_string(),
            title: title.to_string(),
            is_todo,
            todo_completed: None,
            created_time: now,
            updated_time: now,
            user_updated_time: now,
        }
    }

    /// File name of the markdown body, relative to the store root
    pub fn body_filename(&self) -> String {
        format!("{}.md", self.id)
    }

    /// True for to-dos that have not been completed yet
    pub fn is_open_todo(&self) -> bool {
        self.is_todo && self.todo_completed.is_none()
    }

    /// Mark the to-do completed (`Some`) or open again (`None`)
    pub fn set_completed(&mut self, completed: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        self.todo_completed = completed;
        self.updated_time = now;
        self.user_updated_time = now;
    }
}

/// Anything that can be matched by title or id prefix
pub trait Titled {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
}

impl Titled for Folder {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Titled for Note {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Find a single item by exact id, id prefix or case-insensitive title.
pub fn find_item<'a, T: Titled>(items: &'a [T], reference: &str) -> Result<&'a T> {
    if reference.is_empty() {
        return Err(QuireError::ItemNotFound(String::new()));
    }

    if let Some(item) = items.iter().find(|item| item.id() == reference) {
        return Ok(item);
    }

    let lowered = reference.to_lowercase();
    let mut matches: Vec<&T> = items
        .iter()
        .filter(|item| item.title().to_lowercase() == lowered)
        .collect();

    if matches.is_empty() {
        matches = items
            .iter()
            .filter(|item| item.id().starts_with(reference))
            .collect();
    }

    match matches.len() {
        0 => Err(QuireError::ItemNotFound(reference.to_string())),
        1 => Ok(matches[0]),
        count => Err(QuireError::AmbiguousItem {
            reference: reference.to_string(),
            count,
        }),
    }
}
