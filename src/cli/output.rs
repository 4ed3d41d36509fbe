//! Output formatting utilities

use crate::application::Listing;
use crate::domain::{short_id, Folder, Note};
use crate::error::Result;
use crate::infrastructure::Config;
use chrono::{DateTime, Local, Utc};
use std::collections::HashSet;
use std::fmt::Write;

/// One table cell; numbers are right-aligned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(usize),
}

impl Cell {
    fn text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// Lay rows out as columns padded to their widest cell.
///
/// A column's alignment follows the type of its cell in the first row.
pub fn format_table(rows: &[Vec<Cell>]) -> String {
    let mut widths: Vec<usize> = Vec::new();
    let mut right_aligned: Vec<bool> = Vec::new();

    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            let width = cell.text().chars().count();
            if widths.len() <= idx {
                widths.push(width);
                right_aligned.push(matches!(cell, Cell::Number(_)));
            } else if widths[idx] < width {
                widths[idx] = width;
            }
        }
    }

    let mut output = String::new();
    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let width = widths[idx];
                if right_aligned[idx] {
                    format!("{:>width$}", cell.text(), width = width)
                } else {
                    format!("{:<width$}", cell.text(), width = width)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Format a timestamp in local time, falling back to RFC 3339 when the
/// configured format is not valid
pub fn format_local_time(time: &DateTime<Utc>, format: &str) -> String {
    let mut output = String::new();
    match write!(output, "{}", time.with_timezone(&Local).format(format)) {
        Ok(()) => output,
        Err(_) => time.with_timezone(&Local).to_rfc3339(),
    }
}

/// Format a listing as the `ls` text table
pub fn format_listing(listing: &Listing, long: bool, datetime_format: &str) -> String {
    let rows = match listing {
        Listing::Folders(entries) => {
            let mut titles = TitleDeduper::new(long);
            entries
                .iter()
                .map(|entry| {
                    let folder: &Folder = &entry.folder;
                    let mut row = Vec::new();
                    if long {
                        row.push(Cell::Text(short_id(&folder.id).to_string()));
                        row.push(Cell::Number(entry.note_count));
                        row.push(Cell::Text(format_local_time(
                            &folder.user_updated_time,
                            datetime_format,
                        )));
                    }
                    row.push(Cell::Text(titles.display_title(&folder.id, &folder.title)));
                    row
                })
                .collect::<Vec<_>>()
        }
        Listing::Notes(notes) => {
            let has_todos = notes.iter().any(|n| n.is_todo);
            let mut titles = TitleDeduper::new(long);
            notes
                .iter()
                .map(|note| {
                    let mut row = Vec::new();
                    if long {
                        row.push(Cell::Text(short_id(&note.id).to_string()));
                        row.push(Cell::Text(format_local_time(
                            &note.user_updated_time,
                            datetime_format,
                        )));
                    }
                    if has_todos {
                        row.push(Cell::Text(checkbox(note).to_string()));
                    }
                    row.push(Cell::Text(titles.display_title(&note.id, &note.title)));
                    row
                })
                .collect::<Vec<_>>()
        }
    };

    format_table(&rows)
}

/// Format a listing as a JSON array of items
pub fn format_listing_json(listing: &Listing) -> Result<String> {
    let json = match listing {
        Listing::Folders(entries) => {
            let folders: Vec<&Folder> = entries.iter().map(|e| &e.folder).collect();
            serde_json::to_string(&folders)?
        }
        Listing::Notes(notes) => serde_json::to_string(notes)?,
    };
    Ok(json)
}

/// Format config values for `config --list`
pub fn format_config(config: &Config) -> String {
    let mut output = String::new();
    output.push_str(&format!("editor = {}\n", config.editor));
    output.push_str(&format!(
        "uncompleted_todos_on_top = {}\n",
        config.uncompleted_todos_on_top
    ));
    output.push_str(&format!("date_format = {}\n", config.date_format));
    output.push_str(&format!("time_format = {}\n", config.time_format));
    if let Some(current) = &config.current_notebook {
        output.push_str(&format!("current_notebook = {}\n", current));
    }
    output.push_str(&format!("created = {}\n", config.created.to_rfc3339()));
    output
}

fn checkbox(note: &Note) -> &'static str {
    match (note.is_todo, note.todo_completed.is_some()) {
        (true, true) => "[X]",
        (true, false) => "[ ]",
        (false, _) => "   ",
    }
}

/// Appends the short id to empty or repeated titles.
///
/// Long listings already carry a short id column and are left untouched.
struct TitleDeduper {
    long: bool,
    seen: HashSet<String>,
}

impl TitleDeduper {
    fn new(long: bool) -> Self {
        TitleDeduper {
            long,
            seen: HashSet::new(),
        }
    }

    fn display_title(&mut self, id: &str, title: &str) -> String {
        if self.long {
            return title.to_string();
        }

        if title.is_empty() {
            format!("({})", short_id(id))
        } else if !self.seen.insert(title.to_string()) {
            format!("{} ({})", title, short_id(id))
        } else {
            title.to_string()
        }
    }
}
