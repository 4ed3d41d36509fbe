//! Listing queries: filtering, ordering and limiting notebooks and notes

use crate::domain::item::{Folder, Note};
use crate::error::{QuireError, Result};
use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use std::cmp::Ordering;
use std::str::FromStr;

/// Field used to order a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    CreatedTime,
    UpdatedTime,
    UserUpdatedTime,
}

impl FromStr for SortField {
    type Err = QuireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "created_time" => Ok(SortField::CreatedTime),
            "updated_time" => Ok(SortField::UpdatedTime),
            "user_updated_time" => Ok(SortField::UserUpdatedTime),
            _ => Err(QuireError::InvalidOption(format!(
                "Unknown sort field: '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Which notes a listing keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTypes {
    pub notes: bool,
    pub todos: bool,
}

impl Default for ItemTypes {
    fn default() -> Self {
        ItemTypes {
            notes: true,
            todos: true,
        }
    }
}

impl ItemTypes {
    pub fn accepts(&self, note: &Note) -> bool {
        if note.is_todo {
            self.todos
        } else {
            self.notes
        }
    }
}

impl FromStr for ItemTypes {
    type Err = QuireError;

    /// Parse a type selector such as `n`, `t` or `nt`
    fn from_str(s: &str) -> Result<Self> {
        let mut types = ItemTypes {
            notes: false,
            todos: false,
        };

        for c in s.chars() {
            match c {
                'n' => types.notes = true,
                't' => types.todos = true,
                _ => {
                    return Err(QuireError::InvalidOption(format!(
                        "Unknown item type: '{}'",
                        c
                    )))
                }
            }
        }

        if !types.notes && !types.todos {
            return Err(QuireError::InvalidOption(
                "Empty item type selector".to_string(),
            ));
        }

        Ok(types)
    }
}

/// Case-insensitive whole-title glob where `*` matches any run of characters
#[derive(Debug, Clone)]
pub struct TitlePattern {
    regex: Regex,
}

impl TitlePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        let regex = RegexBuilder::new(&format!("^{}$", body))
            .case_insensitive(true)
            .build()
            .map_err(|e| QuireError::InvalidOption(format!("Invalid title pattern: {}", e)))?;

        Ok(TitlePattern { regex })
    }

    pub fn matches(&self, title: &str) -> bool {
        self.regex.is_match(title)
    }
}

/// Fully resolved listing query
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub order_by: SortField,
    pub order_dir: SortOrder,
    pub case_insensitive: bool,
    pub item_types: ItemTypes,
    pub title_pattern: Option<TitlePattern>,
    pub uncompleted_todos_on_top: bool,
}

impl ListQuery {
    /// Default query for notes: most recently edited first
    pub fn for_notes() -> Self {
        ListQuery {
            limit: None,
            order_by: SortField::UserUpdatedTime,
            order_dir: SortOrder::Descending,
            case_insensitive: true,
            item_types: ItemTypes::default(),
            title_pattern: None,
            uncompleted_todos_on_top: true,
        }
    }

    /// Default query for notebooks: alphabetical
    pub fn for_folders() -> Self {
        ListQuery {
            order_by: SortField::Title,
            order_dir: SortOrder::Ascending,
            ..ListQuery::for_notes()
        }
    }

    fn title_matches(&self, title: &str) -> bool {
        self.title_pattern
            .as_ref()
            .map_or(true, |pattern| pattern.matches(title))
    }

    fn compare(&self, a: Sortable<'_>, b: Sortable<'_>) -> Ordering {
        let ordering = match self.order_by {
            SortField::Title if self.case_insensitive => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(b.title)),
            SortField::Title => a.title.cmp(b.title),
            SortField::CreatedTime => a.created_time.cmp(&b.created_time),
            SortField::UpdatedTime => a.updated_time.cmp(&b.updated_time),
            SortField::UserUpdatedTime => a.user_updated_time.cmp(&b.user_updated_time),
        };

        match self.order_dir {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Filter, order and limit notebooks
    pub fn apply_to_folders(&self, folders: Vec<Folder>) -> Vec<Folder> {
        let mut items: Vec<Folder> = folders
            .into_iter()
            .filter(|f| self.title_matches(&f.title))
            .collect();

        items.sort_by(|a, b| self.compare(Sortable::from(a), Sortable::from(b)));
        self.truncate(items)
    }

    /// Filter, order and limit notes
    pub fn apply_to_notes(&self, notes: Vec<Note>) -> Vec<Note> {
        let mut items: Vec<Note> = notes
            .into_iter()
            .filter(|n| self.item_types.accepts(n) && self.title_matches(&n.title))
            .collect();

        items.sort_by(|a, b| {
            let open_first = if self.uncompleted_todos_on_top {
                b.is_open_todo().cmp(&a.is_open_todo())
            } else {
                Ordering::Equal
            };
            open_first.then_with(|| self.compare(Sortable::from(a), Sortable::from(b)))
        });
        self.truncate(items)
    }

    fn truncate<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(limit) = self.limit {
            items.truncate(limit);
        }
        items
    }
}

#[derive(Clone, Copy)]
struct Sortable<'a> {
    title: &'a str,
    created_time: DateTime<Utc>,
    updated_time: DateTime<Utc>,
    user_updated_time: DateTime<Utc>,
}

impl<'a> From<&'a Folder> for Sortable<'a> {
    fn from(folder: &'a Folder) -> Self {
        Sortable {
            title: &folder.title,
            created_time: folder.created_time,
            updated_time: folder.updated_time,
            user_updated_time: folder.user_updated_time,
        }
    }
}

impl<'a> From<&'a Note> for Sortable<'a> {
    fn from(note: &'a Note) -> Self {
        Sortable {
            title: &note.title,
            created_time: note.created_time,
            updated_time: note.updated_time,
            user_updated_time: note.user_updated_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn note(title: &str, is_todo: bool, minutes: i64) -> Note {
        Note::new("folder", title, is_todo, at(minutes))
    }

    fn titles(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn test_item_types_parse() {
        assert_eq!(
            "n".parse::<ItemTypes>().unwrap(),
            ItemTypes {
                notes: true,
                todos: false
            }
        );
        assert_eq!(
            "t".parse::<ItemTypes>().unwrap(),
            ItemTypes {
                notes: false,
                todos: true
            }
        );
        assert_eq!("nt".parse::<ItemTypes>().unwrap(), ItemTypes::default());
        assert!("x".parse::<ItemTypes>().is_err());
        assert!("".parse::<ItemTypes>().is_err());
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!("title".parse::<SortField>().unwrap(), SortField::Title);
        assert_eq!(
            "UPDATED_TIME".parse::<SortField>().unwrap(),
            SortField::UpdatedTime
        );
        assert!("size".parse::<SortField>().is_err());
    }

    #[test]
    fn test_title_pattern_glob() {
        let pattern = TitlePattern::new("meet*").unwrap();
        assert!(pattern.matches("Meeting notes"));
        assert!(pattern.matches("meet"));
        assert!(!pattern.matches("Team meeting"));

        let exact = TitlePattern::new("a.b").unwrap();
        assert!(exact.matches("A.B"));
        assert!(!exact.matches("axb"));
    }

    #[test]
    fn test_default_note_order_newest_first() {
        let notes = vec![note("old", false, 0), note("new", false, 10), note("mid", false, 5)];
        let mut query = ListQuery::for_notes();
        query.uncompleted_todos_on_top = false;

        assert_eq!(titles(&query.apply_to_notes(notes)), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_title_sort_case_insensitive() {
        let notes = vec![note("beta", false, 0), note("Alpha", false, 1), note("gamma", false, 2)];
        let query = ListQuery {
            order_by: SortField::Title,
            order_dir: SortOrder::Ascending,
            ..ListQuery::for_notes()
        };

        assert_eq!(titles(&query.apply_to_notes(notes)), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_uncompleted_todos_on_top() {
        let mut done = note("done todo", true, 30);
        done.todo_completed = Some(at(31));
        let notes = vec![
            note("plain", false, 20),
            note("open todo", true, 0),
            done,
        ];

        let query = ListQuery::for_notes();
        assert_eq!(
            titles(&query.apply_to_notes(notes)),
            vec!["open todo", "done todo", "plain"]
        );
    }

    #[test]
    fn test_type_filter_and_limit() {
        let notes = vec![
            note("a", true, 0),
            note("b", false, 1),
            note("c", true, 2),
            note("d", true, 3),
        ];
        let query = ListQuery {
            limit: Some(2),
            item_types: "t".parse().unwrap(),
            uncompleted_todos_on_top: false,
            ..ListQuery::for_notes()
        };

        assert_eq!(titles(&query.apply_to_notes(notes)), vec!["d", "c"]);
    }

    #[test]
    fn test_folders_alphabetical_and_reversible() {
        let folders = vec![
            Folder::new("Work", at(0)),
            Folder::new("archive", at(1)),
            Folder::new("Personal", at(2)),
        ];

        let query = ListQuery::for_folders();
        let sorted: Vec<String> = query
            .apply_to_folders(folders.clone())
            .into_iter()
            .map(|f| f.title)
            .collect();
        assert_eq!(sorted, vec!["archive", "Personal", "Work"]);

        let reversed = ListQuery {
            order_dir: SortOrder::Ascending.reversed(),
            ..ListQuery::for_folders()
        };
        let sorted: Vec<String> = reversed
            .apply_to_folders(folders)
            .into_iter()
            .map(|f| f.title)
            .collect();
        assert_eq!(sorted, vec!["Work", "Personal", "archive"]);
    }
}
