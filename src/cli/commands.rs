//! CLI command definitions

use crate::application::{ListOptions, OutputFormat};
use crate::domain::{ItemTypes, Platform, SortField};
use crate::error::{QuireError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "Terminal notebook application", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a notebook and select it
    Mkbook {
        /// Notebook title
        title: String,
    },

    /// Select the current notebook
    Use {
        /// Notebook title or id prefix
        notebook: String,
    },

    /// Create a note in the current notebook
    Mknote {
        /// Note title
        title: String,
    },

    /// Create a to-do in the current notebook
    Mktodo {
        /// To-do title
        title: String,
    },

    /// Mark a to-do as completed
    Done {
        /// To-do title or id prefix
        note: String,
    },

    /// Mark a to-do as not completed
    Undone {
        /// To-do title or id prefix
        note: String,
    },

    /// Displays the notes in the current notebook. Use `ls /` to display the list of notebooks.
    Ls(LsArgs),

    /// Open a note in the editor
    Edit {
        /// Note title or id prefix
        note: String,
    },

    /// Print the file:// URL of a note
    Url {
        /// Note title or id prefix
        note: String,

        /// Path convention of the URL (win32 or posix, default: host)
        #[arg(long)]
        platform: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct LsArgs {
    /// Note title pattern (`*` matches anything), or `/` for notebooks
    #[arg(value_name = "NOTE_PATTERN")]
    pub pattern: Option<String>,

    /// Displays only the first top <NUM> notes
    #[arg(short = 'n', long, value_name = "NUM")]
    pub limit: Option<usize>,

    /// Sorts the items by <FIELD> (eg. title, updated_time, created_time)
    #[arg(short, long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Reverses the sorting order
    #[arg(short, long)]
    pub reverse: bool,

    /// Displays only the items of the specific type(s): `n` for notes, `t` for to-dos, `nt` for both
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub item_type: Option<String>,

    /// Either "text" or "json"
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Use long list format: ID, NOTE_COUNT (for notebooks), DATE, TODO_CHECKED (for to-dos), TITLE
    #[arg(short, long)]
    pub long: bool,
}

impl LsArgs {
    /// Validate raw arguments into listing options
    pub fn to_options(&self) -> Result<ListOptions> {
        Ok(ListOptions {
            // 0 means no limit
            limit: self.limit.filter(|n| *n > 0),
            sort: self.sort.as_deref().map(str::parse::<SortField>).transpose()?,
            reverse: self.reverse,
            types: self
                .item_type
                .as_deref()
                .map(str::parse::<ItemTypes>)
                .transpose()?,
            format: self.format.parse::<OutputFormat>()?,
            long: self.long,
        })
    }
}

/// Parse the `--platform` flag, defaulting to the host platform
pub fn parse_platform(value: Option<&str>) -> Result<Platform> {
    match value {
        Some(v) => v.parse().map_err(QuireError::InvalidOption),
        None => Ok(Platform::current()),
    }
}
