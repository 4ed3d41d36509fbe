//! Editor integration for opening note files

use crate::domain::path::{extract_executable_path, quote_path, unquote_path};
use crate::error::{QuireError, Result};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Session for opening files in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and return immediately
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();
        debug!("launching editor {:?} with args {:?}", program, args);

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // cmd resolves .bat and .cmd editors; the line is passed raw so the
        // std argument quoting does not wrap the already quoted paths again
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;

            Command::new("cmd")
                .args(["/S", "/C"])
                .raw_arg(cmd_line(&program, &all_args))
                .spawn()
                .map_err(|e| {
                    QuireError::Editor(format!("Failed to launch editor '{}': {}", program, e))
                })?;
        }

        #[cfg(not(windows))]
        {
            Command::new(&program)
                .args(&all_args)
                .spawn()
                .map_err(|e| {
                    QuireError::Editor(format!("Failed to launch editor '{}': {}", program, e))
                })?;
        }

        Ok(())
    }

    /// Split the command into an unquoted program path and its arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let command = self.command.trim();
        let executable = extract_executable_path(command);

        if executable.is_empty() {
            return (Self::fallback_program().to_string(), vec![]);
        }

        let program = unquote_path(&executable);
        let program = program.trim_matches('\'').to_string();
        let args = command[executable.len()..]
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        (program, args)
    }

    fn fallback_program() -> &'static str {
        if cfg!(windows) {
            "notepad"
        } else {
            "nano"
        }
    }
}

/// Command line handed to `cmd /S /C`: each part quoted once, and the whole
/// line wrapped in the outer quotes that `/S` strips.
#[cfg_attr(not(windows), allow(dead_code))]
fn cmd_line(program: &str, args: &[String]) -> String {
    let parts: Vec<String> = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(quote_path)
        .collect();
    format!("\"{}\"", parts.join(" "))
}
