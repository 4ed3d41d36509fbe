//! Path string helpers: shell quoting, executable extraction and file URLs
//!
//! All functions are pure and total over string input. Malformed input such
//! as an unbalanced quote is passed through rather than rejected.
//!
//! # Examples
//!
//! ```
//! use quire::domain::path::{quote_path, unquote_path};
//!
//! let quoted = quote_path("/my/path with spaces");
//! assert_eq!(quoted, "\"/my/path with spaces\"");
//! assert_eq!(unquote_path(&quoted), "/my/path with spaces");
//! ```

use std::str::FromStr;

/// Path conventions used when building file URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Backslash separators and drive letters
    Win32,
    /// Forward slash separators, absolute paths start with `/`
    Posix,
}

impl Platform {
    /// Platform of the running binary
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Win32
        } else {
            Platform::Posix
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win32" | "windows" => Ok(Platform::Win32),
            "posix" | "linux" | "darwin" | "macos" | "unix" => Ok(Platform::Posix),
            _ => Err(format!(
                "Invalid platform: '{}'. Valid platforms are: win32, posix",
                s
            )),
        }
    }
}

/// Wrap a path in double quotes when it contains whitespace or a quote.
///
/// Embedded double quotes are escaped with a backslash. Paths that need no
/// quoting, including Windows paths full of backslashes, are returned as is.
pub fn quote_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    if !path.chars().any(|c| c.is_whitespace() || c == '"') {
        return path.to_string();
    }

    format!("\"{}\"", path.replace('"', "\\\""))
}

/// Reverse [`quote_path`]: strip one layer of surrounding quotes and
/// un-escape `\"`.
pub fn unquote_path(quoted: &str) -> String {
    let inner = if quoted.len() >= 2 && quoted.starts_with('"') && quoted.ends_with('"') {
        &quoted[1..quoted.len() - 1]
    } else {
        quoted
    };

    inner.replace("\\\"", "\"")
}

/// Return the executable token at the start of a command line.
///
/// A leading double or single quote keeps the whole quoted segment, quotes
/// included, so `"/my/cmd and space" -w` yields `"/my/cmd and space"`.
/// Without a leading quote the token ends at the first space.
pub fn extract_executable_path(command: &str) -> String {
    let mut chars = command.char_indices();

    let quote = match chars.next() {
        None => return String::new(),
        Some((_, c)) if c == '"' || c == '\'' => c,
        Some(_) => {
            let end = command.find(' ').unwrap_or(command.len());
            return command[..end].to_string();
        }
    };

    for (idx, c) in chars {
        if c == quote {
            return command[..idx + c.len_utf8()].to_string();
        }
    }

    // Unterminated quote
    command.to_string()
}

/// Build a `file://` URL for a native path.
///
/// Windows paths have their separators flipped and get a `file:///` prefix
/// so the drive letter lands in the path component. Every byte outside the
/// safe table is percent-encoded; see [`is_url_safe`].
pub fn to_file_protocol_path(path: &str, platform: Platform) -> String {
    match platform {
        Platform::Win32 => {
            let normalized = path.replace('\\', "/");
            format!("file:///{}", percent_encode(&normalized))
        }
        Platform::Posix => format!("file://{}", percent_encode(path)),
    }
}

/// Characters left untouched by the file URL encoder.
///
/// This is the URI character set minus `+` and `'`, which some consumers
/// treat as a space or a string delimiter.
pub fn is_url_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b';' | b','
                | b'/'
                | b'?'
                | b':'
                | b'@'
                | b'&'
                | b'='
                | b'$'
                | b'-'
                | b'_'
                | b'.'
                | b'!'
                | b'~'
                | b'*'
                | b'('
                | b')'
                | b'#'
        )
}

fn percent_encode(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for byte in input.bytes() {
        if is_url_safe(byte) {
            output.push(byte as char);
        } else {
            output.push_str(&format!("%{:02X}", byte));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_and_unquote_paths() {
        let cases = [
            ("", ""),
            ("/my/path", "/my/path"),
            ("/my/path with spaces", "\"/my/path with spaces\""),
            ("/my/weird\"path", "\"/my/weird\\\"path\""),
            ("c:\\Windows\\test.dll", "c:\\Windows\\test.dll"),
            ("c:\\Windows\\test test.dll", "\"c:\\Windows\\test test.dll\""),
        ];

        for (input, expected) in cases {
            assert_eq!(quote_path(input), expected, "quoting {:?}", input);
            assert_eq!(unquote_path(&quote_path(input)), input, "round trip {:?}", input);
        }
    }

    #[test]
    fn test_quote_path_tabs_count_as_whitespace() {
        assert_eq!(quote_path("/tab\there"), "\"/tab\there\"");
    }

    #[test]
    fn test_unquote_unbalanced_passes_through() {
        assert_eq!(unquote_path("\"/half/open"), "\"/half/open");
        assert_eq!(unquote_path("\""), "\"");
        assert_eq!(unquote_path(""), "");
    }

    #[test]
    fn test_unquote_keeps_trailing_backslash() {
        let path = "C:\\my dir\\";
        assert_eq!(unquote_path(&quote_path(path)), path);
    }

    #[test]
    fn test_extract_executable_path() {
        let cases = [
            ("", ""),
            ("/my/cmd -some -args", "/my/cmd"),
            ("\"/my/cmd\" -some -args", "\"/my/cmd\""),
            ("\"/my/cmd\"", "\"/my/cmd\""),
            ("\"/my/cmd and space\" -some -flags", "\"/my/cmd and space\""),
            ("\"\" -some -flags", "\"\""),
        ];

        for (input, expected) in cases {
            assert_eq!(extract_executable_path(input), expected, "command {:?}", input);
        }
    }

    #[test]
    fn test_extract_executable_single_quotes() {
        assert_eq!(
            extract_executable_path("'/opt/my editor' --wait"),
            "'/opt/my editor'"
        );
    }

    #[test]
    fn test_extract_executable_unterminated_quote() {
        assert_eq!(
            extract_executable_path("\"/never/closed -x"),
            "\"/never/closed -x"
        );
    }

    #[test]
    fn test_file_url_win32() {
        let cases = [
            ("C:\\handle\\space test", "file:///C:/handle/space%20test"),
            ("C:\\escapeplus\\+", "file:///C:/escapeplus/%2B"),
            ("C:\\handle\\single quote'", "file:///C:/handle/single%20quote%27"),
        ];

        for (input, expected) in cases {
            assert_eq!(to_file_protocol_path(input, Platform::Win32), expected);
        }
    }

    #[test]
    fn test_file_url_posix() {
        let cases = [
            ("/handle/space test", "file:///handle/space%20test"),
            ("/escapeplus/+", "file:///escapeplus/%2B"),
            ("/handle/single quote'", "file:///handle/single%20quote%27"),
        ];

        for (input, expected) in cases {
            assert_eq!(to_file_protocol_path(input, Platform::Posix), expected);
        }
    }

    #[test]
    fn test_file_url_safe_paths_unchanged() {
        assert_eq!(
            to_file_protocol_path("/usr/share/doc/a-b_c.d~(1)", Platform::Posix),
            "file:///usr/share/doc/a-b_c.d~(1)"
        );
        assert_eq!(
            to_file_protocol_path("D:\\notes\\todo.md", Platform::Win32),
            "file:///D:/notes/todo.md"
        );
    }

    #[test]
    fn test_file_url_non_ascii_encoded_per_byte() {
        assert_eq!(
            to_file_protocol_path("/notes/café", Platform::Posix),
            "file:///notes/caf%C3%A9"
        );
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("win32".parse::<Platform>().unwrap(), Platform::Win32);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Posix);
        assert!("beos".parse::<Platform>().is_err());
    }
}
