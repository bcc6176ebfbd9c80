//! Supporting helpers: display paths and colored line prefixes.

use owo_colors::OwoColorize;

/// Join a configured directory and file name the way paths are shown to the
/// user. `.` and empty directories are elided and a leading `./` is dropped,
/// so `(".", "messages.xlf")` yields `messages.xlf`.
pub fn join_display(dir: &str, file: &str) -> String {
    if file.starts_with('/') {
        return file.to_string();
    }
    let dir = dir.strip_prefix("./").unwrap_or(dir).trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}

/// File name without its last extension (`src/messages.xlf` → `messages`).
pub fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(i) => &name[..i],
    }
}

/// Directory part of a relative path, empty when there is none
/// (`sub/m.xlf` → `sub`).
pub fn parent_dir(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}

pub fn error_prefix(color: bool) -> String {
    if color {
        "ERROR:".red().bold().to_string()
    } else {
        "ERROR:".to_string()
    }
}

pub fn warn_prefix(color: bool) -> String {
    if color {
        "WARNING:".yellow().bold().to_string()
    } else {
        "WARNING:".to_string()
    }
}

pub fn debug_prefix(color: bool) -> String {
    if color {
        "*".bright_black().to_string()
    } else {
        "*".to_string()
    }
}
