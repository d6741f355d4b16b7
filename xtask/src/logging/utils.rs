//! Log-file location, ANSI stripping and timestamps.
use std::fs;
use std::path::PathBuf;

/// Directory name under the cache root.
const CACHE_SUBDIR: &str = "serde-url-xtask";

/// Remove CSI escape sequences (colours, cursor movement) from `s`.
///
/// A lone `ESC` followed by anything other than `[` drops both characters.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.next() == Some('[') {
            for inner in chars.by_ref() {
                if ('@'..='~').contains(&inner) {
                    break;
                }
            }
        }
    }
    out
}

/// `$XDG_CACHE_HOME/serde-url-xtask/` (or `~/.cache/serde-url-xtask/`), created on demand.
pub(super) fn cache_dir() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CACHE_HOME").map_or_else(
        || {
            std::env::var_os("HOME")
                .or_else(|| std::env::var_os("USERPROFILE"))
                .map_or_else(|| PathBuf::from("."), PathBuf::from)
                .join(".cache")
        },
        PathBuf::from,
    );
    let dir = base.join(CACHE_SUBDIR);
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Log file for one command, e.g. `.../serde-url-xtask/docs.log`.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(cache_dir()?.join(format!("{command}.log")))
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
pub(super) fn format_utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current UTC time as `HH:MM:SS`.
pub(super) fn format_utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}
