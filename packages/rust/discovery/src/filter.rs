//! Predicates deciding whether a filesystem entry belongs in a tutorial.
//!
//! Rejections are not errors. Each one is logged at info level and the
//! candidate is simply left out of the tree.

use tracing::info;

use crate::FilePath;

/// Base names starting with one of these are never lessons
/// (editor backups, dotfiles, scratch files).
const BAD_LEADING_CHARS: [char; 3] = ['~', '.', '#'];

/// Directory names accepted even though they start with a dot.
const SPECIAL_DIR_NAMES: [&str; 3] = [".", "./", ".."];

/// Extension a lesson file must carry.
const LESSON_EXTENSION: &str = "md";

/// True if `path` is a regular markdown file worth reading as a lesson.
pub fn is_desirable_file(path: &FilePath) -> bool {
    let meta = match std::fs::metadata(path.as_path()) {
        Ok(meta) => meta,
        Err(e) => {
            info!(%path, reason = "stat failed", error = %e, "ignoring");
            return false;
        }
    };
    if meta.is_dir() {
        info!(%path, reason = "not a file", "ignoring");
        return false;
    }
    if !meta.file_type().is_file() {
        info!(%path, reason = "irregular file", "ignoring");
        return false;
    }
    let is_markdown = path
        .as_path()
        .extension()
        .is_some_and(|ext| ext == LESSON_EXTENSION);
    if !is_markdown {
        info!(%path, reason = "not markdown", "ignoring");
        return false;
    }
    if path.base().starts_with(BAD_LEADING_CHARS) {
        info!(%path, reason = "bad leading char", "ignoring");
        return false;
    }
    true
}

/// True if `path` is a directory worth scanning for lessons.
pub fn is_desirable_dir(path: &FilePath) -> bool {
    let meta = match std::fs::metadata(path.as_path()) {
        Ok(meta) => meta,
        Err(e) => {
            info!(%path, reason = "stat failed", error = %e, "ignoring");
            return false;
        }
    };
    if !meta.is_dir() {
        info!(%path, reason = "not a directory", "ignoring");
        return false;
    }
    let raw = path.as_path().to_string_lossy();
    let base = path.base();
    if SPECIAL_DIR_NAMES.contains(&&*raw) || SPECIAL_DIR_NAMES.contains(&base.as_str()) {
        return true;
    }
    if base.starts_with('.') {
        // .git and friends
        info!(%path, reason = "dot dir", "ignoring");
        return false;
    }
    true
}
