//! Paths to tutorial content on the local filesystem.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::trace;

use mdtut_shared::{MdtutError, Result};

/// A path naming a lesson file or a course directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    /// Read the whole file as text.
    ///
    /// Only I/O failures are errors. Bytes that aren't valid UTF-8 are
    /// replaced with U+FFFD.
    pub fn read(&self) -> Result<String> {
        let bytes = std::fs::read(&self.0).map_err(|e| MdtutError::read(&self.0, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Names of the immediate entries of this directory, sorted by name.
    pub fn read_dir(&self) -> Result<Vec<OsString>> {
        let entries = std::fs::read_dir(&self.0).map_err(|e| MdtutError::read_dir(&self.0, e))?;

        let mut names = entries
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| MdtutError::read_dir(&self.0, e))?;
        names.sort();

        trace!(path = %self, entries = names.len(), "listed directory");
        Ok(names)
    }

    /// Join a child name onto this path. Joining onto an empty path yields the child.
    pub fn join(&self, child: impl AsRef<Path>) -> Self {
        Self(self.0.join(child))
    }

    /// Last element of the path, ignoring trailing separators.
    ///
    /// An empty path yields `"."` and a path made only of separators yields `"/"`.
    pub fn base(&self) -> String {
        let s = self.0.to_string_lossy();
        if s.is_empty() {
            return ".".to_string();
        }
        let trimmed = s.trim_end_matches('/');
        if trimmed.is_empty() {
            return "/".to_string();
        }
        match trimmed.rfind('/') {
            Some(i) => trimmed[i + 1..].to_string(),
            None => trimmed.to_string(),
        }
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FilePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for FilePath {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

impl From<&Path> for FilePath {
    fn from(p: &Path) -> Self {
        Self(p.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_names() {
        assert_eq!(FilePath::from("").base(), ".");
        assert_eq!(FilePath::from("hey").base(), "hey");
        assert_eq!(FilePath::from("a/b/intro.md").base(), "intro.md");
        assert_eq!(FilePath::from("a/b/").base(), "b");
        assert_eq!(FilePath::from("./").base(), ".");
        assert_eq!(FilePath::from("..").base(), "..");
        assert_eq!(FilePath::from("/").base(), "/");
    }

    #[test]
    fn join_onto_empty_path() {
        let p = FilePath::default().join("intro.md");
        assert_eq!(p, FilePath::from("intro.md"));
        assert_eq!(FilePath::from("docs").join("a.md").base(), "a.md");
    }

    #[test]
    fn read_dir_is_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["zeta.md", "alpha.md", "mid"] {
            std::fs::write(dir.path().join(name), "x").expect("write");
        }
        let names = FilePath::from(dir.path()).read_dir().expect("read_dir");
        assert_eq!(names, vec!["alpha.md", "mid", "zeta.md"]);
    }

    #[test]
    fn read_missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = FilePath::from(dir.path()).join("nope.md").read().unwrap_err();
        assert!(matches!(err, MdtutError::Read { .. }));
    }

    #[test]
    fn read_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("latin1.md"), b"# caf\xe9\n").expect("write");
        let text = FilePath::from(dir.path()).join("latin1.md").read().expect("read");
        assert_eq!(text, "# caf\u{fffd}\n");
    }

    #[test]
    fn read_directory_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = FilePath::from(dir.path()).read().unwrap_err();
        assert!(matches!(err, MdtutError::Read { .. }));
    }

    #[test]
    fn read_dir_missing_is_read_dir_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = FilePath::from(dir.path()).join("nope").read_dir().unwrap_err();
        assert!(matches!(err, MdtutError::ReadDir { .. }));
    }
}
