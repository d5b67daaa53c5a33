//! # Config Folder Paths
//!
//! Users type folder paths by hand, often copied from a Windows explorer
//! window. Every path string is normalized to forward slashes before it is
//! checked or used, and a [`FolderPath`] can only be constructed for a
//! directory that exists at construction time (or for the current working
//! directory, which is taken as-is).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::PathError;

/// Replace every backslash in `input` with a forward slash.
///
/// No other cleanup happens: surrounding whitespace, `.` and `..`
/// components, and repeated separators are left exactly as typed.
pub fn normalize_separators(input: &str) -> String {
    input.replace('\\', "/")
}

/// A directory to scan for JSON documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPath(PathBuf);

impl FolderPath {
    /// Normalize `input` and accept it only if it names an existing directory.
    pub fn existing(input: &str) -> Result<Self, PathError> {
        let path = PathBuf::from(normalize_separators(input));
        if path.is_dir() {
            Ok(Self(path))
        } else {
            Err(PathError::NotADirectory(path))
        }
    }

    /// The process's current working directory.
    pub fn current_dir() -> Result<Self, PathError> {
        std::env::current_dir()
            .map(Self)
            .map_err(PathError::CurrentDir)
    }

    /// Wrap a directory the caller already knows to be the working directory.
    pub(crate) fn from_cwd(cwd: PathBuf) -> Self {
        Self(cwd)
    }

    /// Borrow the underlying path.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume self and return the inner path.
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for FolderPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
