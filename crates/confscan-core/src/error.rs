//! # Error Types
//!
//! Errors raised while resolving paths, prompting, and loading documents.
//! A file that is not JSON is never an error; it is skipped by the loader.

use std::path::PathBuf;

use thiserror::Error;

/// A path that does not name what the caller needs.
#[derive(Error, Debug)]
pub enum PathError {
    /// Nothing exists at the path, or it is not a directory.
    #[error("not an existing directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Failure while reading an answer from the console.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Input ended before a usable answer was given.
    #[error("input closed while waiting for {0}")]
    Eof(&'static str),

    /// Reading input or writing a prompt failed.
    #[error("console io error: {0}")]
    Io(#[from] std::io::Error),

    /// A blank answer asked for the working directory, which is unavailable.
    #[error(transparent)]
    CurrentDir(#[from] PathError),
}

/// Failure while scanning a config folder.
///
/// Only conditions the loader does not recover from end up here. Unparseable
/// content never does.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The folder itself could not be listed.
    #[error("cannot list folder '{}': {source}", .path.display())]
    ListFolder {
        /// Folder that was being listed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be read (a subdirectory, a permission
    /// problem, a file removed mid-scan).
    #[error("cannot read entry '{}': {source}", .path.display())]
    ReadEntry {
        /// Entry that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
