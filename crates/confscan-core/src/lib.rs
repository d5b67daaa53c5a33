//! # confscan-core — Config Folder Scanning
//!
//! The pieces of `confscan` that do not depend on a schema library:
//!
//! - [`path`] — separator normalization and the [`FolderPath`] newtype,
//!   which can only be built for a directory that exists.
//! - [`resolve`] — the interactive folder and schema-file prompts, generic
//!   over any `BufRead`/`Write` pair so they run against stdin/stdout in the
//!   binary and against byte buffers in tests.
//! - [`loader`] — enumerates the direct entries of a folder and keeps the
//!   ones whose contents parse as JSON.
//! - [`document`] — the [`ParsedDocument`] produced by the loader.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `confscan-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Nothing here writes to the filesystem.

pub mod document;
pub mod error;
pub mod loader;
pub mod path;
pub mod resolve;

pub use document::ParsedDocument;
pub use error::{LoadError, PathError, PromptError};
pub use loader::{is_valid_json, load_documents, parse_document};
pub use path::{normalize_separators, FolderPath};
pub use resolve::{resolve_folder, resolve_schema_file};
