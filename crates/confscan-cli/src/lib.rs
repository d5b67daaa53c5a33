//! # confscan-cli — Config Folder Scanner
//!
//! Provides the `confscan` binary. A run is one straight line:
//!
//! 1. Resolve the config folder (`--folder`, or ask on the console).
//! 2. Optionally resolve and compile a schema (`--schema`, `--prompt-schema`).
//! 3. Load every JSON document in the folder, echoing each entry name.
//! 4. Print the documents, then the schema verdicts if a schema was used.
//!
//! ```bash
//! confscan
//! confscan --folder ./configs --schema ./config.schema.json
//! confscan --prompt-schema --pretty -v
//! ```
//!
//! Argument parsing lives in `main.rs`; [`scan`] does the work and
//! [`report`] owns every line written to stdout after scanning.

pub mod report;
pub mod scan;
