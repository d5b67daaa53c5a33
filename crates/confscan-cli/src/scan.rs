//! # Scan Command
//!
//! The whole `confscan` run: resolve the folder, load its JSON documents,
//! print them, and check them against a schema when one was requested.
//!
//! Console input and output are passed in rather than taken from the
//! process so the run can be driven from tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use confscan_core::{
    load_documents, normalize_separators, resolve_folder, resolve_schema_file, FolderPath,
    PathError,
};
use confscan_schema::{validate_documents, SchemaValidator};

use crate::report;

/// Arguments controlling a scan.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Config folder to scan. Prompts for one when omitted.
    #[arg(long)]
    pub folder: Option<String>,

    /// JSON Schema file every document is checked against.
    #[arg(long, conflicts_with = "prompt_schema")]
    pub schema: Option<String>,

    /// Ask for the schema file on the console. A blank answer skips validation.
    #[arg(long)]
    pub prompt_schema: bool,

    /// Pretty-print documents instead of one compact line each.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute a scan. Returns the process exit code.
///
/// The code is `1` when a schema was used and at least one document failed
/// it, `0` otherwise.
pub fn run_scan<R, W, C>(
    args: &ScanArgs,
    input: &mut R,
    output: &mut W,
    current_dir: C,
) -> Result<u8>
where
    R: BufRead,
    W: Write,
    C: FnOnce() -> Result<PathBuf, PathError>,
{
    let folder = match &args.folder {
        Some(path) => FolderPath::existing(path)
            .with_context(|| format!("--folder '{path}' is not usable"))?,
        None => resolve_folder(input, output, current_dir)
            .context("failed to resolve config folder")?,
    };
    tracing::info!(folder = %folder, "scanning config folder");

    let schema_path = match &args.schema {
        Some(path) => Some(PathBuf::from(normalize_separators(path))),
        None if args.prompt_schema => {
            resolve_schema_file(input, output).context("failed to resolve schema file")?
        }
        None => None,
    };
    let validator = schema_path
        .as_deref()
        .map(SchemaValidator::from_file)
        .transpose()?;

    let mut echo_error = None;
    let documents = load_documents(&folder, |name| {
        if echo_error.is_none() {
            if let Err(e) = writeln!(output, "{name}") {
                echo_error = Some(e);
            }
        }
    })
    .with_context(|| format!("failed to scan {folder}"))?;
    if let Some(e) = echo_error {
        return Err(e).context("failed to write scan progress");
    }

    report::print_documents(output, &documents, args.pretty)?;

    let Some(validator) = validator else {
        return Ok(0);
    };
    let verdicts = validate_documents(&validator, &documents);
    let failed = report::print_verdicts(output, validator.schema_name(), &verdicts)?;
    if failed > 0 {
        tracing::warn!(
            failed,
            schema = validator.schema_name(),
            "documents failed schema validation"
        );
        Ok(1)
    } else {
        Ok(0)
    }
}
