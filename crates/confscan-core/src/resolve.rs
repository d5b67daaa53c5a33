//! # Interactive Path Resolution
//!
//! Console prompts that keep asking until the answer names something that
//! exists. Both resolvers read whole lines from any [`BufRead`] and write
//! prompts to any [`Write`]; the binary passes locked stdin/stdout.
//!
//! Each answer has its line terminator stripped and its separators
//! normalized (see [`normalize_separators`]). A blank answer is always
//! accepted: for the folder prompt it selects the working directory, for
//! the schema prompt it means "no schema".

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{PathError, PromptError};
use crate::path::{normalize_separators, FolderPath};

/// First question asked for the config folder.
pub const FOLDER_PROMPT: &str =
    "Enter path to config folder / Leave blank to scan current folder:";

/// Question repeated after a folder answer that does not exist.
pub const FOLDER_RETRY_PROMPT: &str =
    "Enter the path to the config folder / Leave empty to scan this folder:";

/// First question asked for the schema file.
pub const SCHEMA_PROMPT: &str =
    "Enter path to schema file / Leave blank to skip schema validation:";

/// Question repeated after a schema answer that does not exist.
pub const SCHEMA_RETRY_PROMPT: &str =
    "Enter the path to the schema file / Leave empty to skip schema validation:";

/// Ask for the config folder until the answer is an existing directory.
///
/// Blank input returns whatever `current_dir` yields, unchanged and
/// unchecked. `current_dir` is only called in that case.
///
/// # Errors
///
/// [`PromptError::Eof`] if input ends before an acceptable answer,
/// [`PromptError::Io`] if the console cannot be read or written,
/// [`PromptError::CurrentDir`] if a blank answer was given and
/// `current_dir` failed.
pub fn resolve_folder<R, W, C>(
    input: &mut R,
    output: &mut W,
    current_dir: C,
) -> Result<FolderPath, PromptError>
where
    R: BufRead,
    W: Write,
    C: FnOnce() -> Result<PathBuf, PathError>,
{
    let mut answer = ask(input, output, FOLDER_PROMPT, "config folder path")?;
    loop {
        if answer.is_empty() {
            let cwd = current_dir()?;
            tracing::debug!(cwd = %cwd.display(), "blank answer, scanning working directory");
            return Ok(FolderPath::from_cwd(cwd));
        }
        match FolderPath::existing(&answer) {
            Ok(folder) => return Ok(folder),
            Err(e) => {
                tracing::debug!(error = %e, "folder answer rejected");
                writeln!(output)?;
                writeln!(
                    output,
                    "Unable to find a directory called \"{answer}\", \
                     please check for spelling mistakes."
                )?;
            }
        }
        answer = ask(input, output, FOLDER_RETRY_PROMPT, "config folder path")?;
    }
}

/// Ask for a schema file until the answer is an existing file.
///
/// Returns `None` when the answer is blank.
///
/// # Errors
///
/// Same as [`resolve_folder`].
pub fn resolve_schema_file<R, W>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<PathBuf>, PromptError>
where
    R: BufRead,
    W: Write,
{
    let mut answer = ask(input, output, SCHEMA_PROMPT, "schema file path")?;
    loop {
        if answer.is_empty() {
            return Ok(None);
        }
        let path = PathBuf::from(&answer);
        if path.is_file() {
            return Ok(Some(path));
        }
        writeln!(output)?;
        writeln!(
            output,
            "Unable to find a file called \"{answer}\", please check for spelling mistakes."
        )?;
        answer = ask(input, output, SCHEMA_RETRY_PROMPT, "schema file path")?;
    }
}

/// Print `prompt` on its own line and read one normalized answer.
fn ask<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    what: &'static str,
) -> Result<String, PromptError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof(what));
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(normalize_separators(trimmed))
}
