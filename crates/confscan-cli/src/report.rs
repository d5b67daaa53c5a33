//! # Console Report
//!
//! Writes the scan results: a fixed header, one line per document in scan
//! order, and, when a schema was used, a PASS/FAIL line per document with
//! its violations underneath.

use std::io::Write;

use anyhow::Result;
use confscan_core::ParsedDocument;
use confscan_schema::DocumentVerdict;

/// Printed between the scanned entry names and the documents.
pub const HEADER: &str = "\n\njson configs:\n\n";

/// Print the header and every document.
///
/// Documents are compact JSON by default and `serde_json`'s pretty form
/// when `pretty` is set.
pub fn print_documents<W: Write>(
    out: &mut W,
    documents: &[ParsedDocument],
    pretty: bool,
) -> Result<()> {
    writeln!(out, "{HEADER}")?;
    for doc in documents {
        if pretty {
            serde_json::to_writer_pretty(&mut *out, &doc.value)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{doc}")?;
        }
    }
    Ok(())
}

/// Print one verdict line per document. Returns how many failed.
pub fn print_verdicts<W: Write>(
    out: &mut W,
    schema_name: &str,
    verdicts: &[DocumentVerdict],
) -> Result<usize> {
    writeln!(out)?;
    writeln!(out, "schema validation ({schema_name}):")?;
    writeln!(out)?;

    let mut failed = 0;
    for verdict in verdicts {
        if verdict.passed() {
            writeln!(out, "PASS {}", verdict.document)?;
        } else {
            failed += 1;
            writeln!(out, "FAIL {}", verdict.document)?;
            for violation in &verdict.violations {
                writeln!(out, "  {violation}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{} passed, {failed} failed", verdicts.len() - failed)?;
    Ok(failed)
}
