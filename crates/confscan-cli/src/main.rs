//! # confscan CLI entry point
//!
//! Parses command-line arguments, installs logging, and runs the scan
//! against the real console.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use confscan_cli::scan::{run_scan, ScanArgs};
use confscan_core::FolderPath;

/// Scan a config folder and print every JSON document in it.
///
/// Each entry name is echoed as it is read. Files that are not JSON are
/// skipped. With a schema, every document is also checked and the run exits
/// with status 1 if any of them fail.
#[derive(Parser, Debug)]
#[command(name = "confscan", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit log lines as JSON objects.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(flatten)]
    scan: ScanArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!("confscan v{} starting", env!("CARGO_PKG_VERSION"));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = run_scan(&cli.scan, &mut stdin.lock(), &mut stdout.lock(), || {
        FolderPath::current_dir().map(FolderPath::into_path_buf)
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
