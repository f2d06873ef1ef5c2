// crates/kb_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, CLI parsing, logging, and the
// run path (load → render → write).

mod args; // sibling module in this crate

mod exitcodes {
    pub const OK: i32 = 0;
    /// Bad flags, malformed JSON, missing or mistyped report fields.
    pub const VALIDATION: i32 = 2;
    /// Input unreadable or output unwritable.
    pub const IO: i32 = 4;
}

use std::fmt;
use std::process::ExitCode;

use log::debug;

use clap::Parser;

use args::Args;

use kb_io::loader;
use kb_report::{generate_report, ReportError};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// JSON shape / required field failures
    Validation(String),
    /// I/O errors (read/write)
    Io(String),
}

impl fmt::Display for MainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MainError::Validation(m) | MainError::Io(m) => f.write_str(m),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.init_logging();

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("kube-bench-report: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

fn run_once(args: &Args) -> Result<(), MainError> {
    debug!("input {}, output {}", args.input.display(), args.output.display());
    let tree = loader::read_json_value(&args.input).map_err(map_kbio_err)?;
    generate_report(&tree, &args.output).map_err(map_report_err)?;
    println!("Report saved to {}", args.output.display());
    Ok(())
}

/// Map our typed errors to the exit-code table.
fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
    }
}

/// Translate kb_io::IoError into MainError buckets for exit-code mapping.
fn map_kbio_err(e: kb_io::IoError) -> MainError {
    use kb_io::IoError::*;
    match e {
        Json { .. } => MainError::Validation(e.to_string()),
        Read { .. } | Write { .. } => MainError::Io(e.to_string()),
    }
}

fn map_report_err(e: ReportError) -> MainError {
    match e {
        ReportError::Io(io) => map_kbio_err(io),
        ReportError::MissingField { .. } | ReportError::InvalidField { .. } | ReportError::Core(_) => {
            MainError::Validation(e.to_string())
        }
    }
}
