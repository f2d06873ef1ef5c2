// crates/kb_cli/src/args.rs
//
// CLI argument surface. Every flag has a default, so running the
// binary with no arguments reads `kube-bench-results.json` and writes
// `kube_bench_report.md` in the working directory.
//
// Rules:
// - Paths are used as given (not canonicalized) so the confirmation line
//   echoes what the user typed
// - -v/-q only affect log records on stderr, never stdout

use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use kb_core::{DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kube-bench-report",
    version,
    disable_help_subcommand = true,
    about = "Render kube-bench JSON results as a Markdown report"
)]
pub struct Args {
    /// kube-bench JSON results to read.
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Markdown file to write (replaced if it exists).
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// No log output at all.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level for the current flags; `None` means logging stays off.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            return None;
        }
        Some(match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
    }

    /// Initialize logging based on verbosity level. `RUST_LOG` is read first,
    /// then the flag level applies on top.
    pub fn init_logging(&self) {
        let Some(level) = self.log_level() else {
            return;
        };
        env_logger::Builder::from_default_env()
            .filter_level(level)
            .format_timestamp(None)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("kube-bench-report").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_fixed_file_names() {
        let a = parse(&[]);
        assert_eq!(a.input, PathBuf::from("kube-bench-results.json"));
        assert_eq!(a.output, PathBuf::from("kube_bench_report.md"));
        assert_eq!(a.log_level(), Some(LevelFilter::Warn));
    }

    #[test]
    fn verbosity_and_quiet() {
        assert_eq!(parse(&["-v"]).log_level(), Some(LevelFilter::Info));
        assert_eq!(parse(&["-vv"]).log_level(), Some(LevelFilter::Debug));
        assert_eq!(parse(&["-vvvv"]).log_level(), Some(LevelFilter::Trace));
        assert_eq!(parse(&["--quiet"]).log_level(), None);
        assert!(Args::try_parse_from(["kube-bench-report", "-q", "-v"]).is_err());
    }
}
