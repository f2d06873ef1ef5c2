//! kb_core — Core types, running totals, and text helpers.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! workspace (`kb_io`, `kb_report`, `kb_cli`).
//!
//! - Entities: `Document` → `Control` → `Test` → `CheckResult`
//! - Per-test `Counts` and the rendering-pass accumulator `Totals`
//! - Character-aware truncation and newline collapsing for rendered text

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod errors {
    use core::fmt;

    /// Minimal error set for core arithmetic on counters.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// A running total would exceed `u64::MAX`.
        Overflow { field: &'static str },
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::Overflow { field } => write!(f, "total overflow: {field}"),
            }
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for CoreError {}
}

pub mod entities;
pub mod text;
pub mod totals;

pub use entities::{CheckResult, Control, Counts, Document, Test};
pub use errors::CoreError;
pub use totals::Totals;

/// Default input path read by the entry point.
pub const DEFAULT_INPUT: &str = "kube-bench-results.json";
/// Default output path written by the renderer.
pub const DEFAULT_OUTPUT: &str = "kube_bench_report.md";
