//! crates/kb_core/src/entities.rs
//! Read-only view of a kube-bench document after field validation.
//! Sequence order is input order; nothing here reorders.

use alloc::string::String;
use alloc::vec::Vec;

/// Whole scanner report (`Controls` array).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub controls: Vec<Control>,
}

/// Top-level CIS grouping, e.g. the checks for one node role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub id: String,
    pub text: String,
    pub node_type: String,
    pub tests: Vec<Test>,
}

/// Named subsection of a control with its own counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Test {
    pub section: String,
    pub desc: String,
    pub counts: Counts,
    pub results: Vec<CheckResult>,
}

/// The four scanner counters carried by each test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub pass: u64,
    pub fail: u64,
    pub warn: u64,
    pub info: u64,
}

/// One executed check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub test_number: String,
    pub test_desc: String,
    /// Raw scanner status (`PASS`, `FAIL`, `WARN`, `INFO`, ...), never normalized.
    pub status: String,
    /// `None` when absent, null, or empty in the input.
    pub reason: Option<String>,
    /// `None` when absent, null, or empty in the input.
    pub remediation: Option<String>,
}

impl Document {
    pub fn test_count(&self) -> usize {
        self.controls.iter().map(|c| c.tests.len()).sum()
    }

    pub fn result_count(&self) -> usize {
        self.controls
            .iter()
            .flat_map(|c| c.tests.iter())
            .map(|t| t.results.len())
            .sum()
    }
}
