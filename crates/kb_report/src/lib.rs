//! kb_report — Markdown report for kube-bench results.
//!
//! Pipeline: JSON tree → `structure::build_document` → `render_md::render_markdown`
//! → `kb_io::writer::write_text_file`. The first two steps are pure; the
//! write happens once, with the full body buffered.

#![deny(unsafe_code)]

use std::path::Path;

use log::info;
use serde_json::Value;
use thiserror::Error;

use kb_core::{CoreError, Totals};
use kb_io::prelude::*;

pub mod render_md;
pub mod structure;

pub use kb_core::DEFAULT_OUTPUT;
pub use render_md::{render_lines, render_markdown, Rendered};
pub use structure::build_document;

// ===== Errors =====
#[derive(Debug, Error)]
pub enum ReportError {
    /// A mandatory field is absent. `id` identifies the containing entity.
    #[error("missing field `{field}` on {entity} {id}")]
    MissingField {
        entity: &'static str,
        id: String,
        field: &'static str,
    },

    /// A field is present with the wrong JSON type.
    #[error("field `{field}` on {entity} {id}: expected {expected}")]
    InvalidField {
        entity: &'static str,
        id: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Io(#[from] IoError),
}

// ===== API =====

/// Render `tree` as Markdown and write it to `output`, replacing any existing
/// file. Returns the summary totals written at the end of the report.
///
/// Nothing is written unless the whole document maps and renders.
pub fn generate_report(tree: &Value, output: &Path) -> Result<Totals, ReportError> {
    let doc = build_document(tree)?;
    let Rendered { text, totals } = render_markdown(&doc)?;
    write_text_file(output, &text)?;
    info!(
        "report totals: pass={} fail={} warn={} info={}",
        totals.pass, totals.fail, totals.warn, totals.info
    );
    Ok(totals)
}
