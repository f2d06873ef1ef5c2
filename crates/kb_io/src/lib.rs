//! crates/kb_io/src/lib.rs
//! Minimal I/O crate: the only two file operations of the tool live here.
//!
//! - `loader`: read one local JSON file into a `serde_json::Value` tree.
//! - `writer`: overwrite one text file in place with a fully buffered body.
//! - Shared error type (`IoError`) carrying the offending path.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

/// Unified error for kb_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Input missing or unreadable.
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON. `line`/`column` are 1-based; `msg` already names them.
    #[error("json {}: {msg}", path.display())]
    Json {
        path: PathBuf,
        line: usize,
        column: usize,
        msg: String,
    },

    /// Output could not be written (permissions, missing directory, ...).
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub mod loader;
pub mod writer;

pub mod prelude {
    pub use crate::IoError;

    pub use crate::loader::read_json_value;
    pub use crate::writer::write_text_file;
}
