//! Loader: read a local kube-bench JSON report and return the parsed tree.
//! No schema checks here; field access and validation belong to kb_report.

#![forbid(unsafe_code)]

use std::{fs::File, io::Read, path::Path};

use log::debug;
use serde_json::Value;

use crate::IoError;

/// Read `path` fully and parse it as JSON.
pub fn read_json_value(path: &Path) -> Result<Value, IoError> {
    let mut f = File::open(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    f.read_to_string(&mut text).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} ({} bytes)", path.display(), text.len());

    serde_json::from_str(&text).map_err(|e| IoError::Json {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
        msg: e.to_string(),
    })
}
