//! Text output (kb_io)
//! - The whole body is written in one call; nothing is streamed.
//! - The target is opened in place (create + truncate), so an existing file
//!   keeps its inode, mode and owner, and a symlink is written through.
//! - The parent directory must already exist; it is never created here.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use log::info;

use crate::IoError;

/// Replace the content of `path` with `text`, overwriting any existing file.
pub fn write_text_file(path: &Path, text: &str) -> Result<(), IoError> {
    overwrite(path, text.as_bytes()).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}

fn overwrite(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    f.write_all(bytes)?;
    f.flush()
}
