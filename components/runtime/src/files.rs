use std::path::Path;

use tracing::info;

use crate::RuntimeError;

/// Reads a source file in full, dropping the single trailing line terminator editors leave
/// behind.
pub fn read_source(path: &Path) -> Result<String, RuntimeError> {
    info!("reading '{}'", path.display());

    let bytes = std::fs::read(path).map_err(|source| RuntimeError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    info!("read {} bytes from '{}'", bytes.len(), path.display());

    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    strip_terminator(&mut text);
    Ok(text)
}

fn strip_terminator(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}
