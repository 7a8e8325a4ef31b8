pub mod solidity;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Error;

/// Write `text` to `path`, replacing whatever was there.
///
/// The parent directory is created when it does not exist yet.
pub fn emit(text: &str, path: &Path) -> Result<(), Error> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    fs::write(path, text).map_err(|e| Error::io(path, e))?;

    info!(path = %path.display(), bytes = text.len(), "script written");
    Ok(())
}
