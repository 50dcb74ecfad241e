//! Output path and directory management.

use std::path::{Path, PathBuf};

use crate::api::Session;
use crate::error::Result;
use crate::fs::naming::session_filename;

/// Where a session of a folder run is saved: `<dir>/<session name>.mp4`.
pub fn session_destination(output_dir: &Path, session: &Session) -> Result<PathBuf> {
    Ok(output_dir.join(session_filename(&session.name)?))
}

/// Ensure a directory exists, creating it and its parents if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
