//! Filename generation for downloaded sessions.

use crate::error::{Error, Result};

/// Extension the downloader is asked to write.
pub const VIDEO_EXTENSION: &str = "mp4";

/// Turn a session name into a single path component.
///
/// Separators and characters Windows rejects become `_`; the result never
/// escapes the output directory.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(format!(
            "session name '{}' is empty after sanitizing",
            name
        )));
    }

    if sanitized == "." || sanitized == ".." {
        return Err(Error::InvalidFilename(format!(
            "session name '{}' is not a usable file name",
            name
        )));
    }

    Ok(sanitized)
}

/// `<session name>.mp4`, sanitized.
pub fn session_filename(session_name: &str) -> Result<String> {
    let stem = sanitize_path_component(session_name)?;
    Ok(format!("{}.{}", stem, VIDEO_EXTENSION))
}
