//! Download mode definitions.

use std::fmt;

/// What the target id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadMode {
    /// One session to one file (default).
    #[default]
    Session,
    /// Every session in a folder, one file each.
    Folder,
}

impl DownloadMode {
    pub fn from_folder_flag(folder: bool) -> Self {
        if folder {
            DownloadMode::Folder
        } else {
            DownloadMode::Session
        }
    }
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadMode::Session => write!(f, "session"),
            DownloadMode::Folder => write!(f, "folder"),
        }
    }
}
