//! Folder download logic.

use std::path::Path;

use crate::api::PanoptoApi;
use crate::download::cookies::AuthCookie;
use crate::download::downloader::Downloader;
use crate::download::single::download_session;
use crate::error::{Result, ResultExt};
use crate::fs::{ensure_dir, session_destination};
use crate::output::print_info;

/// Outcome of a folder run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FolderSummary {
    pub listed: usize,
    pub downloaded: usize,
}

/// Download every session of a folder into `output_dir`, in listing order.
///
/// Stops at the first session that fails; later sessions are not attempted.
pub async fn download_folder(
    api: &PanoptoApi,
    downloader: &dyn Downloader,
    cookie: &AuthCookie,
    folder_id: &str,
    output_dir: &Path,
) -> Result<FolderSummary> {
    let sessions = api
        .list_sessions(folder_id)
        .await
        .context("list sessions")?;

    let mut summary = FolderSummary {
        listed: sessions.len(),
        downloaded: 0,
    };
    tracing::info!("Folder {} has {} sessions", folder_id, summary.listed);

    ensure_dir(output_dir).await.context("create output folder")?;

    for session in &sessions {
        print_info(&format!("Downloading session {} {}", session.name, session.id));

        let destination = session_destination(output_dir, session)
            .with_context(|| format!("download session {}", session.name))?;

        download_session(api, downloader, cookie, &session.id, &destination)
            .await
            .with_context(|| format!("download session {}", session.name))?;

        summary.downloaded += 1;
    }

    Ok(summary)
}
