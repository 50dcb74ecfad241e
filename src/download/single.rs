//! Single session download logic.

use std::path::Path;

use crate::api::PanoptoApi;
use crate::download::cookies::AuthCookie;
use crate::download::downloader::Downloader;
use crate::download::stream::fetch_stream;
use crate::error::{Result, ResultExt};

/// Resolve one session and download its first stream to `destination`.
pub async fn download_session(
    api: &PanoptoApi,
    downloader: &dyn Downloader,
    cookie: &AuthCookie,
    session_id: &str,
    destination: &Path,
) -> Result<()> {
    tracing::info!("Resolving session {}", session_id);

    let url = api
        .resolve_stream_url(session_id)
        .await
        .context("extract stream URL")?;

    tracing::debug!("Stream URL for {}: {}", session_id, url);

    fetch_stream(downloader, cookie, &url, destination)
        .await
        .context("fetch stream")
}
