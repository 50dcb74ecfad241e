//! Stream fetching: cookie jar plus downloader run.

use std::path::Path;

use crate::download::cookies::{AuthCookie, CookieJar};
use crate::download::downloader::Downloader;
use crate::error::{Result, ResultExt};

/// Save `url` to `destination` through the external downloader.
///
/// The cookie jar lives only for the duration of the call and is removed
/// whether the downloader succeeds or not.
pub async fn fetch_stream(
    downloader: &dyn Downloader,
    cookie: &AuthCookie,
    url: &str,
    destination: &Path,
) -> Result<()> {
    let jar = CookieJar::create(cookie).context("create tmp cookie")?;
    tracing::debug!(
        "Cookie jar {} for {}",
        jar.path().display(),
        downloader.name()
    );

    downloader.download(url, jar.path(), destination).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::testing::RecordingDownloader;
    use crate::error::Error;

    #[tokio::test]
    async fn test_jar_exists_during_download_and_is_removed_after() {
        let downloader = RecordingDownloader::default();
        let cookie = AuthCookie::new("host", "tok");

        fetch_stream(&downloader, &cookie, "https://x/a.mp4", Path::new("a.mp4"))
            .await
            .unwrap();

        let calls = downloader.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "https://x/a.mp4");
        assert!(calls[0].cookie_jar_contents.contains(".ASPXAUTH\ttok"));
        assert!(!calls[0].cookie_file.exists());
    }

    #[tokio::test]
    async fn test_jar_removed_when_download_fails() {
        let downloader = RecordingDownloader::failing_on("a.mp4");
        let cookie = AuthCookie::new("host", "tok");

        let err = fetch_stream(&downloader, &cookie, "u", Path::new("a.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DownloadFailed(_)));

        let calls = downloader.calls();
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].cookie_file.exists());
    }
}
