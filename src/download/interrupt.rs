//! Cancellation on Ctrl-C / SIGTERM.
//!
//! Work is raced against the signal and dropped when it fires, so scoped
//! resources (the cookie jar, the downloader child) are released before the
//! process exits.

use std::future::Future;

use crate::error::{Error, Result};

/// Resolves on Ctrl-C, or SIGTERM on unix. Never resolves if no handler
/// can be installed.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(_) => ctrl_c.await,
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}

/// Drive `work` to completion unless `cancel` resolves first.
///
/// On cancellation `work` is dropped before `Error::Interrupted` is returned.
pub async fn run_until<T, W, C>(work: W, cancel: C) -> Result<T>
where
    W: Future<Output = Result<T>>,
    C: Future<Output = ()>,
{
    tokio::select! {
        result = work => result,
        _ = cancel => {
            tracing::warn!("Interrupted, cleaning up");
            Err(Error::Interrupted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;

    use crate::download::cookies::AuthCookie;
    use crate::download::stream::fetch_stream;
    use crate::download::testing::RecordingDownloader;

    #[tokio::test]
    async fn test_completed_work_wins() {
        let result = run_until(async { Ok(7) }, std::future::pending()).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_interrupt_mid_download_removes_cookie_jar() {
        let downloader = RecordingDownloader::hanging();
        let cookie = AuthCookie::new("host", "SECRET");

        let err = run_until(
            fetch_stream(&downloader, &cookie, "https://x/a.mp4", Path::new("a.mp4")),
            tokio::time::sleep(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Interrupted));

        let calls = downloader.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].cookie_jar_contents.contains("SECRET"));
        assert!(!calls[0].cookie_file.exists());
    }
}
