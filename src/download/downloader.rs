//! External downloader process.

use std::ffi::OsString;
use std::path::Path;
use std::process::ExitStatus;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::output::{create_spinner, print_downloader_output};

/// Something that can save a stream URL to a file, given a cookie jar.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Download `url` to `destination`, authenticating with `cookie_file`.
    async fn download(&self, url: &str, cookie_file: &Path, destination: &Path) -> Result<()>;

    /// Program name (for logging).
    fn name(&self) -> &str;
}

/// Exit status and collected output of one downloader run.
#[derive(Debug)]
pub struct DownloaderRun {
    pub status: ExitStatus,
    /// stdout followed by stderr.
    pub combined_output: String,
}

/// youtube-dl compatible command line downloader (also works with yt-dlp).
#[derive(Debug, Clone)]
pub struct YoutubeDl {
    program: String,
    leading_args: Vec<String>,
    show_progress: bool,
}

impl YoutubeDl {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            show_progress: true,
        }
    }

    /// Arguments placed before the download arguments, e.g. `-m yt_dlp`
    /// when the program is a Python interpreter.
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// `--cookies <jar> -f best <url> -o <destination>`
    pub fn build_args(url: &str, cookie_file: &Path, destination: &Path) -> Vec<OsString> {
        vec![
            "--cookies".into(),
            cookie_file.as_os_str().to_owned(),
            "-f".into(),
            "best".into(),
            url.into(),
            "-o".into(),
            destination.as_os_str().to_owned(),
        ]
    }

    /// Run the program to completion without judging its exit status.
    ///
    /// The child is killed if the returned future is dropped early.
    pub async fn run(
        &self,
        url: &str,
        cookie_file: &Path,
        destination: &Path,
    ) -> Result<DownloaderRun> {
        let args = Self::build_args(url, cookie_file, destination);
        tracing::debug!("Running {} {:?} {:?}", self.program, self.leading_args, args);

        let spinner = self
            .show_progress
            .then(|| create_spinner(&format!("Downloading {}", destination.display())));

        let result = Command::new(&self.program)
            .args(&self.leading_args)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let output = result.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::DownloaderNotFound(self.program.clone())
            } else {
                Error::DownloadFailed(format!("failed to run {}: {}", self.program, e))
            }
        })?;

        let mut combined_output = String::from_utf8_lossy(&output.stdout).into_owned();
        combined_output.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(DownloaderRun {
            status: output.status,
            combined_output,
        })
    }
}

#[async_trait]
impl Downloader for YoutubeDl {
    async fn download(&self, url: &str, cookie_file: &Path, destination: &Path) -> Result<()> {
        let run = self.run(url, cookie_file, destination).await?;

        if !run.status.success() {
            print_downloader_output(&run.combined_output);

            return Err(Error::DownloadFailed(format!(
                "{} {}",
                self.program, run.status
            )));
        }

        tracing::debug!("{} finished: {}", self.program, destination.display());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}
