//! Panopto Downloader - fetch lecture recordings from Panopto.
//!
//! This library resolves Panopto sessions to stream URLs and hands the actual
//! transfer to an external youtube-dl compatible downloader.
//!
//! # Features
//!
//! - Download a single session to a file
//! - Download every session of a folder into a directory
//! - Authenticate with a pre-obtained `.ASPXAUTH` cookie
//! - Pluggable downloader via the [`Downloader`] trait
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use panopto_downloader::{download_session, AuthCookie, Config, PanoptoApi, YoutubeDl};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.account.auth_token = "ASPXAUTH-VALUE".to_string();
//!
//!     let api = PanoptoApi::from_config(&config)?;
//!     let cookie = AuthCookie::new(config.cookie_domain()?, config.account.auth_token.clone());
//!     let downloader = YoutubeDl::new("youtube-dl");
//!
//!     download_session(&api, &downloader, &cookie, "session-id", Path::new("index.mp4")).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{PanoptoApi, Session};
pub use config::{Config, DownloadMode};
pub use download::{
    download_folder, download_session, fetch_stream, AuthCookie, Downloader, FolderSummary,
    YoutubeDl,
};
pub use error::{Error, Result};
