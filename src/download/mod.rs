//! Download module.
//!
//! This module provides:
//! - Netscape cookie jar handling
//! - The external downloader interface
//! - Stream fetching
//! - Single session downloading
//! - Folder downloading
//! - Cancellation on Ctrl-C

pub mod cookies;
pub mod downloader;
pub mod folder;
pub mod interrupt;
pub mod single;
pub mod stream;

pub use cookies::{AuthCookie, CookieJar};
pub use downloader::{Downloader, YoutubeDl};
pub use folder::{download_folder, FolderSummary};
pub use interrupt::{run_until, shutdown_signal};
pub use single::download_session;
pub use stream::fetch_stream;
