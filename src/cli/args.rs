//! Command-line argument definitions using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;

/// Long options that may also be spelled with a single dash (`-id`).
const SINGLE_DASH_LONG: &[&str] = &[
    "id",
    "delivery",
    "sessions",
    "config",
    "downloader",
    "downloader-arg",
    "cookie-domain",
    "max-results",
    "quiet",
    "debug",
];

/// Options whose next argument is a value and must be left untouched.
const VALUE_OPTIONS: &[&str] = &[
    "-o",
    "--output",
    "-a",
    "--auth",
    "--id",
    "--delivery",
    "--sessions",
    "-c",
    "--config",
    "--downloader",
    "--downloader-arg",
    "--cookie-domain",
    "--max-results",
];

/// Panopto lecture downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "panopto-downloader",
    version,
    about = "Download lecture recordings from Panopto",
    long_about = "Resolves Panopto sessions to stream URLs and saves them with youtube-dl.\n\n\
                  Downloads a single session to a file, or every session of a folder into a directory."
)]
pub struct Args {
    /// Session id (or folder id with -f). Panopto viewer/folder URLs work too.
    #[arg(long)]
    pub id: Option<String>,

    /// Output file, or output directory in folder mode [default: index.mp4].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Download the entire folder.
    #[arg(short, long)]
    pub folder: bool,

    /// Value of the .ASPXAUTH cookie.
    #[arg(short, long, env = "PANOPTO_AUTH", hide_env_values = true)]
    pub auth: Option<String>,

    /// DeliveryInfo endpoint URL.
    #[arg(long)]
    pub delivery: Option<String>,

    /// GetSessions endpoint URL.
    #[arg(long)]
    pub sessions: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "panopto.toml")]
    pub config: PathBuf,

    /// Downloader program (youtube-dl compatible).
    #[arg(long)]
    pub downloader: Option<String>,

    /// Extra argument placed before the download arguments (repeatable).
    #[arg(long = "downloader-arg", allow_hyphen_values = true)]
    pub downloader_args: Vec<String>,

    /// Cookie domain for the downloader (defaults to the delivery host).
    #[arg(long)]
    pub cookie_domain: Option<String>,

    /// Maximum number of sessions to list in folder mode.
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Hide progress spinners.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Parse from the process arguments, accepting `-id` style flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(id) = self.id {
            config.options.target_id = Some(id);
        }

        if let Some(auth) = self.auth {
            config.account.auth_token = auth;
        }

        if let Some(delivery) = self.delivery {
            config.endpoints.delivery_url = delivery;
        }

        if let Some(sessions) = self.sessions {
            config.endpoints.sessions_url = sessions;
        }

        if let Some(domain) = self.cookie_domain {
            config.endpoints.cookie_domain = Some(domain);
        }

        if let Some(max_results) = self.max_results {
            config.endpoints.max_results = max_results;
        }

        if let Some(output) = self.output {
            config.options.output = output;
        }

        if let Some(downloader) = self.downloader {
            config.options.downloader = downloader;
        }

        if !self.downloader_args.is_empty() {
            config.options.downloader_args = self.downloader_args;
        }

        // Boolean flags (only override if set to non-default)
        if self.folder {
            config.options.folder = true;
        }

        if self.quiet {
            config.options.quiet = true;
        }
    }
}

/// Rewrite single-dash long options (`-id x`, `-delivery=u`) to `--` form.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if expect_value || passthrough {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let rewritten = match text.strip_prefix('-') {
            Some(body) if !body.starts_with('-') => {
                let name = body.split('=').next().unwrap_or(body);
                SINGLE_DASH_LONG
                    .contains(&name)
                    .then(|| format!("-{}", text))
            }
            _ => None,
        };

        let text = rewritten.unwrap_or_else(|| text.to_string());
        expect_value = !text.contains('=') && VALUE_OPTIONS.contains(&text.as_str());
        normalized.push(OsString::from(text));
    }

    normalized
}
