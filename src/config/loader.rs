//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default DeliveryInfo endpoint.
pub const DEFAULT_DELIVERY_URL: &str =
    "https://tum.cloud.panopto.eu/Panopto/Pages/Viewer/DeliveryInfo.aspx";

/// Default GetSessions endpoint.
pub const DEFAULT_SESSIONS_URL: &str =
    "https://tum.cloud.panopto.eu/Panopto/Services/Data.svc/GetSessions";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Account credentials configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountConfig {
    /// Value of the `.ASPXAUTH` cookie.
    #[serde(default)]
    pub auth_token: String,
}

/// Panopto endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_delivery_url")]
    pub delivery_url: String,

    #[serde(default = "default_sessions_url")]
    pub sessions_url: String,

    /// Domain written into the downloader's cookie jar.
    /// Derived from `delivery_url` when unset.
    #[serde(default)]
    pub cookie_domain: Option<String>,

    /// Page size for folder listings.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            delivery_url: default_delivery_url(),
            sessions_url: default_sessions_url(),
            cookie_domain: None,
            max_results: default_max_results(),
        }
    }
}

/// Download options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Session or folder id to download.
    #[serde(default)]
    pub target_id: Option<String>,

    /// Output file (single mode) or directory (folder mode).
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Download a whole folder instead of one session.
    #[serde(default)]
    pub folder: bool,

    /// External downloader program.
    #[serde(default = "default_downloader")]
    pub downloader: String,

    /// Extra arguments placed before the download arguments.
    #[serde(default)]
    pub downloader_args: Vec<String>,

    /// Hide spinners and progress messages.
    #[serde(default)]
    pub quiet: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            target_id: None,
            output: default_output(),
            folder: false,
            downloader: default_downloader(),
            downloader_args: Vec::new(),
            quiet: false,
        }
    }
}

fn default_delivery_url() -> String {
    DEFAULT_DELIVERY_URL.to_string()
}

fn default_sessions_url() -> String {
    DEFAULT_SESSIONS_URL.to_string()
}

fn default_max_results() -> u32 {
    100
}

fn default_output() -> PathBuf {
    PathBuf::from("index.mp4")
}

fn default_downloader() -> String {
    "youtube-dl".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Host to put in the downloader cookie jar.
    pub fn cookie_domain(&self) -> Result<String> {
        if let Some(domain) = &self.endpoints.cookie_domain {
            return Ok(domain.clone());
        }

        let url = url::Url::parse(&self.endpoints.delivery_url)?;
        url.host_str().map(str::to_string).ok_or_else(|| Error::ConfigValidation {
            field: "delivery_url".to_string(),
            message: format!("URL has no host: {}", self.endpoints.delivery_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoints.delivery_url, DEFAULT_DELIVERY_URL);
        assert_eq!(config.endpoints.sessions_url, DEFAULT_SESSIONS_URL);
        assert_eq!(config.endpoints.max_results, 100);
        assert_eq!(config.options.output, PathBuf::from("index.mp4"));
        assert_eq!(config.options.downloader, "youtube-dl");
        assert!(!config.options.folder);
        assert!(config.options.downloader_args.is_empty());
    }

    #[test]
    fn test_cookie_domain_from_delivery_url() {
        let mut config = Config::default();
        assert_eq!(config.cookie_domain().unwrap(), "tum.cloud.panopto.eu");

        config.endpoints.delivery_url =
            "https://uni.hosted.panopto.com/Panopto/Pages/Viewer/DeliveryInfo.aspx".into();
        assert_eq!(config.cookie_domain().unwrap(), "uni.hosted.panopto.com");

        config.endpoints.cookie_domain = Some("override.example".into());
        assert_eq!(config.cookie_domain().unwrap(), "override.example");
    }

    #[test]
    fn test_cookie_domain_invalid_url() {
        let mut config = Config::default();
        config.endpoints.delivery_url = "not a url".into();
        assert!(config.cookie_domain().is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[account]
auth_token = "ABCDEF"

[endpoints]
delivery_url = "https://example.com/DeliveryInfo.aspx"

[options]
downloader = "yt-dlp"
downloader_args = ["--no-part"]
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.account.auth_token, "ABCDEF");
        assert_eq!(
            config.endpoints.delivery_url,
            "https://example.com/DeliveryInfo.aspx"
        );
        assert_eq!(config.endpoints.sessions_url, DEFAULT_SESSIONS_URL);
        assert_eq!(config.options.downloader, "yt-dlp");
        assert_eq!(config.options.downloader_args, ["--no-part"]);
        assert_eq!(config.options.output, PathBuf::from("index.mp4"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
