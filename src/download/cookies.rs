//! Netscape cookie jar handed to the external downloader.

use std::io::Write;
use std::path::Path;

use tempfile::TempPath;

use crate::api::AUTH_COOKIE_NAME;
use crate::error::Result;

/// First line of every Netscape cookie file.
pub const NETSCAPE_HEADER: &str = "# Netscape HTTP Cookie File";

/// The `.ASPXAUTH` cookie scoped to one Panopto host.
#[derive(Debug, Clone)]
pub struct AuthCookie {
    pub domain: String,
    pub token: String,
}

impl AuthCookie {
    pub fn new(domain: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            token: token.into(),
        }
    }

    /// Tab-separated cookie line: domain, include subdomains, path, secure,
    /// expiry, name, value. Expiry 0 makes it a session cookie.
    pub fn netscape_line(&self) -> String {
        [
            self.domain.as_str(),
            "FALSE",
            "/",
            "TRUE",
            "0",
            AUTH_COOKIE_NAME,
            self.token.as_str(),
        ]
        .join("\t")
    }
}

/// A closed temporary cookie file, removed when dropped.
#[derive(Debug)]
pub struct CookieJar {
    path: TempPath,
}

impl CookieJar {
    /// Write the cookie to a fresh temp file and close it.
    pub fn create(cookie: &AuthCookie) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("cookies")
            .suffix(".txt")
            .tempfile()?;

        writeln!(file, "{}", NETSCAPE_HEADER)?;
        writeln!(file, "{}", cookie.netscape_line())?;
        file.flush()?;

        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
