//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Id shape looked for inside Panopto URLs.
const GUID_PATTERN: &str =
    r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_token(&config.account.auth_token)?;
    validate_endpoint("delivery_url", &config.endpoints.delivery_url)?;
    validate_endpoint("sessions_url", &config.endpoints.sessions_url)?;
    validate_max_results(config.endpoints.max_results)?;
    validate_downloader(&config.options.downloader)?;

    if config.options.target_id.is_none() {
        return Err(Error::MissingConfig(
            "id (session or folder id to download)".to_string(),
        ));
    }

    Ok(())
}

/// Validate the `.ASPXAUTH` token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::MissingConfig("auth token (-a)".to_string()));
    }

    // Check for placeholder values
    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_token") {
        return Err(Error::ConfigValidation {
            field: "auth_token".to_string(),
            message: "Token appears to be a placeholder. Copy the .ASPXAUTH cookie from your browser."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate that an endpoint is an absolute http(s) URL.
pub fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
    let url = url::Url::parse(endpoint).map_err(|e| Error::ConfigValidation {
        field: field.to_string(),
        message: format!("'{}' is not a valid URL: {}", endpoint, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

pub fn validate_max_results(max_results: u32) -> Result<()> {
    if max_results == 0 {
        return Err(Error::ConfigValidation {
            field: "max_results".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

pub fn validate_downloader(program: &str) -> Result<()> {
    if program.trim().is_empty() {
        return Err(Error::MissingConfig("downloader".to_string()));
    }
    Ok(())
}

/// Extract a session or folder id from a bare id or a Panopto URL.
///
/// Accepts viewer links (`Viewer.aspx?id=<guid>`) and folder links
/// (`List.aspx#folderID="<guid>"`, quotes optionally percent-encoded).
/// Anything else is taken as the id itself, trimmed and unquoted.
pub fn parse_panopto_id(input: &str) -> Result<String> {
    let input = input.trim().trim_matches('"');

    if input.starts_with("http://") || input.starts_with("https://") {
        let url_pattern = Regex::new(&format!(
            r#"(?i)(?:[?&#](?:id|folderID)=)(?:%22|")?({})"#,
            GUID_PATTERN
        ))
        .map_err(|e| Error::Config(e.to_string()))?;

        if let Some(id) = url_pattern.captures(input).and_then(|c| c.get(1)) {
            return Ok(id.as_str().to_string());
        }

        return Err(Error::ConfigValidation {
            field: "id".to_string(),
            message: format!("could not extract a session or folder id from URL: {}", input),
        });
    }

    if input.is_empty() {
        return Err(Error::ConfigValidation {
            field: "id".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    Ok(input.to_string())
}
