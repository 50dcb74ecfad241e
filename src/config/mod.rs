//! Configuration module for the panopto-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Download mode selection
//! - Configuration validation and id parsing

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{
    AccountConfig, Config, EndpointsConfig, OptionsConfig, DEFAULT_DELIVERY_URL,
    DEFAULT_SESSIONS_URL,
};
pub use modes::DownloadMode;
pub use validation::{parse_panopto_id, validate_config};
