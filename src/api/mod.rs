//! Panopto API module.
//!
//! This module provides:
//! - HTTP client for the DeliveryInfo and GetSessions endpoints
//! - Request and response types

pub mod client;
pub mod types;

pub use client::{PanoptoApi, AUTH_COOKIE_NAME, DEFAULT_MAX_RESULTS};
pub use types::*;
