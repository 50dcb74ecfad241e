//! Filesystem module.
//!
//! Provides:
//! - Output directory management
//! - Session filename generation

pub mod naming;
pub mod paths;

pub use naming::{sanitize_path_component, session_filename};
pub use paths::{ensure_dir, session_destination};
