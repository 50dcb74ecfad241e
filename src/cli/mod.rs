//! Command-line interface.

pub mod args;

pub use args::{normalize_args, Args};
