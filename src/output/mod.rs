//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Spinners while the downloader runs
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{
    error_line, print_downloader_output, print_info, print_run_summary, print_success,
    print_warning, relay_output, report,
};
pub use progress::create_spinner;
pub use stats::print_folder_summary;
