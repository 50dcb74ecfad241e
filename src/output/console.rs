//! Console output utilities.
//!
//! Everything goes to stderr; stdout is left to the downloader.

use std::io::{self, Write};

use console::style;

use crate::error::{exit_codes, Error};

pub const ERROR_PREFIX: &str = "error:";

/// Print an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("INFO").for_stderr().cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", style("OK").for_stderr().green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").for_stderr().yellow().bold(), message);
}

/// `error: <message>`, colored when stderr is a terminal.
pub fn error_line(message: &str) -> String {
    format!(
        "{} {}",
        style(ERROR_PREFIX).for_stderr().red().bold(),
        message
    )
}

/// Exit code and stderr line for a fatal error.
pub fn report(err: &Error) -> (u8, String) {
    (exit_codes::FAILURE, error_line(&err.to_string()))
}

/// Write downloader output verbatim, minus trailing whitespace.
pub fn relay_output<W: Write>(mut writer: W, output: &str) -> io::Result<()> {
    let output = output.trim_end();
    if output.is_empty() {
        return Ok(());
    }
    writeln!(writer, "{}", style(output).for_stderr().dim())
}

/// Relay the combined output of a failed downloader run.
pub fn print_downloader_output(output: &str) {
    if let Err(e) = relay_output(io::stderr().lock(), output) {
        tracing::debug!("Could not relay downloader output: {}", e);
    }
}

/// Print what is about to be downloaded.
pub fn print_run_summary(mode: &str, target_id: &str, output: &str) {
    eprintln!();
    eprintln!("{}", style("Download:").for_stderr().bold());
    eprintln!("  Mode:   {}", mode);
    eprintln!("  Id:     {}", target_id);
    eprintln!("  Output: {}", output);
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        console::set_colors_enabled_stderr(false);
    }

    #[test]
    fn test_report_failure_line() {
        plain();
        let err = Error::NoStreamsAvailable.context("extract stream URL");
        assert_eq!(
            report(&err),
            (1, "error: extract stream URL: no available streams".to_string())
        );
    }

    #[test]
    fn test_report_interrupted_is_failure() {
        plain();
        let (code, line) = report(&Error::Interrupted);
        assert_eq!(code, exit_codes::FAILURE);
        assert_eq!(line, "error: interrupted");
    }

    #[test]
    fn test_report_download_failure_carries_status() {
        plain();
        let err = Error::DownloadFailed("youtube-dl exit status: 3".into())
            .context("fetch stream")
            .context("download session L1");
        let (code, line) = report(&err);
        assert_eq!(code, 1);
        assert!(line.starts_with("error: download session L1: fetch stream: download video:"));
        assert!(line.ends_with("exit status: 3"));
    }

    #[test]
    fn test_relay_output_keeps_both_streams() {
        plain();
        let mut buf = Vec::new();
        relay_output(&mut buf, "out\nerr\n\n").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "out\nerr\n");
    }

    #[test]
    fn test_relay_output_skips_blank() {
        let mut buf = Vec::new();
        relay_output(&mut buf, " \n").unwrap();
        assert!(buf.is_empty());
    }
}
