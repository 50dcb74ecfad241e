//! Run statistics reporting.

use console::style;

use crate::download::FolderSummary;

/// Print the result of a folder run.
pub fn print_folder_summary(summary: &FolderSummary, output_dir: &str) {
    eprintln!();
    eprintln!("{}", style("═".repeat(50)).for_stderr().dim());
    eprintln!("{}", style("Folder Statistics:").for_stderr().bold());
    eprintln!("  Sessions listed:     {}", summary.listed);
    eprintln!(
        "  Sessions downloaded: {}",
        style(summary.downloaded).for_stderr().green()
    );
    eprintln!("  Directory:           {}", output_dir);
    eprintln!("{}", style("═".repeat(50)).for_stderr().dim());
}
