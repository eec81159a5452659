use anyhow::Result;

use crate::cli::OutputFormat;

use super::Report;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &Report, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_text(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }

    /// One line per file, then the totals line. Always newline-terminated.
    pub fn format_text(report: &Report) -> String {
        let mut out = String::new();
        for file in &report.files {
            out.push_str(&file.to_line());
            out.push('\n');
        }
        out.push_str(&report.summary_line());
        out.push('\n');
        out
    }
}
