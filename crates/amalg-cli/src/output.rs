//! Output formatting shared by the subcommands.

use anyhow::Result;
use serde::Serialize;

/// How a subcommand prints its report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON, for scripts.
    Json,
}

/// Render `report` in the requested format.
pub fn render<T: Serialize>(
    format: OutputFormat,
    report: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
